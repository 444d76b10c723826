// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for loadwise
//!
//! Handles loading and saving settings from ~/.loadwise/settings.json

use serde::{Deserialize, Serialize};

use crate::capability::{BenchmarkConfig, ClassificationWeights, NetworkInfo};
use crate::strategy::AdjusterThresholds;

mod io;
mod validation;

/// Main settings structure, stored in ~/.loadwise/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Device classification weights and thresholds
    #[serde(default)]
    pub classification: ClassificationWeights,

    /// Startup benchmark tuning
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    /// Runtime adjustment thresholds
    #[serde(default)]
    pub adjuster: AdjusterThresholds,

    /// Runtime monitor settings
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Network information to report when the platform has no network API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkInfo>,
}

/// Runtime monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    /// Sampling interval in milliseconds
    #[serde(default = "default_monitor_interval_ms")]
    pub interval_ms: u64,

    /// Network latency reported when it cannot be measured
    #[serde(default)]
    pub assumed_latency_ms: f64,

    /// Frame rate reported when it cannot be measured
    #[serde(default = "default_assumed_fps")]
    pub assumed_fps: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_monitor_interval_ms(),
            assumed_latency_ms: 0.0,
            assumed_fps: default_assumed_fps(),
        }
    }
}

fn default_monitor_interval_ms() -> u64 {
    5_000
}

fn default_assumed_fps() -> f64 {
    60.0
}
