// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Runtime strategy adjustment

use serde::{Deserialize, Serialize};

use super::types::{LoadingStrategy, Quality};

/// Concurrency never drops below this under memory pressure
const MEMORY_PRESSURE_MIN_CONCURRENCY: u32 = 2;

/// Concurrency used while the network is laggy
const HIGH_LATENCY_CONCURRENCY: u32 = 2;

/// Request timeout used while the network is laggy
const HIGH_LATENCY_TIMEOUT_MS: u64 = 20_000;

/// Live performance sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeMetrics {
    /// Fraction of memory in use, 0..=1
    pub memory_usage: f64,
    /// Fraction of CPU in use, 0..=1
    pub cpu_usage: f64,
    pub network_latency_ms: f64,
    pub fps: f64,
}

/// Thresholds at which runtime samples tighten the strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdjusterThresholds {
    pub memory_usage: f64,
    pub cpu_usage: f64,
    pub network_latency_ms: f64,
    pub min_fps: f64,
}

impl Default for AdjusterThresholds {
    fn default() -> Self {
        Self {
            memory_usage: 0.8,
            cpu_usage: 0.7,
            network_latency_ms: 1000.0,
            min_fps: 30.0,
        }
    }
}

/// Return a copy of `current` tightened for the sampled metrics, using the
/// default thresholds.
pub fn adjust(current: &LoadingStrategy, metrics: &RuntimeMetrics) -> LoadingStrategy {
    adjust_with(current, metrics, &AdjusterThresholds::default())
}

/// Return a copy of `current` tightened for the sampled metrics.
///
/// Each threshold is checked independently; several may apply at once.
/// Fields no rule touches are carried over unchanged.
pub fn adjust_with(
    current: &LoadingStrategy,
    metrics: &RuntimeMetrics,
    thresholds: &AdjusterThresholds,
) -> LoadingStrategy {
    let mut next = current.clone();

    if metrics.memory_usage > thresholds.memory_usage {
        next.aggressive_caching = false;
        next.preload_next_page = false;
        next.max_concurrent_requests = next
            .max_concurrent_requests
            .saturating_sub(2)
            .max(MEMORY_PRESSURE_MIN_CONCURRENCY);
    }

    if metrics.cpu_usage > thresholds.cpu_usage {
        next.animation_level = next.animation_level.at_most_reduced();
        next.advanced_features = false;
    }

    if metrics.network_latency_ms > thresholds.network_latency_ms {
        next.request_timeout_ms = HIGH_LATENCY_TIMEOUT_MS;
        next.max_concurrent_requests = HIGH_LATENCY_CONCURRENCY;
    }

    if metrics.fps < thresholds.min_fps {
        next.animation_level = next.animation_level.at_most_reduced();
        next.image_quality = Quality::Low;
    }

    next
}
