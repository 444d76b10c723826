// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device class classification
//!
//! Devices are bucketed with an additive point system over memory, core
//! count, benchmark score and connection type. The default weights are
//! heuristics rather than measurements; they live in [`ClassificationWeights`]
//! so they can be re-tuned through settings.

use serde::{Deserialize, Serialize};

use super::network::ConnectionType;

/// Coarse device bucket derived from hardware, network and benchmark signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceClass {
    LowEnd,
    MidRange,
    HighEnd,
}

impl DeviceClass {
    /// Image scale factor applied for this class
    pub fn size_factor(&self) -> f64 {
        match self {
            DeviceClass::LowEnd => 0.5,
            DeviceClass::MidRange => 0.75,
            DeviceClass::HighEnd => 1.0,
        }
    }

    /// Get a human-readable description of this class
    pub fn description(&self) -> &'static str {
        match self {
            DeviceClass::LowEnd => "Low-end device (reduced quality and concurrency)",
            DeviceClass::MidRange => "Mid-range device (balanced defaults)",
            DeviceClass::HighEnd => "High-end device (full quality, eager preloading)",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceClass::LowEnd => write!(f, "low-end"),
            DeviceClass::MidRange => write!(f, "mid-range"),
            DeviceClass::HighEnd => write!(f, "high-end"),
        }
    }
}

/// One step of a threshold table: values at or above `at_least` earn `points`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStep {
    pub at_least: f64,
    pub points: f64,
}

impl PointStep {
    pub const fn new(at_least: f64, points: f64) -> Self {
        Self { at_least, points }
    }
}

/// Points for the highest step the value reaches; steps are checked in order
fn step_points(steps: &[PointStep], value: f64) -> f64 {
    steps
        .iter()
        .find(|step| value >= step.at_least)
        .map(|step| step.points)
        .unwrap_or(0.0)
}

/// Tunable weights for device classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationWeights {
    /// Memory steps in GB, highest first
    pub memory: Vec<PointStep>,
    /// Logical core steps, highest first
    pub cores: Vec<PointStep>,
    /// Points awarded for a perfect benchmark score of 100
    pub benchmark_max_points: f64,
    /// Points for wifi and 5g connections
    pub fast_connection_points: f64,
    /// Points for 4g connections
    pub connection_4g_points: f64,
    /// Points for 3g connections
    pub connection_3g_points: f64,
    /// Minimum total for high-end
    pub high_end_threshold: f64,
    /// Minimum total for mid-range
    pub mid_range_threshold: f64,
}

impl Default for ClassificationWeights {
    fn default() -> Self {
        Self {
            memory: vec![
                PointStep::new(8.0, 30.0),
                PointStep::new(4.0, 20.0),
                PointStep::new(2.0, 10.0),
            ],
            cores: vec![
                PointStep::new(8.0, 25.0),
                PointStep::new(4.0, 15.0),
                PointStep::new(2.0, 10.0),
            ],
            benchmark_max_points: 25.0,
            fast_connection_points: 20.0,
            connection_4g_points: 15.0,
            connection_3g_points: 10.0,
            high_end_threshold: 70.0,
            mid_range_threshold: 40.0,
        }
    }
}

/// Per-signal point breakdown behind a classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationScore {
    pub memory: f64,
    pub cores: f64,
    pub benchmark: f64,
    pub connection: f64,
}

impl ClassificationScore {
    pub fn total(&self) -> f64 {
        self.memory + self.cores + self.benchmark + self.connection
    }
}

impl ClassificationWeights {
    /// Score each signal
    pub fn score(
        &self,
        memory_gb: f64,
        cpu_cores: u32,
        performance_score: f64,
        connection_type: ConnectionType,
    ) -> ClassificationScore {
        let benchmark = performance_score.clamp(0.0, 100.0) / 100.0 * self.benchmark_max_points;
        let connection = match connection_type {
            ConnectionType::Wifi | ConnectionType::Cellular5G => self.fast_connection_points,
            ConnectionType::Cellular4G => self.connection_4g_points,
            ConnectionType::Cellular3G => self.connection_3g_points,
            _ => 0.0,
        };

        ClassificationScore {
            memory: step_points(&self.memory, memory_gb),
            cores: step_points(&self.cores, f64::from(cpu_cores)),
            benchmark,
            connection,
        }
    }

    /// Bucket a total score into a device class
    pub fn class_for(&self, total: f64) -> DeviceClass {
        if total >= self.high_end_threshold {
            DeviceClass::HighEnd
        } else if total >= self.mid_range_threshold {
            DeviceClass::MidRange
        } else {
            DeviceClass::LowEnd
        }
    }
}
