// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::battery::BatteryStatus;
use super::classify::{ClassificationScore, ClassificationWeights, DeviceClass};
use super::network::{ConnectionType, NetworkInfo};

/// Raw capability readings, after fallbacks have been applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityReadings {
    pub memory_gb: f64,
    pub cpu_cores: u32,
    pub network: NetworkInfo,
    pub battery: BatteryStatus,
    /// Benchmark score in 0..=100
    pub performance_score: f64,
}

/// Point-in-time record of detected device, network and battery characteristics.
///
/// The device class is derived from the readings when the snapshot is built
/// and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySnapshot {
    #[serde(flatten)]
    readings: CapabilityReadings,
    device_class: DeviceClass,
    is_low_end_device: bool,
    classification: ClassificationScore,
    detected_at: DateTime<Utc>,
}

impl CapabilitySnapshot {
    /// Build a snapshot, classifying the device with the given weights
    pub fn from_readings(readings: CapabilityReadings, weights: &ClassificationWeights) -> Self {
        let classification = weights.score(
            readings.memory_gb,
            readings.cpu_cores,
            readings.performance_score,
            readings.network.connection_type,
        );
        let device_class = weights.class_for(classification.total());

        Self {
            readings,
            device_class,
            is_low_end_device: device_class == DeviceClass::LowEnd,
            classification,
            detected_at: Utc::now(),
        }
    }

    /// Build a snapshot with the default classification weights
    pub fn classify(readings: CapabilityReadings) -> Self {
        Self::from_readings(readings, &ClassificationWeights::default())
    }

    /// A new snapshot with replaced network information, re-classified
    pub fn with_network(&self, network: NetworkInfo, weights: &ClassificationWeights) -> Self {
        Self::from_readings(
            CapabilityReadings {
                network,
                ..self.readings
            },
            weights,
        )
    }

    /// A new snapshot with replaced battery information, re-classified
    pub fn with_battery(&self, battery: BatteryStatus, weights: &ClassificationWeights) -> Self {
        Self::from_readings(
            CapabilityReadings {
                battery,
                ..self.readings
            },
            weights,
        )
    }

    pub fn readings(&self) -> &CapabilityReadings {
        &self.readings
    }

    pub fn memory_gb(&self) -> f64 {
        self.readings.memory_gb
    }

    pub fn cpu_cores(&self) -> u32 {
        self.readings.cpu_cores
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    pub fn is_low_end_device(&self) -> bool {
        self.is_low_end_device
    }

    pub fn classification(&self) -> &ClassificationScore {
        &self.classification
    }

    pub fn network(&self) -> &NetworkInfo {
        &self.readings.network
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.readings.network.connection_type
    }

    pub fn downlink_mbps(&self) -> f64 {
        self.readings.network.downlink_mbps
    }

    pub fn rtt_ms(&self) -> f64 {
        self.readings.network.rtt_ms
    }

    pub fn data_saver(&self) -> bool {
        self.readings.network.data_saver
    }

    pub fn battery(&self) -> &BatteryStatus {
        &self.readings.battery
    }

    pub fn battery_level(&self) -> Option<f64> {
        self.readings.battery.level
    }

    pub fn battery_charging(&self) -> Option<bool> {
        self.readings.battery.charging
    }

    pub fn performance_score(&self) -> f64 {
        self.readings.performance_score
    }

    pub fn detected_at(&self) -> DateTime<Utc> {
        self.detected_at
    }

    pub fn is_slow_connection(&self) -> bool {
        self.readings.network.is_slow()
    }

    pub fn is_low_battery(&self) -> bool {
        self.readings.battery.is_low()
    }
}
