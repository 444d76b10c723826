// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability detection

use std::sync::Arc;

use super::benchmark::{run_benchmark, BenchmarkConfig};
use super::classify::ClassificationWeights;
use super::probe::CapabilityProbe;
use super::snapshot::{CapabilityReadings, CapabilitySnapshot};

/// Memory assumed when the platform reports none
pub const DEFAULT_MEMORY_GB: f64 = 4.0;

/// Core count assumed when the platform reports none
pub const DEFAULT_CPU_CORES: u32 = 4;

/// Reads probes, applies fallbacks, benchmarks, and classifies
#[derive(Clone)]
pub struct CapabilityDetector {
    probe: Arc<dyn CapabilityProbe>,
    benchmark: BenchmarkConfig,
    weights: ClassificationWeights,
}

impl CapabilityDetector {
    pub fn new(
        probe: Arc<dyn CapabilityProbe>,
        benchmark: BenchmarkConfig,
        weights: ClassificationWeights,
    ) -> Self {
        Self {
            probe,
            benchmark,
            weights,
        }
    }

    pub fn weights(&self) -> &ClassificationWeights {
        &self.weights
    }

    /// Gather readings from the probe. Never fails: every absent signal
    /// takes its fallback value.
    pub async fn read(&self) -> CapabilityReadings {
        let memory_gb = self
            .probe
            .memory_gb()
            .filter(|gb| gb.is_finite() && *gb > 0.0)
            .unwrap_or(DEFAULT_MEMORY_GB);
        let cpu_cores = self
            .probe
            .cpu_cores()
            .filter(|cores| *cores > 0)
            .unwrap_or(DEFAULT_CPU_CORES);
        let network = self.probe.network().unwrap_or_default();
        let battery = self.probe.battery().await.unwrap_or_default();

        let performance_score = match self.probe.performance_score().await {
            Some(score) if score.is_finite() => score.clamp(0.0, 100.0),
            _ => run_benchmark(&self.benchmark).await,
        };

        CapabilityReadings {
            memory_gb,
            cpu_cores,
            network,
            battery,
            performance_score,
        }
    }

    /// Produce a classified capability snapshot
    pub async fn detect(&self) -> CapabilitySnapshot {
        let readings = self.read().await;
        let snapshot = CapabilitySnapshot::from_readings(readings, &self.weights);
        tracing::debug!(
            device_class = %snapshot.device_class(),
            total_points = snapshot.classification().total(),
            memory_gb = snapshot.memory_gb(),
            cpu_cores = snapshot.cpu_cores(),
            connection = %snapshot.connection_type(),
            performance_score = snapshot.performance_score(),
            "capabilities detected"
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{BatteryStatus, ConnectionType, DeviceClass, NetworkInfo, StaticProbe};

    fn detector(probe: StaticProbe) -> CapabilityDetector {
        CapabilityDetector::new(
            Arc::new(probe),
            BenchmarkConfig {
                duration_ms: 5,
                ..BenchmarkConfig::default()
            },
            ClassificationWeights::default(),
        )
    }

    #[tokio::test]
    async fn test_fallbacks_when_probes_absent() {
        let readings = detector(StaticProbe {
            performance_score: Some(50.0),
            ..StaticProbe::default()
        })
        .read()
        .await;

        assert_eq!(readings.memory_gb, DEFAULT_MEMORY_GB);
        assert_eq!(readings.cpu_cores, DEFAULT_CPU_CORES);
        assert_eq!(readings.network, NetworkInfo::default());
        assert_eq!(readings.network.connection_type, ConnectionType::Unknown);
        assert!(!readings.network.data_saver);
        assert_eq!(readings.battery.level, None);
        assert_eq!(readings.battery.charging, None);
    }

    #[tokio::test]
    async fn test_zero_memory_and_cores_fall_back() {
        let readings = detector(StaticProbe {
            memory_gb: Some(0.0),
            cpu_cores: Some(0),
            performance_score: Some(50.0),
            ..StaticProbe::default()
        })
        .read()
        .await;
        assert_eq!(readings.memory_gb, DEFAULT_MEMORY_GB);
        assert_eq!(readings.cpu_cores, DEFAULT_CPU_CORES);
    }

    #[tokio::test]
    async fn test_benchmark_runs_without_fixed_score() {
        let readings = detector(StaticProbe::default()).read().await;
        assert!((0.0..=100.0).contains(&readings.performance_score));
    }

    #[tokio::test]
    async fn test_fixed_score_is_clamped() {
        let readings = detector(StaticProbe {
            performance_score: Some(180.0),
            ..StaticProbe::default()
        })
        .read()
        .await;
        assert_eq!(readings.performance_score, 100.0);
    }

    #[tokio::test]
    async fn test_detect_high_end() {
        let snapshot = detector(StaticProbe {
            memory_gb: Some(8.0),
            cpu_cores: Some(8),
            network: Some(NetworkInfo {
                connection_type: ConnectionType::Wifi,
                downlink_mbps: 100.0,
                rtt_ms: 10.0,
                data_saver: false,
            }),
            battery: Some(BatteryStatus::new(0.8, true)),
            performance_score: Some(90.0),
        })
        .detect()
        .await;

        assert_eq!(snapshot.device_class(), DeviceClass::HighEnd);
        assert!(!snapshot.is_low_end_device());
        assert_eq!(snapshot.battery_level(), Some(0.8));
    }
}
