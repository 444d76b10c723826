// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{LoadwiseError, Result};

use super::Settings;

fn check(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(LoadwiseError::Config(message()))
    }
}

impl Settings {
    /// Reject settings that would make classification or adjustment meaningless.
    pub fn validate(&self) -> Result<()> {
        let weights = &self.classification;
        check(
            weights.mid_range_threshold <= weights.high_end_threshold,
            || {
                format!(
                    "classification.midRangeThreshold ({}) must not exceed highEndThreshold ({})",
                    weights.mid_range_threshold, weights.high_end_threshold
                )
            },
        )?;
        for (name, steps) in [("memory", &weights.memory), ("cores", &weights.cores)] {
            check(
                steps.windows(2).all(|pair| pair[0].at_least >= pair[1].at_least),
                || format!("classification.{name} steps must be ordered highest first"),
            )?;
        }
        check(weights.benchmark_max_points >= 0.0, || {
            "classification.benchmarkMaxPoints must not be negative".to_string()
        })?;

        check(self.benchmark.duration_ms > 0, || {
            "benchmark.durationMs must be greater than zero".to_string()
        })?;
        check(self.benchmark.reference_iterations > 0.0, || {
            "benchmark.referenceIterations must be greater than zero".to_string()
        })?;
        check(self.benchmark.batch_size > 0, || {
            "benchmark.batchSize must be greater than zero".to_string()
        })?;

        for (name, value) in [
            ("memoryUsage", self.adjuster.memory_usage),
            ("cpuUsage", self.adjuster.cpu_usage),
        ] {
            check((0.0..=1.0).contains(&value), || {
                format!("adjuster.{name} must be between 0 and 1, got {value}")
            })?;
        }
        check(self.adjuster.network_latency_ms >= 0.0, || {
            "adjuster.networkLatencyMs must not be negative".to_string()
        })?;
        check(self.adjuster.min_fps >= 0.0, || {
            "adjuster.minFps must not be negative".to_string()
        })?;

        check(self.monitor.interval_ms > 0, || {
            "monitor.intervalMs must be greater than zero".to_string()
        })?;

        Ok(())
    }
}
