// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Runtime monitor
//!
//! Periodically samples runtime metrics and feeds them to the loader's
//! adjuster until shut down.

use std::time::Duration;

use sysinfo::System;
use tokio::sync::watch;

use crate::config::MonitorConfig;
use crate::loader::AdaptiveLoader;
use crate::strategy::RuntimeMetrics;

/// Source of runtime samples
pub trait MetricsSource: Send {
    fn sample(&mut self) -> RuntimeMetrics;
}

/// Memory and CPU pressure from the host.
///
/// Latency and frame rate have no native counterpart and are reported from
/// configuration.
pub struct SystemMetricsSource {
    system: System,
    assumed_latency_ms: f64,
    assumed_fps: f64,
}

impl SystemMetricsSource {
    pub fn new(config: &MonitorConfig) -> Self {
        let mut system = System::new();
        // Prime CPU counters so the first sample has a baseline
        system.refresh_cpu_usage();
        Self {
            system,
            assumed_latency_ms: config.assumed_latency_ms,
            assumed_fps: config.assumed_fps,
        }
    }
}

impl MetricsSource for SystemMetricsSource {
    fn sample(&mut self) -> RuntimeMetrics {
        self.system.refresh_memory();
        self.system.refresh_cpu_usage();

        let total = self.system.total_memory();
        let memory_usage = if total == 0 {
            0.0
        } else {
            self.system.used_memory() as f64 / total as f64
        };
        let cpu_usage = f64::from(self.system.global_cpu_usage()) / 100.0;

        RuntimeMetrics {
            memory_usage: memory_usage.clamp(0.0, 1.0),
            cpu_usage: cpu_usage.clamp(0.0, 1.0),
            network_latency_ms: self.assumed_latency_ms,
            fps: self.assumed_fps,
        }
    }
}

/// What a monitor run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorReport {
    pub samples: usize,
    pub adjustments: usize,
}

/// Sample `source` every `interval` and apply each sample to `loader`.
///
/// Stops when `shutdown` flips to true or its sender is dropped, or after
/// `max_samples` samples when a bound is given. The first sample is taken
/// immediately.
pub async fn run_monitor<S: MetricsSource>(
    loader: &AdaptiveLoader,
    source: &mut S,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
    max_samples: Option<usize>,
) -> MonitorReport {
    let mut report = MonitorReport::default();
    let mut ticker = tokio::time::interval(interval);

    loop {
        if *shutdown.borrow() || max_samples.is_some_and(|max| report.samples >= max) {
            break;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
                continue;
            }
        }

        let metrics = source.sample();
        report.samples += 1;
        tracing::debug!(
            memory_usage = metrics.memory_usage,
            cpu_usage = metrics.cpu_usage,
            latency_ms = metrics.network_latency_ms,
            fps = metrics.fps,
            "runtime sample"
        );

        let before = loader.strategy();
        let after = loader.adjust_for_runtime(&metrics);
        if after.is_some() && after != before {
            report.adjustments += 1;
        }
    }

    tracing::debug!(samples = report.samples, adjustments = report.adjustments, "monitor stopped");
    report
}
