// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Short fixed-duration CPU benchmark

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Benchmark tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenchmarkConfig {
    /// Wall-clock budget for the run
    pub duration_ms: u64,
    /// Iteration count that maps to a perfect score of 100
    pub reference_iterations: f64,
    /// Arithmetic operations per iteration
    pub batch_size: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            duration_ms: 100,
            reference_iterations: 100.0,
            batch_size: 100_000,
        }
    }
}

/// Convert an iteration count into a 0..=100 score
pub fn score_from_iterations(iterations: u64, reference: f64) -> f64 {
    if reference <= 0.0 {
        return 100.0;
    }
    (iterations as f64 / reference * 100.0).min(100.0)
}

/// One fixed arithmetic workload
fn workload(batch_size: u32) -> f64 {
    let mut acc = 0.0_f64;
    for i in 0..batch_size {
        let x = f64::from(i);
        acc += (x * 0.5).sqrt() * (x * 0.001).sin();
    }
    acc
}

/// Count workload iterations that complete within the configured duration.
///
/// Yields to the runtime between iterations so other tasks keep running.
pub async fn run_benchmark(config: &BenchmarkConfig) -> f64 {
    let budget = Duration::from_millis(config.duration_ms);
    let start = Instant::now();
    let mut iterations: u64 = 0;

    while start.elapsed() < budget {
        black_box(workload(black_box(config.batch_size)));
        iterations += 1;
        tokio::task::yield_now().await;
    }

    let score = score_from_iterations(iterations, config.reference_iterations);
    tracing::debug!(
        iterations,
        elapsed_ms = start.elapsed().as_millis() as u64,
        score,
        "benchmark finished"
    );
    score
}
