// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Runtime adjustment command

use serde::Serialize;

use crate::cli::args::{AdjustArgs, OutputFormat};
use crate::config::Settings;
use crate::error::{LoadwiseError, Result};
use crate::strategy::{LoadingStrategy, RuntimeMetrics};

use super::strategy::render_strategy;
use super::{initialized_loader, print_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdjustReport {
    metrics: RuntimeMetrics,
    changed: bool,
    selected: LoadingStrategy,
    adjusted: LoadingStrategy,
}

fn metrics_from(args: &AdjustArgs) -> Result<RuntimeMetrics> {
    for (name, value) in [("memory usage", args.memory_usage), ("cpu usage", args.cpu_usage)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(LoadwiseError::InvalidInput(format!(
                "{} must be between 0 and 1, got {}",
                name, value
            )));
        }
    }
    if args.latency < 0.0 || args.fps < 0.0 {
        return Err(LoadwiseError::InvalidInput(
            "latency and fps must not be negative".to_string(),
        ));
    }

    Ok(RuntimeMetrics {
        memory_usage: args.memory_usage,
        cpu_usage: args.cpu_usage,
        network_latency_ms: args.latency,
        fps: args.fps,
    })
}

/// Execute the adjust command
pub async fn execute(args: &AdjustArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let metrics = metrics_from(args)?;
    let loader = initialized_loader(settings, &args.probe).await;
    let Some(selected) = loader.strategy() else {
        return Ok(());
    };
    let adjusted = loader
        .adjust_for_runtime(&metrics)
        .unwrap_or_else(|| selected.clone());

    let report = AdjustReport {
        metrics,
        changed: adjusted != selected,
        selected,
        adjusted,
    };
    if print_json(format, &report)? {
        return Ok(());
    }

    if !report.changed {
        println!("\nNo adjustment needed for these metrics.\n");
        print!("{}", render_strategy(&report.adjusted));
        return Ok(());
    }

    println!("\n=== Adjusted Strategy ===\n");
    print!("{}", render_strategy(&report.adjusted));
    Ok(())
}
