// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Runtime monitor command

use std::time::Duration;

use tokio::sync::watch;

use crate::cli::args::{MonitorArgs, OutputFormat};
use crate::config::Settings;
use crate::error::{LoadwiseError, Result};
use crate::monitor::{run_monitor, SystemMetricsSource};
use crate::strategy::LoadingStrategy;

use super::initialized_loader;
use super::strategy::render_strategy;

/// Sampling interval from the flag, falling back to settings
fn sampling_interval(args: &MonitorArgs, settings: &Settings) -> Result<Duration> {
    let interval_ms = args.interval_ms.unwrap_or(settings.monitor.interval_ms);
    if interval_ms == 0 {
        return Err(LoadwiseError::InvalidInput(
            "monitor interval must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_millis(interval_ms))
}

fn banner(interval: Duration, samples: Option<usize>) -> String {
    format!(
        "Monitoring every {} ms{}. Press Ctrl+C to stop.",
        interval.as_millis(),
        samples
            .map(|n| format!(" for {} samples", n))
            .unwrap_or_default()
    )
}

/// One adjustment as printed: a JSON line, or a text section
fn render_adjustment(strategy: &LoadingStrategy, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(strategy)?),
        OutputFormat::Text => Ok(format!(
            "\n=== Strategy Adjusted ===\n\n{}",
            render_strategy(strategy)
        )),
    }
}

/// Execute the monitor command. Runs until Ctrl+C or the sample bound.
pub async fn execute(args: &MonitorArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let interval = sampling_interval(args, settings)?;

    let loader = initialized_loader(settings, &args.probe).await;
    loader.events().strategy_adjusted.subscribe(move |strategy| {
        println!("{}", render_adjustment(strategy, format)?);
        Ok(())
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    if format == OutputFormat::Text {
        println!("{}", banner(interval, args.samples));
    }

    let mut source = SystemMetricsSource::new(&settings.monitor);
    let report = run_monitor(&loader, &mut source, interval, shutdown_rx, args.samples).await;

    if format == OutputFormat::Text {
        println!(
            "\nTook {} samples, {} adjustments.",
            report.samples, report.adjustments
        );
    }
    Ok(())
}
