// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Strategy selection command

use std::fmt::Write as _;

use serde::Serialize;

use crate::capability::DeviceClass;
use crate::cli::args::{OutputFormat, StrategyArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::loader::AdaptiveLoader;
use crate::strategy::LoadingStrategy;

use super::{initialized_loader, print_json, yes_no};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StrategyReport {
    device_class: DeviceClass,
    strategy: LoadingStrategy,
    recommendations: Vec<String>,
}

/// Current strategy with its reasons. `None` before initialization.
pub(crate) fn strategy_report(loader: &AdaptiveLoader) -> Option<StrategyReport> {
    let snapshot = loader.capabilities()?;
    let strategy = loader.strategy()?;
    Some(StrategyReport {
        device_class: snapshot.device_class(),
        strategy,
        recommendations: loader.recommendations(),
    })
}

pub(crate) fn render_report(report: &StrategyReport) -> String {
    let mut out = format!("\n=== Loading Strategy ({}) ===\n\n", report.device_class);
    out.push_str(&render_strategy(&report.strategy));

    if !report.recommendations.is_empty() {
        out.push_str("\n=== Why ===\n");
        for note in &report.recommendations {
            let _ = writeln!(out, "  • {}", note);
        }
    }
    out
}

/// Execute the strategy command
pub async fn execute(args: &StrategyArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let loader = initialized_loader(settings, &args.probe).await;
    let Some(report) = strategy_report(&loader) else {
        return Ok(());
    };

    if print_json(format, &report)? {
        return Ok(());
    }
    print!("{}", render_report(&report));
    Ok(())
}

pub(crate) fn render_strategy(strategy: &LoadingStrategy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Image quality: {}", strategy.image_quality);
    let _ = writeln!(out, "Video quality: {}", strategy.video_quality);
    let _ = writeln!(out, "Animation: {}", strategy.animation_level);
    let _ = writeln!(
        out,
        "Concurrency: {} requests, {} ms timeout, {} chunks",
        strategy.max_concurrent_requests, strategy.request_timeout_ms, strategy.chunk_size
    );

    let sections: [(&str, &[(&str, bool)]); 3] = [
        (
            "Loading",
            &[
                ("Lazy loading", strategy.lazy_loading),
                ("Image optimization", strategy.image_optimization),
                ("Code splitting", strategy.code_splitting),
                ("Preload critical", strategy.preload_critical),
                ("Preload next page", strategy.preload_next_page),
                ("Prefetch", strategy.prefetch),
            ],
        ),
        (
            "Caching",
            &[
                ("Aggressive", strategy.aggressive_caching),
                ("Images", strategy.cache_images),
                ("API", strategy.cache_api),
            ],
        ),
        (
            "Features",
            &[
                ("Advanced", strategy.advanced_features),
                ("Background sync", strategy.background_sync),
                ("Push notifications", strategy.push_notifications),
            ],
        ),
    ];
    for (title, flags) in sections {
        let _ = writeln!(out, "\n{}:", title);
        for (label, value) in flags {
            let _ = writeln!(out, "  {}: {}", label, yes_no(*value));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ProbeArgs;
    use crate::strategy::Quality;

    fn low_end_args() -> ProbeArgs {
        ProbeArgs {
            memory: Some(1.0),
            cores: Some(2),
            connection: Some("2g".to_string()),
            downlink: Some(0.5),
            rtt: Some(400.0),
            score: Some(10.0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_report_for_low_end_device() {
        let loader = initialized_loader(&Settings::default(), &low_end_args()).await;
        let report = strategy_report(&loader).unwrap();

        assert_eq!(report.device_class, DeviceClass::LowEnd);
        assert_eq!(report.strategy.image_quality, Quality::Low);
        assert_eq!(report.strategy.max_concurrent_requests, 2);
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn test_report_before_initialize() {
        let loader = AdaptiveLoader::new(
            Settings::default(),
            std::sync::Arc::new(crate::capability::StaticProbe::default()),
        );
        assert!(strategy_report(&loader).is_none());
    }

    #[tokio::test]
    async fn test_render_report_lists_reasons() {
        let loader = initialized_loader(&Settings::default(), &low_end_args()).await;
        let text = render_report(&strategy_report(&loader).unwrap());

        assert!(text.contains("=== Loading Strategy (low-end) ==="));
        assert!(text.contains("=== Why ==="));
        assert!(text.contains("  • Low-end device"));
        assert!(text.contains("  • Slow connection (2g"));
    }

    #[tokio::test]
    async fn test_report_json_shape() {
        let loader = initialized_loader(&Settings::default(), &low_end_args()).await;
        let json = serde_json::to_value(strategy_report(&loader).unwrap()).unwrap();

        assert_eq!(json["deviceClass"], "low-end");
        assert_eq!(json["strategy"]["maxConcurrentRequests"], 2);
        assert_eq!(json["strategy"]["imageQuality"], "low");
        assert!(json["recommendations"].is_array());
    }

    #[test]
    fn test_render_strategy_baseline() {
        let text = render_strategy(&LoadingStrategy::baseline());
        assert!(text.contains("Image quality: medium"));
        assert!(text.contains("Animation: full"));
        assert!(text.contains("Concurrency: 6 requests, 10000 ms timeout, medium chunks"));
        assert!(text.contains("\nLoading:\n"));
        assert!(text.contains("  Preload next page: no"));
        assert!(text.contains("  Prefetch: yes"));
        assert!(text.contains("  Aggressive: no"));
        assert!(text.contains("  Push notifications: yes"));
    }
}
