// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use loadwise::capability::ConnectionType;
use loadwise::config::Settings;
use loadwise::error::LoadwiseError;
use tempfile::TempDir;

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.classification.high_end_threshold, 70.0);
    assert_eq!(settings.classification.mid_range_threshold, 40.0);
    assert_eq!(settings.benchmark.duration_ms, 100);
    assert_eq!(settings.adjuster.memory_usage, 0.8);
    assert_eq!(settings.adjuster.cpu_usage, 0.7);
    assert_eq!(settings.adjuster.network_latency_ms, 1000.0);
    assert_eq!(settings.adjuster.min_fps, 30.0);
    assert_eq!(settings.monitor.interval_ms, 5000);
    assert!(settings.network.is_none());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_save_and_load_preserves_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.classification.high_end_threshold = 80.0;
    settings.monitor.assumed_fps = 30.0;
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"network": {"connectionType": "4g", "downlinkMbps": 12.5, "rttMs": 80}}"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    let network = settings.network.unwrap();
    assert_eq!(network.connection_type, ConnectionType::Cellular4G);
    assert_eq!(network.downlink_mbps, 12.5);
    assert!(!network.data_saver);
    assert_eq!(settings.adjuster, Settings::default().adjuster);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(LoadwiseError::Json(_))
    ));
}

#[test]
fn test_out_of_range_threshold_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"adjuster": {"memoryUsage": 1.5}}"#).unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(LoadwiseError::Config(_))
    ));
}

#[test]
fn test_save_refuses_invalid_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.benchmark.duration_ms = 0;
    assert!(settings.save_to(&path).is_err());
    assert!(!path.exists());
}
