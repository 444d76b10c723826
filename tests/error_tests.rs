// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;
use loadwise::error::LoadwiseError;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: LoadwiseError = io_error.into();

    match error {
        LoadwiseError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_config_error_display() {
    let error = LoadwiseError::Config("midRangeThreshold above highEndThreshold".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: midRangeThreshold above highEndThreshold"
    );
}

#[test]
fn test_invalid_input_display() {
    let error = LoadwiseError::InvalidInput("memory usage must be between 0 and 1".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid input: memory usage must be between 0 and 1"
    );
}

#[test]
fn test_error_usable_from_listener() {
    let listener = || -> anyhow::Result<()> {
        Err(LoadwiseError::Config("render failed".to_string()))?;
        Ok(())
    };
    let error = listener().unwrap_err();
    assert_eq!(error.to_string(), "Configuration error: render failed");
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error: LoadwiseError = json_error.into();
    assert!(error.to_string().starts_with("JSON error"));
}
