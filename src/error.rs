// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for loadwise
//!
//! Detection, selection, adjustment and gating are total and never fail.
//! Errors only arise at the edges: settings IO and CLI input. Event
//! listener failures are logged by the registry and never surface here.

use thiserror::Error;

/// Main error type for loadwise operations
#[derive(Error, Debug)]
pub enum LoadwiseError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for loadwise operations
pub type Result<T> = std::result::Result<T, LoadwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LoadwiseError::Config("bad threshold".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad threshold");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = LoadwiseError::InvalidInput("priority".to_string());
        assert_eq!(err.to_string(), "Invalid input: priority");
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LoadwiseError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: LoadwiseError = json_err.into();
        assert!(matches!(err, LoadwiseError::Json(_)));
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn listener() -> anyhow::Result<()> {
            Err(LoadwiseError::InvalidInput("bad payload".to_string()))?;
            Ok(())
        }

        let err = listener().unwrap_err();
        assert!(err.downcast_ref::<LoadwiseError>().is_some());
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(LoadwiseError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}
