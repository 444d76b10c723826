// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Network connection classification

use serde::{Deserialize, Serialize};

/// Downlink below this many Mbps counts as a slow connection
pub const SLOW_DOWNLINK_MBPS: f64 = 1.5;

/// Round-trip time above this many milliseconds counts as a slow connection
pub const SLOW_RTT_MS: f64 = 300.0;

/// Closed set of connection types reported by network information probes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String")]
pub enum ConnectionType {
    #[serde(rename = "slow-2g")]
    Slow2G,
    #[serde(rename = "2g")]
    Cellular2G,
    #[serde(rename = "3g")]
    Cellular3G,
    #[serde(rename = "4g")]
    Cellular4G,
    #[serde(rename = "5g")]
    Cellular5G,
    #[serde(rename = "wifi")]
    Wifi,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl ConnectionType {
    /// Map an effective-type string onto the closed enum.
    /// Anything unrecognized becomes `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => ConnectionType::Slow2G,
            "2g" => ConnectionType::Cellular2G,
            "3g" => ConnectionType::Cellular3G,
            "4g" => ConnectionType::Cellular4G,
            "5g" => ConnectionType::Cellular5G,
            "wifi" => ConnectionType::Wifi,
            _ => ConnectionType::Unknown,
        }
    }

    /// Whether the type alone marks the connection as slow
    pub fn is_slow_type(&self) -> bool {
        matches!(self, ConnectionType::Slow2G | ConnectionType::Cellular2G)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Slow2G => "slow-2g",
            ConnectionType::Cellular2G => "2g",
            ConnectionType::Cellular3G => "3g",
            ConnectionType::Cellular4G => "4g",
            ConnectionType::Cellular5G => "5g",
            ConnectionType::Wifi => "wifi",
            ConnectionType::Unknown => "unknown",
        }
    }
}

impl From<String> for ConnectionType {
    fn from(value: String) -> Self {
        ConnectionType::parse(&value)
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network information as reported by the platform.
///
/// The default value is what detection reports when no network
/// information API exists: unknown type, zeroed link metrics, data saver off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInfo {
    pub connection_type: ConnectionType,
    pub downlink_mbps: f64,
    pub rtt_ms: f64,
    pub data_saver: bool,
}

impl NetworkInfo {
    /// Slow when the type is slow-2g/2g, the downlink is under 1.5 Mbps,
    /// or the round-trip time exceeds 300 ms.
    pub fn is_slow(&self) -> bool {
        self.connection_type.is_slow_type()
            || self.downlink_mbps < SLOW_DOWNLINK_MBPS
            || self.rtt_ms > SLOW_RTT_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(ConnectionType::parse("slow-2g"), ConnectionType::Slow2G);
        assert_eq!(ConnectionType::parse("2g"), ConnectionType::Cellular2G);
        assert_eq!(ConnectionType::parse("3g"), ConnectionType::Cellular3G);
        assert_eq!(ConnectionType::parse("4G"), ConnectionType::Cellular4G);
        assert_eq!(ConnectionType::parse("5g"), ConnectionType::Cellular5G);
        assert_eq!(ConnectionType::parse(" wifi "), ConnectionType::Wifi);
    }

    #[test]
    fn test_parse_unrecognized_is_unknown() {
        assert_eq!(ConnectionType::parse("ethernet"), ConnectionType::Unknown);
        assert_eq!(ConnectionType::parse(""), ConnectionType::Unknown);
    }

    #[test]
    fn test_display_matches_parse() {
        for ty in [
            ConnectionType::Slow2G,
            ConnectionType::Cellular2G,
            ConnectionType::Cellular3G,
            ConnectionType::Cellular4G,
            ConnectionType::Cellular5G,
            ConnectionType::Wifi,
            ConnectionType::Unknown,
        ] {
            assert_eq!(ConnectionType::parse(&ty.to_string()), ty);
        }
    }

    #[test]
    fn test_slow_connection_examples() {
        let slow = NetworkInfo {
            connection_type: ConnectionType::Cellular2G,
            downlink_mbps: 0.5,
            rtt_ms: 400.0,
            data_saver: false,
        };
        assert!(slow.is_slow());

        let fast = NetworkInfo {
            connection_type: ConnectionType::Cellular4G,
            downlink_mbps: 10.0,
            rtt_ms: 50.0,
            data_saver: false,
        };
        assert!(!fast.is_slow());
    }

    #[test]
    fn test_slow_by_single_signal() {
        let base = NetworkInfo {
            connection_type: ConnectionType::Wifi,
            downlink_mbps: 50.0,
            rtt_ms: 20.0,
            data_saver: false,
        };
        assert!(!base.is_slow());
        assert!(NetworkInfo {
            downlink_mbps: 1.0,
            ..base
        }
        .is_slow());
        assert!(NetworkInfo {
            rtt_ms: 301.0,
            ..base
        }
        .is_slow());
        assert!(NetworkInfo {
            connection_type: ConnectionType::Slow2G,
            ..base
        }
        .is_slow());
    }

    #[test]
    fn test_absent_network_reads_as_slow() {
        // Zeroed downlink falls under the slow threshold.
        assert!(NetworkInfo::default().is_slow());
    }

    #[test]
    fn test_deserialize_unknown_type() {
        let info: NetworkInfo =
            serde_json::from_str(r#"{"connectionType":"ethernet","downlinkMbps":100.0}"#).unwrap();
        assert_eq!(info.connection_type, ConnectionType::Unknown);
        assert_eq!(info.rtt_ms, 0.0);
        assert!(!info.data_saver);
    }
}
