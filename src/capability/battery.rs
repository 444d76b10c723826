// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Battery status and the Linux power-supply reader.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Battery level below which (while discharging) the battery counts as low
pub const LOW_BATTERY_LEVEL: f64 = 0.2;

/// Default sysfs location of power supplies on Linux
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Battery reading. Both fields are `None` when the platform exposes no
/// battery information; an absent level never counts as low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BatteryStatus {
    /// Charge level in 0..=1
    pub level: Option<f64>,
    /// Whether external power is connected
    pub charging: Option<bool>,
}

impl BatteryStatus {
    pub fn new(level: f64, charging: bool) -> Self {
        Self {
            level: Some(level.clamp(0.0, 1.0)),
            charging: Some(charging),
        }
    }

    /// Whether any battery information is available
    pub fn is_known(&self) -> bool {
        self.level.is_some() || self.charging.is_some()
    }

    /// Low when the level is known, under 20%, and the device is not charging.
    /// An unknown charging state counts as not charging.
    pub fn is_low(&self) -> bool {
        match self.level {
            Some(level) => level < LOW_BATTERY_LEVEL && self.charging != Some(true),
            None => false,
        }
    }
}

/// Read the first battery found under a sysfs power-supply root.
pub async fn read_power_supply(root: &Path) -> Option<BatteryStatus> {
    let mut entries = tokio::fs::read_dir(root).await.ok()?;

    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        let kind = match tokio::fs::read_to_string(path.join("type")).await {
            Ok(kind) => kind,
            Err(_) => continue,
        };
        if kind.trim() != "Battery" {
            continue;
        }

        let level = tokio::fs::read_to_string(path.join("capacity"))
            .await
            .ok()
            .and_then(|raw| parse_capacity(&raw));
        let charging = tokio::fs::read_to_string(path.join("status"))
            .await
            .ok()
            .and_then(|raw| parse_status(&raw));

        let status = BatteryStatus { level, charging };
        if status.is_known() {
            tracing::debug!(battery = %path.display(), ?status, "read battery status");
            return Some(status);
        }
        tracing::warn!(battery = %path.display(), "battery present but unreadable");
    }

    None
}

/// Parse a sysfs `capacity` file (percent) into a 0..=1 level.
fn parse_capacity(raw: &str) -> Option<f64> {
    let percent: f64 = raw.trim().parse().ok()?;
    if !percent.is_finite() {
        return None;
    }
    Some((percent / 100.0).clamp(0.0, 1.0))
}

/// Parse a sysfs `status` file into a charging flag.
/// Any state with external power attached counts as charging.
fn parse_status(raw: &str) -> Option<bool> {
    match raw.trim() {
        "Discharging" => Some(false),
        "Charging" | "Full" | "Not charging" => Some(true),
        _ => None,
    }
}
