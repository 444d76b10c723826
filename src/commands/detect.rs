// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability detection command

use std::fmt::Write as _;

use crate::capability::CapabilitySnapshot;
use crate::cli::args::{DetectArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;

use super::{initialized_loader, print_json, yes_no};

/// Execute the detect command
pub async fn execute(args: &DetectArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let loader = initialized_loader(settings, &args.probe).await;
    let Some(snapshot) = loader.capabilities() else {
        return Ok(());
    };

    if print_json(format, &snapshot)? {
        return Ok(());
    }
    print!("{}", render_snapshot(&snapshot));
    Ok(())
}

pub(crate) fn render_snapshot(snapshot: &CapabilitySnapshot) -> String {
    let score = snapshot.classification();
    let mut out = String::new();

    let _ = writeln!(out, "\n=== Device Capabilities ===\n");
    let _ = writeln!(
        out,
        "Device class: {} ({})",
        snapshot.device_class(),
        snapshot.device_class().description()
    );
    let _ = writeln!(out, "Memory: {:.1} GB", snapshot.memory_gb());
    let _ = writeln!(out, "CPU cores: {}", snapshot.cpu_cores());
    let _ = writeln!(out, "Performance score: {:.0}/100", snapshot.performance_score());

    let _ = writeln!(out, "\n=== Network ===");
    let _ = writeln!(out, "Connection: {}", snapshot.connection_type());
    let _ = writeln!(out, "Downlink: {:.1} Mbps", snapshot.downlink_mbps());
    let _ = writeln!(out, "RTT: {:.0} ms", snapshot.rtt_ms());
    let _ = writeln!(out, "Data saver: {}", yes_no(snapshot.data_saver()));
    let _ = writeln!(out, "Slow connection: {}", yes_no(snapshot.is_slow_connection()));

    let _ = writeln!(out, "\n=== Battery ===");
    match snapshot.battery_level() {
        Some(level) => {
            let _ = writeln!(out, "Level: {:.0}%", level * 100.0);
        }
        None => out.push_str("Level: unknown\n"),
    }
    match snapshot.battery_charging() {
        Some(charging) => {
            let _ = writeln!(out, "Charging: {}", yes_no(charging));
        }
        None => out.push_str("Charging: unknown\n"),
    }
    let _ = writeln!(out, "Low battery: {}", yes_no(snapshot.is_low_battery()));

    let _ = writeln!(out, "\n=== Classification ===");
    let _ = writeln!(out, "Memory: {:.1} points", score.memory);
    let _ = writeln!(out, "Cores: {:.1} points", score.cores);
    let _ = writeln!(out, "Benchmark: {:.1} points", score.benchmark);
    let _ = writeln!(out, "Connection: {:.1} points", score.connection);
    let _ = writeln!(out, "Total: {:.1} points", score.total());
    let _ = writeln!(out, "\nDetected at {}", snapshot.detected_at().to_rfc3339());
    out
}
