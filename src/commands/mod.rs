// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command prints either human-readable text or pretty JSON depending
//! on the global `--format` flag.

use std::sync::Arc;

use serde::Serialize;

use crate::capability::{CapabilityProbe, StaticProbe, SystemProbe};
use crate::cli::args::{OutputFormat, ProbeArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::loader::AdaptiveLoader;

pub mod adjust;
pub mod detect;
pub mod gate;
pub mod monitor;
pub mod settings;
pub mod size;
pub mod strategy;

/// Probe for the host, with any CLI overrides applied.
///
/// Overrides switch to fixed readings. Memory and cores not overridden are
/// still read from the host; battery is only reported when overridden.
pub fn probe_for(settings: &Settings, args: &ProbeArgs) -> Arc<dyn CapabilityProbe> {
    let system = SystemProbe::new(settings.network);
    if args.is_empty() {
        return Arc::new(system);
    }

    tracing::debug!(?args, "using capability overrides");
    Arc::new(StaticProbe {
        memory_gb: args.memory.or_else(|| system.memory_gb()),
        cpu_cores: args.cores.or_else(|| system.cpu_cores()),
        network: args.network(settings.network),
        battery: args.battery_status(),
        performance_score: args.score,
    })
}

/// Build a loader for the given overrides and run initial detection
pub async fn initialized_loader(settings: &Settings, args: &ProbeArgs) -> AdaptiveLoader {
    let loader = AdaptiveLoader::new(settings.clone(), probe_for(settings, args));
    loader.initialize().await;
    loader
}

/// Print `value` as pretty JSON when requested.
///
/// Returns true if it printed, so callers fall through to text output
/// otherwise.
pub(crate) fn print_json<T: Serialize>(format: OutputFormat, value: &T) -> Result<bool> {
    if format != OutputFormat::Json {
        return Ok(false);
    }
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(true)
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
