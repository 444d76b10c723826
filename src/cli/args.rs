// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for loadwise.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::capability::{BatteryStatus, ConnectionType, NetworkInfo};

/// loadwise - adaptive loading strategies for the current device
#[derive(Parser, Debug)]
#[command(name = "loadwise")]
#[command(version, about = "Adaptive loading strategies from device, network and battery capabilities")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect device capabilities
    Detect(DetectArgs),

    /// Show the loading strategy for this device
    Strategy(StrategyArgs),

    /// Apply runtime metrics to the selected strategy
    Adjust(AdjustArgs),

    /// Decide whether a resource should load
    Gate(GateArgs),

    /// Compute the optimal size for an image
    Size(SizeArgs),

    /// Sample runtime metrics and adjust the strategy continuously
    Monitor(MonitorArgs),

    /// Show or initialize settings
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Capability overrides. When any is given, detection uses these values
/// instead of probing the host for them.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ProbeArgs {
    /// Device memory in GB
    #[arg(long)]
    pub memory: Option<f64>,

    /// Logical CPU cores
    #[arg(long)]
    pub cores: Option<u32>,

    /// Connection type (slow-2g, 2g, 3g, 4g, 5g, wifi, unknown)
    #[arg(long)]
    pub connection: Option<String>,

    /// Downlink bandwidth in Mbps
    #[arg(long)]
    pub downlink: Option<f64>,

    /// Round-trip time in milliseconds
    #[arg(long)]
    pub rtt: Option<f64>,

    /// Data saver enabled
    #[arg(long)]
    pub save_data: bool,

    /// Battery level between 0 and 1
    #[arg(long)]
    pub battery: Option<f64>,

    /// Battery is charging
    #[arg(long)]
    pub charging: bool,

    /// Fixed performance score (0-100), skipping the benchmark
    #[arg(long)]
    pub score: Option<f64>,
}

impl ProbeArgs {
    /// Whether any override was given
    pub fn is_empty(&self) -> bool {
        self.memory.is_none()
            && self.cores.is_none()
            && !self.has_network()
            && self.battery.is_none()
            && !self.charging
            && self.score.is_none()
    }

    fn has_network(&self) -> bool {
        self.connection.is_some() || self.downlink.is_some() || self.rtt.is_some() || self.save_data
    }

    /// Network overrides layered over `base`, or `base` when none were given
    pub fn network(&self, base: Option<NetworkInfo>) -> Option<NetworkInfo> {
        if !self.has_network() {
            return base;
        }
        let mut network = base.unwrap_or_default();
        if let Some(connection) = &self.connection {
            network.connection_type = ConnectionType::parse(connection);
        }
        if let Some(downlink) = self.downlink {
            network.downlink_mbps = downlink;
        }
        if let Some(rtt) = self.rtt {
            network.rtt_ms = rtt;
        }
        network.data_saver |= self.save_data;
        Some(network)
    }

    /// Battery override, if a level or charging state was given
    pub fn battery_status(&self) -> Option<BatteryStatus> {
        match (self.battery, self.charging) {
            (Some(level), charging) => Some(BatteryStatus::new(level, charging)),
            (None, true) => Some(BatteryStatus {
                level: None,
                charging: Some(true),
            }),
            (None, false) => None,
        }
    }
}

/// Arguments for the detect subcommand
#[derive(clap::Args, Debug)]
pub struct DetectArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Arguments for the strategy subcommand
#[derive(clap::Args, Debug)]
pub struct StrategyArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Arguments for the adjust subcommand
#[derive(clap::Args, Debug)]
pub struct AdjustArgs {
    /// Memory usage ratio (0-1)
    #[arg(long, default_value_t = 0.0)]
    pub memory_usage: f64,

    /// CPU usage ratio (0-1)
    #[arg(long, default_value_t = 0.0)]
    pub cpu_usage: f64,

    /// Network latency in milliseconds
    #[arg(long, default_value_t = 0.0)]
    pub latency: f64,

    /// Frames per second
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Arguments for the gate subcommand
#[derive(clap::Args, Debug)]
pub struct GateArgs {
    /// Resource type (image, video, animation, prefetch, preload, or any other tag)
    pub resource: String,

    /// Priority from 0 to 100
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub priority: u8,

    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Arguments for the size subcommand
#[derive(clap::Args, Debug)]
pub struct SizeArgs {
    /// Original width in pixels
    pub width: u32,

    /// Original height in pixels
    pub height: u32,

    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Arguments for the monitor subcommand
#[derive(clap::Args, Debug)]
pub struct MonitorArgs {
    /// Sampling interval in milliseconds (defaults to settings)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Stop after this many samples
    #[arg(long)]
    pub samples: Option<usize>,

    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    /// Write default settings to the settings file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing settings file when initializing
    #[arg(long, requires = "init")]
    pub force: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
