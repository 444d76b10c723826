// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Platform capability probes
//!
//! Every probe returns `Option`: `None` means the platform does not expose
//! that signal (or reading it failed), and the detector substitutes its
//! fallback value.

use std::path::PathBuf;

use async_trait::async_trait;
use sysinfo::System;

use super::battery::{read_power_supply, BatteryStatus, POWER_SUPPLY_ROOT};
use super::network::NetworkInfo;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Source of raw capability signals
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    /// Total device memory in GB
    fn memory_gb(&self) -> Option<f64>;

    /// Logical CPU core count
    fn cpu_cores(&self) -> Option<u32>;

    /// Current network connection information
    fn network(&self) -> Option<NetworkInfo>;

    /// Current battery status
    async fn battery(&self) -> Option<BatteryStatus>;

    /// A precomputed performance score. When `None` the detector runs its
    /// own benchmark.
    async fn performance_score(&self) -> Option<f64> {
        None
    }
}

/// Probe backed by the host system.
///
/// Memory and cores come from `sysinfo`; battery from the Linux
/// power-supply class. A native host has no effective-connection-type API,
/// so network information is only available when configured.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    network: Option<NetworkInfo>,
    power_supply_root: PathBuf,
}

impl SystemProbe {
    pub fn new(network: Option<NetworkInfo>) -> Self {
        Self {
            network,
            power_supply_root: PathBuf::from(POWER_SUPPLY_ROOT),
        }
    }

    /// Read batteries from a different power-supply directory
    pub fn with_power_supply_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.power_supply_root = root.into();
        self
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl CapabilityProbe for SystemProbe {
    fn memory_gb(&self) -> Option<f64> {
        let mut sys = System::new();
        sys.refresh_memory();
        let total = sys.total_memory();
        if total == 0 {
            return None;
        }
        Some(total as f64 / BYTES_PER_GB)
    }

    fn cpu_cores(&self) -> Option<u32> {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        let cores = sys.cpus().len();
        if cores == 0 {
            return None;
        }
        u32::try_from(cores).ok()
    }

    fn network(&self) -> Option<NetworkInfo> {
        self.network
    }

    async fn battery(&self) -> Option<BatteryStatus> {
        if cfg!(target_os = "linux") {
            read_power_supply(&self.power_supply_root).await
        } else {
            None
        }
    }
}

/// Probe returning fixed readings
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    pub memory_gb: Option<f64>,
    pub cpu_cores: Option<u32>,
    pub network: Option<NetworkInfo>,
    pub battery: Option<BatteryStatus>,
    pub performance_score: Option<f64>,
}

#[async_trait]
impl CapabilityProbe for StaticProbe {
    fn memory_gb(&self) -> Option<f64> {
        self.memory_gb
    }

    fn cpu_cores(&self) -> Option<u32> {
        self.cpu_cores
    }

    fn network(&self) -> Option<NetworkInfo> {
        self.network
    }

    async fn battery(&self) -> Option<BatteryStatus> {
        self.battery
    }

    async fn performance_score(&self) -> Option<f64> {
        self.performance_score
    }
}
