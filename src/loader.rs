// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Adaptive loader context
//!
//! Owns the current capability snapshot and loading strategy. Callers hold
//! an `AdaptiveLoader` (usually behind an `Arc`) and pass it to whatever
//! needs loading decisions; there is no process-wide global.
//!
//! The snapshot is replaced wholesale on detection and on network/battery
//! changes, and the strategy is re-derived from it. Runtime adjustments
//! patch the current strategy and persist until the next re-derivation.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::capability::{
    BatteryStatus, CapabilityDetector, CapabilityProbe, CapabilitySnapshot, NetworkInfo,
    SystemProbe,
};
use crate::config::Settings;
use crate::events::EventBus;
use crate::strategy::{
    self, adjust_with, select, Conditions, ImageSize, LoadingStrategy, ResourceType,
    RuntimeMetrics,
};

#[derive(Debug, Default)]
struct LoaderState {
    snapshot: Option<CapabilitySnapshot>,
    strategy: Option<LoadingStrategy>,
}

/// Detection, strategy derivation, and per-resource decisions in one place
pub struct AdaptiveLoader {
    settings: Settings,
    detector: CapabilityDetector,
    state: RwLock<LoaderState>,
    events: EventBus,
}

impl AdaptiveLoader {
    pub fn new(settings: Settings, probe: Arc<dyn CapabilityProbe>) -> Self {
        let detector = CapabilityDetector::new(
            probe,
            settings.benchmark.clone(),
            settings.classification.clone(),
        );
        Self {
            settings,
            detector,
            state: RwLock::new(LoaderState::default()),
            events: EventBus::new(),
        }
    }

    /// Loader backed by the host system probe
    pub fn with_system_probe(settings: Settings) -> Self {
        let probe = SystemProbe::new(settings.network);
        Self::new(settings, Arc::new(probe))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn read_state(&self) -> RwLockReadGuard<'_, LoaderState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LoaderState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Detect capabilities and derive the initial strategy
    pub async fn initialize(&self) -> LoadingStrategy {
        let snapshot = self.detector.detect().await;
        self.events.capabilities_detected.emit(&snapshot);
        self.install_snapshot(snapshot)
    }

    /// Re-run detection, replacing the snapshot and any runtime overrides
    pub async fn refresh(&self) -> LoadingStrategy {
        self.initialize().await
    }

    /// Replace the snapshot, derive a fresh strategy, and announce it
    fn install_snapshot(&self, snapshot: CapabilitySnapshot) -> LoadingStrategy {
        let strategy = {
            let mut state = self.write_state();
            Self::store(&mut state, snapshot)
        };
        self.events.strategy_determined.emit(&strategy);
        strategy
    }

    /// Derive a new snapshot from the current one and install it, all under
    /// one write lock. `None` when no snapshot exists yet.
    fn rederive<F>(&self, update: F) -> Option<LoadingStrategy>
    where
        F: FnOnce(&CapabilitySnapshot) -> CapabilitySnapshot,
    {
        let strategy = {
            let mut state = self.write_state();
            let snapshot = update(state.snapshot.as_ref()?);
            Self::store(&mut state, snapshot)
        };
        self.events.strategy_determined.emit(&strategy);
        Some(strategy)
    }

    fn store(state: &mut LoaderState, snapshot: CapabilitySnapshot) -> LoadingStrategy {
        let strategy = select(&snapshot);
        tracing::info!(
            device_class = %snapshot.device_class(),
            image_quality = %strategy.image_quality,
            animation = %strategy.animation_level,
            max_concurrent_requests = strategy.max_concurrent_requests,
            "loading strategy determined"
        );
        state.snapshot = Some(snapshot);
        state.strategy = Some(strategy.clone());
        strategy
    }

    /// Apply new network information. Returns the re-derived strategy, or
    /// `None` when no snapshot exists yet.
    pub fn handle_network_change(&self, network: NetworkInfo) -> Option<LoadingStrategy> {
        tracing::debug!(connection = %network.connection_type, downlink = network.downlink_mbps, "network changed");
        self.events.network_change.emit(&network);
        let weights = self.detector.weights();
        self.rederive(|current| current.with_network(network, weights))
    }

    /// Apply new battery information. Returns the re-derived strategy, or
    /// `None` when no snapshot exists yet.
    pub fn handle_battery_change(&self, battery: BatteryStatus) -> Option<LoadingStrategy> {
        tracing::debug!(level = ?battery.level, charging = ?battery.charging, "battery changed");
        self.events.battery_change.emit(&battery);
        let weights = self.detector.weights();
        self.rederive(|current| current.with_battery(battery, weights))
    }

    /// Tighten the current strategy for a runtime sample.
    ///
    /// Returns the resulting strategy, or `None` before initialization.
    /// `strategy_adjusted` fires only when a field actually changed.
    pub fn adjust_for_runtime(&self, metrics: &RuntimeMetrics) -> Option<LoadingStrategy> {
        let (adjusted, changed) = {
            let mut state = self.write_state();
            let current = state.strategy.as_ref()?;
            let adjusted = adjust_with(current, metrics, &self.settings.adjuster);
            let changed = adjusted != *current;
            if changed {
                state.strategy = Some(adjusted.clone());
            }
            (adjusted, changed)
        };

        if changed {
            tracing::info!(
                memory_usage = metrics.memory_usage,
                cpu_usage = metrics.cpu_usage,
                latency_ms = metrics.network_latency_ms,
                fps = metrics.fps,
                max_concurrent_requests = adjusted.max_concurrent_requests,
                "loading strategy adjusted"
            );
            self.events.strategy_adjusted.emit(&adjusted);
        }
        Some(adjusted)
    }

    /// Whether a resource may load now. Always true before initialization.
    pub fn should_load(&self, resource: impl Into<ResourceType>, priority: u8) -> bool {
        let state = self.read_state();
        let conditions = state
            .snapshot
            .as_ref()
            .map(Conditions::from)
            .unwrap_or_default();
        strategy::should_load(state.strategy.as_ref(), conditions, resource.into(), priority)
    }

    /// Size an image should be fetched at. Unchanged before initialization.
    pub fn optimal_image_size(&self, original: ImageSize) -> ImageSize {
        let state = self.read_state();
        match (&state.snapshot, &state.strategy) {
            (Some(snapshot), Some(current)) => strategy::optimal_size(original, snapshot, current),
            _ => original,
        }
    }

    pub fn capabilities(&self) -> Option<CapabilitySnapshot> {
        self.read_state().snapshot.clone()
    }

    pub fn strategy(&self) -> Option<LoadingStrategy> {
        self.read_state().strategy.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.read_state().strategy.is_some()
    }

    pub fn is_slow_connection(&self) -> bool {
        self.read_state()
            .snapshot
            .as_ref()
            .is_some_and(CapabilitySnapshot::is_slow_connection)
    }

    pub fn is_low_battery(&self) -> bool {
        self.read_state()
            .snapshot
            .as_ref()
            .is_some_and(CapabilitySnapshot::is_low_battery)
    }

    /// Reasons the current strategy is restricted
    pub fn recommendations(&self) -> Vec<String> {
        self.read_state()
            .snapshot
            .as_ref()
            .map(strategy::recommendations)
            .unwrap_or_default()
    }
}
