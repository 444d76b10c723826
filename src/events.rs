// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Typed event registries
//!
//! One registry per event, each carrying its own payload type. A listener
//! that fails (returns an error or panics) is logged and skipped; the
//! remaining listeners still receive the event.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::capability::{BatteryStatus, CapabilitySnapshot, NetworkInfo};
use crate::strategy::LoadingStrategy;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&T) -> anyhow::Result<()> + Send + Sync>;

/// Subscribers for a single event type
pub struct Registry<T> {
    name: &'static str,
    next_id: AtomicU64,
    listeners: RwLock<Vec<(SubscriptionId, Listener<T>)>>,
}

impl<T> Registry<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: AtomicU64::new(1),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a listener
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `payload` to every listener registered at the time of the call.
    /// Returns the number of listeners that handled it successfully.
    pub fn emit(&self, payload: &T) -> usize {
        let listeners: Vec<(SubscriptionId, Listener<T>)> = self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        let mut delivered = 0;
        for (id, listener) in listeners {
            match catch_unwind(AssertUnwindSafe(|| listener(payload))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(err)) => {
                    tracing::warn!(event = self.name, subscription = id.0, "listener failed: {err:#}");
                }
                Err(_) => {
                    tracing::warn!(event = self.name, subscription = id.0, "listener panicked");
                }
            }
        }
        delivered
    }
}

/// All events raised by the adaptive loader
pub struct EventBus {
    pub capabilities_detected: Registry<CapabilitySnapshot>,
    pub strategy_determined: Registry<LoadingStrategy>,
    pub strategy_adjusted: Registry<LoadingStrategy>,
    pub network_change: Registry<NetworkInfo>,
    pub battery_change: Registry<BatteryStatus>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            capabilities_detected: Registry::new("capabilitiesDetected"),
            strategy_determined: Registry::new("strategyDetermined"),
            strategy_adjusted: Registry::new("strategyAdjusted"),
            network_change: Registry::new("networkChange"),
            battery_change: Registry::new("batteryChange"),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_subscribe_and_emit() {
        let registry: Registry<u32> = Registry::new("test");
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = seen.clone();
        registry.subscribe(move |value| {
            counter.fetch_add(*value as usize, Ordering::SeqCst);
            Ok(())
        });

        assert_eq!(registry.emit(&5), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_unsubscribe() {
        let registry: Registry<u32> = Registry::new("test");
        let id = registry.subscribe(|_| Ok(()));
        assert_eq!(registry.len(), 1);
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
        assert_eq!(registry.emit(&1), 0);
    }

    #[test]
    fn test_failing_listener_does_not_stop_delivery() {
        let registry: Registry<u32> = Registry::new("test");
        let seen = Arc::new(AtomicUsize::new(0));

        registry.subscribe(|_| Err(anyhow::anyhow!("boom")));
        registry.subscribe(|_| panic!("listener panic"));
        let counter = seen.clone();
        registry.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert_eq!(registry.emit(&1), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        // Registry stays usable after a panicking listener
        assert_eq!(registry.emit(&1), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_can_unsubscribe_during_emit() {
        let registry: Arc<Registry<u32>> = Arc::new(Registry::new("test"));
        let slot: Arc<RwLock<Option<SubscriptionId>>> = Arc::new(RwLock::new(None));

        let inner_registry = Arc::downgrade(&registry);
        let inner_slot = slot.clone();
        let id = registry.subscribe(move |_| {
            if let (Some(registry), Some(id)) = (inner_registry.upgrade(), *inner_slot.read().unwrap()) {
                registry.unsubscribe(id);
            }
            Ok(())
        });
        *slot.write().unwrap() = Some(id);

        assert_eq!(registry.emit(&1), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let registry: Registry<()> = Registry::new("test");
        let a = registry.subscribe(|_| Ok(()));
        let b = registry.subscribe(|_| Ok(()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_event_bus_names() {
        let bus = EventBus::new();
        assert_eq!(bus.capabilities_detected.name(), "capabilitiesDetected");
        assert_eq!(bus.strategy_determined.name(), "strategyDetermined");
        assert_eq!(bus.strategy_adjusted.name(), "strategyAdjusted");
        assert_eq!(bus.network_change.name(), "networkChange");
        assert_eq!(bus.battery_change.name(), "batteryChange");
    }
}
