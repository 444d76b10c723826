// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Strategy selection from a capability snapshot

use crate::capability::{CapabilitySnapshot, DeviceClass};

use super::types::{AnimationLevel, ChunkSize, LoadingStrategy, Quality};

/// Derive a full loading strategy from a snapshot.
///
/// Starts from the baseline and layers overrides in order: device class,
/// then slow connection, data saver, and low battery. Later rules win on
/// conflicting fields.
pub fn select(snapshot: &CapabilitySnapshot) -> LoadingStrategy {
    let mut strategy = LoadingStrategy::baseline();

    match snapshot.device_class() {
        DeviceClass::LowEnd => {
            strategy.image_quality = Quality::Low;
            strategy.video_quality = Quality::Low;
            strategy.animation_level = AnimationLevel::Reduced;
            strategy.preload_next_page = false;
            strategy.prefetch = false;
            strategy.advanced_features = false;
            strategy.max_concurrent_requests = 3;
            strategy.chunk_size = ChunkSize::Small;
        }
        DeviceClass::HighEnd => {
            strategy.image_quality = Quality::High;
            strategy.video_quality = Quality::High;
            strategy.preload_next_page = true;
            strategy.aggressive_caching = true;
            strategy.max_concurrent_requests = 8;
            strategy.chunk_size = ChunkSize::Large;
        }
        DeviceClass::MidRange => {}
    }

    if snapshot.is_slow_connection() {
        strategy.image_quality = Quality::Low;
        strategy.video_quality = Quality::Low;
        strategy.preload_next_page = false;
        strategy.prefetch = false;
        strategy.aggressive_caching = true;
        strategy.max_concurrent_requests = 2;
        strategy.request_timeout_ms = 15_000;
    }

    if snapshot.data_saver() {
        strategy.image_quality = Quality::Low;
        strategy.video_quality = Quality::Low;
        strategy.animation_level = AnimationLevel::Reduced;
        strategy.preload_next_page = false;
        strategy.prefetch = false;
        strategy.background_sync = false;
    }

    if snapshot.is_low_battery() {
        strategy.animation_level = AnimationLevel::Reduced;
        strategy.preload_next_page = false;
        strategy.prefetch = false;
        strategy.background_sync = false;
        strategy.push_notifications = false;
    }

    strategy
}

/// Human-readable reasons the strategy is restricted for this snapshot
pub fn recommendations(snapshot: &CapabilitySnapshot) -> Vec<String> {
    let mut notes = Vec::new();

    match snapshot.device_class() {
        DeviceClass::LowEnd => notes.push(format!(
            "Low-end device ({:.0} points): media quality lowered, prefetching disabled, 3 concurrent requests",
            snapshot.classification().total()
        )),
        DeviceClass::HighEnd => notes.push(
            "High-end device: full quality media and next-page preloading enabled".to_string(),
        ),
        DeviceClass::MidRange => {}
    }

    if snapshot.is_slow_connection() {
        notes.push(format!(
            "Slow connection ({}, {:.1} Mbps, {:.0} ms RTT): low quality media, 2 concurrent requests, 15s timeout",
            snapshot.connection_type(),
            snapshot.downlink_mbps(),
            snapshot.rtt_ms()
        ));
    }

    if snapshot.data_saver() {
        notes.push("Data saver enabled: low quality media, no prefetching or background sync".to_string());
    }

    if snapshot.is_low_battery() {
        let percent = snapshot.battery_level().unwrap_or_default() * 100.0;
        notes.push(format!(
            "Low battery ({:.0}%): reduced animation, background sync and push notifications disabled",
            percent
        ));
    }

    notes
}
