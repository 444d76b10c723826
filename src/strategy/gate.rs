// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-resource admission checks

use serde::Serialize;

use crate::capability::CapabilitySnapshot;

use super::types::{AnimationLevel, LoadingStrategy};

/// Priority at or above which a resource always loads
pub const CRITICAL_PRIORITY: u8 = 90;

const PREFETCH_MIN_PRIORITY: u8 = 50;
const PRELOAD_MIN_PRIORITY: u8 = 70;
const DEFAULT_MIN_PRIORITY: u8 = 30;

/// Kind of resource asking to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
    Animation,
    Prefetch,
    Preload,
    Other,
}

impl ResourceType {
    pub fn parse(value: &str) -> Self {
        match value {
            "image" => ResourceType::Image,
            "video" => ResourceType::Video,
            "animation" => ResourceType::Animation,
            "prefetch" => ResourceType::Prefetch,
            "preload" => ResourceType::Preload,
            _ => ResourceType::Other,
        }
    }
}

impl From<&str> for ResourceType {
    fn from(value: &str) -> Self {
        ResourceType::parse(value)
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Image => write!(f, "image"),
            ResourceType::Video => write!(f, "video"),
            ResourceType::Animation => write!(f, "animation"),
            ResourceType::Prefetch => write!(f, "prefetch"),
            ResourceType::Preload => write!(f, "preload"),
            ResourceType::Other => write!(f, "other"),
        }
    }
}

/// Environmental conditions the gate consults besides the strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    pub slow_connection: bool,
    pub low_battery: bool,
}

impl From<&CapabilitySnapshot> for Conditions {
    fn from(snapshot: &CapabilitySnapshot) -> Self {
        Self {
            slow_connection: snapshot.is_slow_connection(),
            low_battery: snapshot.is_low_battery(),
        }
    }
}

/// Decide whether a resource may load now.
///
/// Without a strategy every resource loads. Otherwise the first matching
/// rule decides: critical priority, then the per-type rules, then a
/// minimum priority for everything else.
pub fn should_load(
    strategy: Option<&LoadingStrategy>,
    conditions: Conditions,
    resource: ResourceType,
    priority: u8,
) -> bool {
    let Some(strategy) = strategy else {
        return true;
    };

    if priority >= CRITICAL_PRIORITY {
        return true;
    }

    match resource {
        ResourceType::Image => strategy.image_optimization,
        ResourceType::Video => !conditions.slow_connection && !conditions.low_battery,
        ResourceType::Animation => strategy.animation_level != AnimationLevel::None,
        ResourceType::Prefetch => strategy.prefetch && priority >= PREFETCH_MIN_PRIORITY,
        ResourceType::Preload => strategy.preload_critical && priority >= PRELOAD_MIN_PRIORITY,
        ResourceType::Other => priority >= DEFAULT_MIN_PRIORITY,
    }
}
