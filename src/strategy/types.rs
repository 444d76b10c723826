// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Loading strategy records

use serde::{Deserialize, Serialize};

/// Media quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
}

impl Quality {
    /// Image scale factor applied for this quality
    pub fn size_factor(&self) -> f64 {
        match self {
            Quality::Low => 0.6,
            Quality::Medium => 0.8,
            Quality::High => 1.0,
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quality::Low => write!(f, "low"),
            Quality::Medium => write!(f, "medium"),
            Quality::High => write!(f, "high"),
        }
    }
}

/// How much animation the UI should run. Ordered from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationLevel {
    None,
    Reduced,
    Full,
}

impl AnimationLevel {
    /// Lower to `Reduced` unless already at or below it
    pub fn at_most_reduced(self) -> Self {
        self.min(AnimationLevel::Reduced)
    }
}

impl std::fmt::Display for AnimationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationLevel::None => write!(f, "none"),
            AnimationLevel::Reduced => write!(f, "reduced"),
            AnimationLevel::Full => write!(f, "full"),
        }
    }
}

/// Payload chunk size for code and data splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSize {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkSize::Small => write!(f, "small"),
            ChunkSize::Medium => write!(f, "medium"),
            ChunkSize::Large => write!(f, "large"),
        }
    }
}

/// Quality, feature and concurrency settings governing how aggressively
/// resources are fetched and rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingStrategy {
    pub image_quality: Quality,
    pub video_quality: Quality,
    pub animation_level: AnimationLevel,

    pub lazy_loading: bool,
    pub image_optimization: bool,
    pub code_splitting: bool,
    pub preload_critical: bool,
    pub preload_next_page: bool,
    pub prefetch: bool,
    pub aggressive_caching: bool,
    pub cache_images: bool,
    pub cache_api: bool,
    pub advanced_features: bool,
    pub background_sync: bool,
    pub push_notifications: bool,

    pub max_concurrent_requests: u32,
    pub request_timeout_ms: u64,
    pub chunk_size: ChunkSize,
}

impl LoadingStrategy {
    /// The starting point before any capability overrides
    pub fn baseline() -> Self {
        Self {
            image_quality: Quality::Medium,
            video_quality: Quality::Medium,
            animation_level: AnimationLevel::Full,
            lazy_loading: true,
            image_optimization: true,
            code_splitting: true,
            preload_critical: true,
            preload_next_page: false,
            prefetch: true,
            aggressive_caching: false,
            cache_images: true,
            cache_api: true,
            advanced_features: true,
            background_sync: true,
            push_notifications: true,
            max_concurrent_requests: 6,
            request_timeout_ms: 10_000,
            chunk_size: ChunkSize::Medium,
        }
    }
}

impl Default for LoadingStrategy {
    fn default() -> Self {
        Self::baseline()
    }
}
