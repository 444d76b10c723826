// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Image size selection

use serde::{Deserialize, Serialize};

use crate::capability::CapabilitySnapshot;

use super::types::LoadingStrategy;

/// Scale factor applied on slow connections
const SLOW_CONNECTION_FACTOR: f64 = 0.7;

/// Pixel dimensions of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Composite scale factor: device class, image quality, and connection speed
pub fn scale_factor(snapshot: &CapabilitySnapshot, strategy: &LoadingStrategy) -> f64 {
    let connection = if snapshot.is_slow_connection() {
        SLOW_CONNECTION_FACTOR
    } else {
        1.0
    };
    snapshot.device_class().size_factor() * strategy.image_quality.size_factor() * connection
}

fn scale(dimension: u32, factor: f64) -> u32 {
    let scaled = (f64::from(dimension) * factor).round();
    // Never upscale
    (scaled.max(0.0) as u32).min(dimension)
}

/// Size an image should be fetched at, never larger than the original
pub fn optimal_size(
    original: ImageSize,
    snapshot: &CapabilitySnapshot,
    strategy: &LoadingStrategy,
) -> ImageSize {
    let factor = scale_factor(snapshot, strategy);
    ImageSize {
        width: scale(original.width, factor),
        height: scale(original.height, factor),
    }
}
