// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device capability detection
//!
//! Probes memory, cores, network and battery, runs a short benchmark, and
//! classifies the device into a coarse class that drives strategy
//! selection.

pub mod battery;
pub mod benchmark;
pub mod classify;
pub mod detector;
pub mod network;
pub mod probe;
pub mod snapshot;

pub use battery::*;
pub use benchmark::*;
pub use classify::*;
pub use detector::*;
pub use network::*;
pub use probe::*;
pub use snapshot::*;
