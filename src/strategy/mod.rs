// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Loading strategies
//!
//! Selection derives a strategy from a capability snapshot, adjustment
//! tightens it from runtime samples, and the gate and sizing helpers answer
//! per-resource questions against the current strategy.

pub mod adjuster;
pub mod gate;
pub mod selector;
pub mod sizing;
pub mod types;

pub use adjuster::*;
pub use gate::*;
pub use selector::*;
pub use sizing::*;
pub use types::*;
