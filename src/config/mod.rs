// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for loadwise
//!
//! Handles loading, saving, and validating tuning settings.

pub mod settings;

pub use settings::*;
