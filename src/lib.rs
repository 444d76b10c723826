// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! loadwise - adaptive loading strategies from device capabilities.
//!
//! This crate exposes the shared engine used by the `loadwise` CLI
//! (`src/main.rs`) and by embedding applications.
//!
//! Architecture highlights:
//! - `capability`: probes, benchmark and device classification
//! - `strategy`: strategy selection, runtime adjustment, resource gating and image sizing
//! - `loader`: `AdaptiveLoader`, the context object owning current state
//! - `events`: typed listener registries for loader events
//! - `monitor`: periodic runtime sampling feeding the adjuster

pub mod capability;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod loader;
pub mod monitor;
pub mod strategy;

pub use error::{LoadwiseError, Result};
pub use loader::AdaptiveLoader;
