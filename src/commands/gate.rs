// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Resource admission command

use serde::Serialize;

use crate::cli::args::{GateArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::loader::AdaptiveLoader;
use crate::strategy::ResourceType;

use super::{initialized_loader, print_json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GateDecision {
    resource: ResourceType,
    priority: u8,
    load: bool,
}

impl std::fmt::Display for GateDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (priority {})",
            if self.load { "load" } else { "defer" },
            self.resource,
            self.priority
        )
    }
}

pub(crate) fn decide(loader: &AdaptiveLoader, resource: &str, priority: u8) -> GateDecision {
    let resource = ResourceType::parse(resource);
    GateDecision {
        resource,
        priority,
        load: loader.should_load(resource, priority),
    }
}

/// Execute the gate command
pub async fn execute(args: &GateArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let loader = initialized_loader(settings, &args.probe).await;
    let decision = decide(&loader, &args.resource, args.priority);

    if print_json(format, &decision)? {
        return Ok(());
    }
    println!("{}", decision);
    Ok(())
}
