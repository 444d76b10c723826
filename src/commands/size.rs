// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Image sizing command

use serde::Serialize;

use crate::cli::args::{OutputFormat, SizeArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::loader::AdaptiveLoader;
use crate::strategy::{scale_factor, ImageSize};

use super::{initialized_loader, print_json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SizeReport {
    original: ImageSize,
    optimal: ImageSize,
    scale: f64,
}

impl std::fmt::Display for SizeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} (scale {:.3})", self.original, self.optimal, self.scale)
    }
}

pub(crate) fn size_report(loader: &AdaptiveLoader, original: ImageSize) -> SizeReport {
    let scale = match (loader.capabilities(), loader.strategy()) {
        (Some(snapshot), Some(strategy)) => scale_factor(&snapshot, &strategy),
        _ => 1.0,
    };
    SizeReport {
        original,
        optimal: loader.optimal_image_size(original),
        scale,
    }
}

/// Execute the size command
pub async fn execute(args: &SizeArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let loader = initialized_loader(settings, &args.probe).await;
    let report = size_report(&loader, ImageSize::new(args.width, args.height));

    if print_json(format, &report)? {
        return Ok(());
    }
    println!("{}", report);
    Ok(())
}
