// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings command

use std::path::Path;

use crate::cli::args::{OutputFormat, SettingsArgs};
use crate::config::Settings;
use crate::error::{LoadwiseError, Result};

/// Execute the settings command.
///
/// With `--init`, writes default settings to `path`. Otherwise prints the
/// effective settings as JSON.
pub fn execute(args: &SettingsArgs, settings: &Settings, path: &Path, format: OutputFormat) -> Result<()> {
    if args.init {
        return init(path, args.force);
    }

    if format == OutputFormat::Text {
        println!("# {}", path.display());
    }
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(LoadwiseError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Settings::default().save_to(path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}
