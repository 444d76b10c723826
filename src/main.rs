// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! loadwise - adaptive loading strategies for the current device
//!
//! Entry point for the loadwise CLI application.

use clap::Parser;

use loadwise::cli::{Cli, Commands};
use loadwise::commands;
use loadwise::config::Settings;
use loadwise::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on crate diagnostics. `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "loadwise=trace"
        } else {
            "loadwise=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_from(&settings_path)?;

    let format = cli.format;
    match &cli.command {
        Commands::Detect(args) => commands::detect::execute(args, &settings, format).await?,
        Commands::Strategy(args) => commands::strategy::execute(args, &settings, format).await?,
        Commands::Adjust(args) => commands::adjust::execute(args, &settings, format).await?,
        Commands::Gate(args) => commands::gate::execute(args, &settings, format).await?,
        Commands::Size(args) => commands::size::execute(args, &settings, format).await?,
        Commands::Monitor(args) => commands::monitor::execute(args, &settings, format).await?,
        Commands::Settings(args) => {
            commands::settings::execute(args, &settings, &settings_path, format)?
        }
    }

    Ok(())
}
