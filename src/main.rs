// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Locsync - locale catalog sync tool
//!
//! Entry point for the Locsync CLI application.

use std::process::ExitCode;

use clap::Parser;

use locsync::cli::{Cli, Commands};
use locsync::commands;
use locsync::error::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables update diagnostics without
    // requiring users to know target names. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "locsync=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        // Per-path failures were already reported line by line; the batch
        // itself still signals failure to the caller.
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Dispatch the selected subcommand, returning the number of failed paths.
fn run(cli: &Cli) -> Result<usize> {
    match &cli.command {
        Commands::Apply(args) => commands::apply::execute(args, &cli.locales_dir, &cli.format),
        Commands::List(args) => {
            commands::list::execute(args, &cli.format)?;
            Ok(0)
        }
        Commands::Check => commands::check::execute(&cli.locales_dir, &cli.format),
    }
}
