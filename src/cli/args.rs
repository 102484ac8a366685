// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Locsync.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::store::Locale;

/// Locsync - sync bundled translation updates into locale JSON catalogs
#[derive(Parser, Debug)]
#[command(name = "locsync")]
#[command(version, about = "Sync bundled translation updates into locale JSON catalogs")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the locale catalog files (en.json, zh.json)
    #[arg(long, global = true, default_value = "app/locales")]
    pub locales_dir: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge bundled payloads into the locale catalogs
    Apply(ApplyArgs),

    /// List the bundled payloads
    List(ListArgs),

    /// Parse the locale catalogs and report their status
    Check,
}

/// Arguments for the apply subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ApplyArgs {
    /// Payload names to apply (default: all bundled payloads)
    pub payload: Vec<String>,

    /// Restrict the update to one locale
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the list subcommand
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show per-locale key counts
    #[arg(short = 'd', long)]
    pub detailed: bool,
}

/// Output format for reports
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
