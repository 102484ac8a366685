// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! CLI module for Locsync

pub mod args;

pub use args::{ApplyArgs, Cli, Commands, ListArgs, OutputFormat};
