// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Locsync - keep a Shopify app's locale JSON catalogs in sync with
//! bundled translation updates.
//!
//! This crate exposes the shared logic used by the `locsync` CLI
//! (`src/main.rs`):
//! - `merge`: recursive deep merge over JSON trees, plus merge accounting
//! - `store`: locale catalog files on disk (load, atomic save, formatting)
//! - `payloads`: named update payloads embedded in the binary
//! - `driver`: per-file update flow and the sequential batch runner
//! - `cli`, `commands`: argument parsing and subcommand implementations

pub mod cli;
pub mod commands;
pub mod driver;
pub mod error;
pub mod merge;
pub mod payloads;
pub mod store;

pub use error::{LocsyncError, Result};
