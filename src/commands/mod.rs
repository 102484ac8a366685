// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Command implementations
//!
//! One module per subcommand. Each `execute` prints its report in the
//! selected output format and returns the number of failed paths so the
//! caller can decide the process exit status.

pub mod apply;
pub mod check;
pub mod list;
