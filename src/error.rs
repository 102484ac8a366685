// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Error types for Locsync
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Locsync operations
#[derive(Error, Debug)]
pub enum LocsyncError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse/serialize errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Problems with a bundled update payload (unknown name, bad data)
    #[error("Payload error: {0}")]
    Payload(String),

    /// Locale catalog file errors (non-object root, unusable path)
    #[error("Locale store error: {0}")]
    Store(String),
}

/// Result type alias for Locsync operations
pub type Result<T> = std::result::Result<T, LocsyncError>;
