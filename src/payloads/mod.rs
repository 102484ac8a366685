// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Bundled update payloads
//!
//! Each payload is a named pair of locale tree fragments (English and
//! Chinese) embedded in the binary, ready to be deep-merged into the
//! on-disk catalogs.

mod bundled;

pub use bundled::{get_bundled, list_bundled, BundledPayload};

use crate::error::{LocsyncError, Result};

/// Resolve payload names to bundled payloads, or all of them when no names
/// are given. Unknown names are an error before anything touches disk.
pub fn resolve(names: &[String]) -> Result<Vec<&'static BundledPayload>> {
    if names.is_empty() {
        return Ok(list_bundled().iter().collect());
    }

    names
        .iter()
        .map(|name| {
            get_bundled(name).ok_or_else(|| {
                LocsyncError::Payload(format!(
                    "unknown payload '{}' (available: {})",
                    name,
                    list_bundled()
                        .iter()
                        .map(|p| p.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
        })
        .collect()
}
