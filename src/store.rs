// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Locale catalog files on disk
//!
//! A catalog is a UTF-8, object-rooted JSON file holding one language's
//! full translation tree. Loading a missing file yields an empty tree so
//! first runs can bootstrap a catalog; saving writes 2-space-indented JSON
//! with non-ASCII text kept literal, through a temp file renamed into
//! place.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{LocsyncError, Result};

/// The two languages the app ships UI copy for
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Simplified Chinese
    Zh,
}

impl Locale {
    /// All locales, in the order updates are applied
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Catalog file name for this locale
    pub fn file_name(&self) -> &'static str {
        match self {
            Locale::En => "en.json",
            Locale::Zh => "zh.json",
        }
    }

    /// Catalog path under the given locales directory
    pub fn catalog_path(&self, locales_dir: &Path) -> PathBuf {
        locales_dir.join(self.file_name())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Zh => write!(f, "zh"),
        }
    }
}

/// Load a catalog tree from disk.
///
/// A missing file is not an error: it yields an empty object, matching the
/// bootstrap behavior of the update driver. Malformed JSON and non-object
/// roots are errors.
pub fn load(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(Map::new()));
    }

    let text = fs::read_to_string(path)?;
    let tree: Value = serde_json::from_str(&text)?;
    if !tree.is_object() {
        return Err(LocsyncError::Store(format!(
            "{}: root is not a JSON object",
            path.display()
        )));
    }
    Ok(tree)
}

/// Save a catalog tree, creating parent directories as needed.
///
/// serde_json leaves non-ASCII characters unescaped, so Chinese copy lands
/// on disk literally. The write goes through a sibling `.tmp` file renamed
/// over the target, so a failed write never truncates an existing catalog.
pub fn save(path: &Path, tree: &Value) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        LocsyncError::Store(format!("{}: path has no file name", path.display()))
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf = serde_json::to_vec_pretty(tree)?;
    buf.push(b'\n');

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
