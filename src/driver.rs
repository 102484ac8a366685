// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Update driver
//!
//! Applies update payloads to locale catalog files: load (missing file
//! bootstraps an empty tree), deep-merge, save with stable formatting.
//! The batch layer runs payloads across both catalogs in strict sequence
//! and catches each path's error locally, so a malformed or unwritable
//! catalog never blocks the others. The file on disk stays untouched when
//! its update fails.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::merge::{deep_merge, merge_stats, MergeStats};
use crate::payloads::BundledPayload;
use crate::store::{self, Locale};

/// What a single successful update did
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    /// True when the catalog file did not exist before
    pub created: bool,
    /// Leaf key accounting for the merge
    pub stats: MergeStats,
}

/// Apply one payload tree to one catalog file.
pub fn apply_update(path: &Path, payload: &Value) -> Result<UpdateOutcome> {
    let existed = path.exists();
    let mut tree = store::load(path)?;
    let stats = merge_stats(&tree, payload);
    deep_merge(&mut tree, payload);
    store::save(path, &tree)?;
    debug!(
        path = %path.display(),
        added = stats.added,
        overwritten = stats.overwritten,
        "catalog updated"
    );
    Ok(UpdateOutcome {
        created: !existed,
        stats,
    })
}

/// Compute what `apply_update` would do, without writing.
pub fn preview_update(path: &Path, payload: &Value) -> Result<UpdateOutcome> {
    let existed = path.exists();
    let tree = store::load(path)?;
    Ok(UpdateOutcome {
        created: !existed,
        stats: merge_stats(&tree, payload),
    })
}

/// One catalog file's result within a batch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathReport {
    /// Payload that was applied
    pub payload: String,
    /// Target locale
    pub locale: Locale,
    /// Catalog file path
    pub path: PathBuf,
    /// Outcome when the update succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<UpdateOutcome>,
    /// Error description when it did not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PathReport {
    /// Whether this path's update succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Results for a whole batch run
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub entries: Vec<PathReport>,
}

impl BatchReport {
    /// Number of paths whose update failed
    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_ok()).count()
    }
}

/// Apply a set of payloads to the catalogs under `locales_dir`, one
/// payload and locale at a time. Errors are captured per path; the batch
/// always runs to completion.
pub fn run_batch(
    locales_dir: &Path,
    payloads: &[&BundledPayload],
    locales: &[Locale],
    dry_run: bool,
) -> BatchReport {
    let mut report = BatchReport::default();

    for payload in payloads {
        for &locale in locales {
            let path = locale.catalog_path(locales_dir);
            let result = payload.tree(locale).and_then(|tree| {
                if dry_run {
                    preview_update(&path, &tree)
                } else {
                    apply_update(&path, &tree)
                }
            });
            let entry = match result {
                Ok(outcome) => PathReport {
                    payload: payload.name.to_string(),
                    locale,
                    path,
                    outcome: Some(outcome),
                    error: None,
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "catalog update failed");
                    PathReport {
                        payload: payload.name.to_string(),
                        locale,
                        path,
                        outcome: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            report.entries.push(entry);
        }
    }

    report
}
