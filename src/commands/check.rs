// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Check command: parse the locale catalogs and report their status

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::merge::leaf_count;
use crate::store::{self, Locale};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogStatus {
    locale: Locale,
    path: PathBuf,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<usize>,
    ok: bool,
}

/// Execute the check command. Returns the number of unreadable catalogs.
pub fn execute(locales_dir: &Path, format: &OutputFormat) -> Result<usize> {
    let mut statuses = Vec::new();
    for locale in Locale::ALL {
        let path = locale.catalog_path(locales_dir);
        let status = if !path.exists() {
            CatalogStatus {
                locale,
                path,
                status: "missing (created on apply)".to_string(),
                keys: None,
                ok: true,
            }
        } else {
            match store::load(&path) {
                Ok(tree) => CatalogStatus {
                    locale,
                    path,
                    status: "ok".to_string(),
                    keys: Some(leaf_count(&tree)),
                    ok: true,
                },
                Err(e) => CatalogStatus {
                    locale,
                    path,
                    status: e.to_string(),
                    keys: None,
                    ok: false,
                },
            }
        };
        statuses.push(status);
    }

    let failed = statuses.iter().filter(|s| !s.ok).count();

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(failed);
    }

    for status in &statuses {
        match status.keys {
            Some(keys) => println!("{}: {} ({} keys)", status.path.display(), status.status, keys),
            None => println!("{}: {}", status.path.display(), status.status),
        }
    }
    Ok(failed)
}
