// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Apply command: merge bundled payloads into the locale catalogs

use std::path::Path;

use crate::cli::args::{ApplyArgs, OutputFormat};
use crate::driver::{self, PathReport};
use crate::error::Result;
use crate::payloads;
use crate::store::Locale;

/// Execute the apply command. Returns the number of failed paths.
pub fn execute(args: &ApplyArgs, locales_dir: &Path, format: &OutputFormat) -> Result<usize> {
    let payloads = payloads::resolve(&args.payload)?;
    let locales: Vec<Locale> = match args.locale {
        Some(locale) => vec![locale],
        None => Locale::ALL.to_vec(),
    };

    let report = driver::run_batch(locales_dir, &payloads, &locales, args.dry_run);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &report.entries {
            println!("{}", describe(entry, args.dry_run));
        }
    }

    Ok(report.failed())
}

fn describe(entry: &PathReport, dry_run: bool) -> String {
    match (&entry.outcome, &entry.error) {
        (Some(outcome), _) => {
            let verb = if dry_run { "Would update" } else { "Updated" };
            format!(
                "{} {} ({}: {} added, {} overwritten, {} unchanged)",
                verb,
                entry.path.display(),
                entry.payload,
                outcome.stats.added,
                outcome.stats.overwritten,
                outcome.stats.unchanged,
            )
        }
        (None, Some(error)) => format!("Error updating {}: {}", entry.path.display(), error),
        // run_batch always sets one of the two.
        (None, None) => format!("Error updating {}: unknown failure", entry.path.display()),
    }
}
