// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! List command: show the bundled payloads

use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::merge::leaf_count;
use crate::payloads::list_bundled;
use crate::store::Locale;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PayloadInfo {
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    en_keys: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zh_keys: Option<usize>,
}

/// Execute the list command
pub fn execute(args: &ListArgs, format: &OutputFormat) -> Result<()> {
    let mut infos = Vec::new();
    for payload in list_bundled() {
        let (en_keys, zh_keys) = if args.detailed {
            (
                Some(leaf_count(&payload.tree(Locale::En)?)),
                Some(leaf_count(&payload.tree(Locale::Zh)?)),
            )
        } else {
            (None, None)
        };
        infos.push(PayloadInfo {
            name: payload.name.to_string(),
            description: payload.description.to_string(),
            en_keys,
            zh_keys,
        });
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in &infos {
        match (info.en_keys, info.zh_keys) {
            (Some(en), Some(zh)) => println!(
                "{:<16} {} (en: {} keys, zh: {} keys)",
                info.name, info.description, en, zh
            ),
            _ => println!("{:<16} {}", info.name, info.description),
        }
    }
    Ok(())
}
