// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Default bundled payloads
//!
//! These payloads are embedded in the binary and always available. The
//! JSON assets live under `assets/payloads/`, one file per payload and
//! locale.

use serde_json::Value;

use crate::error::{LocsyncError, Result};
use crate::store::Locale;

/// A named update payload with one tree fragment per locale
#[derive(Debug)]
pub struct BundledPayload {
    /// Stable name used on the command line
    pub name: &'static str,
    /// Short human-readable description
    pub description: &'static str,
    en: &'static str,
    zh: &'static str,
}

impl BundledPayload {
    /// Decode this payload's tree for a locale.
    pub fn tree(&self, locale: Locale) -> Result<Value> {
        let raw = match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        };
        serde_json::from_str(raw).map_err(|e| {
            LocsyncError::Payload(format!("bundled payload '{}' ({}): {}", self.name, locale, e))
        })
    }
}

const BUNDLED: [BundledPayload; 4] = [
    BundledPayload {
        name: "scan-guidance",
        description: "ScriptTag cleanup guidance for the scan modals",
        en: include_str!("../../assets/payloads/scan-guidance.en.json"),
        zh: include_str!("../../assets/payloads/scan-guidance.zh.json"),
    },
    BundledPayload {
        name: "scan-details",
        description: "Scan results and details panel copy",
        en: include_str!("../../assets/payloads/scan-details.en.json"),
        zh: include_str!("../../assets/payloads/scan-details.zh.json"),
    },
    BundledPayload {
        name: "script-analysis",
        description: "Script content analysis tab copy",
        en: include_str!("../../assets/payloads/script-analysis.en.json"),
        zh: include_str!("../../assets/payloads/script-analysis.zh.json"),
    },
    BundledPayload {
        name: "full-refresh",
        description: "Full UI copy refresh (dashboard, privacy, webhooks, FAQ)",
        en: include_str!("../../assets/payloads/full-refresh.en.json"),
        zh: include_str!("../../assets/payloads/full-refresh.zh.json"),
    },
];

/// Get a bundled payload by name
pub fn get_bundled(name: &str) -> Option<&'static BundledPayload> {
    BUNDLED.iter().find(|p| p.name == name)
}

/// All bundled payloads, in application order
pub fn list_bundled() -> &'static [BundledPayload] {
    &BUNDLED
}
