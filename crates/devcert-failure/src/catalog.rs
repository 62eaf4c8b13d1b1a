//! Localization and asset keys used to present failures.
//!
//! The catalog only names keys; strings and images live in the app's
//! resource bundle. Shipped defaults match the bundled resources, and a
//! `presentation.json` next to the app data can override any of them
//! (e.g. for white-labelled builds).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ── Catalog ────────────────────────────────────────────────────────

/// Every key the presentation selector can return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PresentationCatalog {
    /// Main and corner icon asset keys.
    #[serde(default)]
    pub icons: IconKeys,

    /// Copy shown while generating the first transfer code.
    #[serde(default = "PhaseCopy::generate")]
    pub generate: PhaseCopy,

    /// Copy shown when the background certificate renewal fails.
    #[serde(default = "PhaseCopy::update")]
    pub update: PhaseCopy,
}

impl Default for PresentationCatalog {
    fn default() -> Self {
        Self {
            icons: IconKeys::default(),
            generate: PhaseCopy::generate(),
            update: PhaseCopy::update(),
        }
    }
}

// ── Icons ──────────────────────────────────────────────────────────

/// Icon asset keys. Shared by both phases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconKeys {
    /// Main icon for generic failures.
    #[serde(default = "default_error_icon")]
    pub error: String,

    /// Main icon when the device is offline.
    #[serde(default = "default_no_connectivity_icon")]
    pub no_connectivity: String,

    /// Corner badge for generic failures.
    #[serde(default = "default_error_corner")]
    pub corner_error: String,

    /// Corner badge when the device is offline.
    #[serde(default = "default_no_connectivity_corner")]
    pub corner_no_connectivity: String,
}

impl Default for IconKeys {
    fn default() -> Self {
        Self {
            error: default_error_icon(),
            no_connectivity: default_no_connectivity_icon(),
            corner_error: default_error_corner(),
            corner_no_connectivity: default_no_connectivity_corner(),
        }
    }
}

fn default_error_icon() -> String {
    "ic-error-orange".into()
}
fn default_no_connectivity_icon() -> String {
    "ic-nocon".into()
}
fn default_error_corner() -> String {
    "corner-left-error".into()
}
fn default_no_connectivity_corner() -> String {
    "corner-left-nocon".into()
}

// ── Phase copy ─────────────────────────────────────────────────────

/// Title and body keys for one workflow phase.
///
/// A phase section in `presentation.json` must list all four keys; a missing
/// section falls back to the shipped defaults as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseCopy {
    /// Title for generic failures.
    pub error_title: String,
    /// Body for generic failures.
    pub error_body: String,
    /// Title when the device is offline.
    pub no_internet_title: String,
    /// Body when the device is offline.
    pub no_internet_body: String,
}

impl PhaseCopy {
    /// Shipped keys for the code generation phase.
    #[must_use]
    pub fn generate() -> Self {
        Self::with_scope("generate_code")
    }

    /// Shipped keys for the certificate update phase.
    #[must_use]
    pub fn update() -> Self {
        Self::with_scope("update_certificate")
    }

    fn with_scope(scope: &str) -> Self {
        Self {
            error_title: format!("{scope}.error.title"),
            error_body: format!("{scope}.error.body"),
            no_internet_title: format!("{scope}.no_internet.title"),
            no_internet_body: format!("{scope}.no_internet.body"),
        }
    }
}

// ── Loading ────────────────────────────────────────────────────────

const CATALOG_FILE: &str = "presentation.json";

impl PresentationCatalog {
    /// Parse a catalog, filling missing sections and icon keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if `json` is not a valid catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the catalog from `{data_dir}/presentation.json`.
    ///
    /// Returns [`Default::default()`] when the file is missing or invalid,
    /// so a broken override never hides a failure from the user.
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(CATALOG_FILE);
        fs::read_to_string(&path).map_or_else(
            |_| Self::default(),
            |contents| Self::from_json(&contents).unwrap_or_default(),
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────────
