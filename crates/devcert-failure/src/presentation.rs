//! User-facing presentation of failures: icons plus title/body keys.
//!
//! Selection happens in two independent steps that share one input, the
//! failure's [`Appearance`]:
//!
//! ```text
//! TransferFailure ──► appearance() ──┬──► select_icons(appearance)
//!                                    └──► select_copy(appearance, phase)
//! ```
//!
//! The raw cause never reaches a [`Presentation`]; only catalog keys do.

use serde::{Deserialize, Serialize};

use crate::catalog::PresentationCatalog;
use crate::connectivity::is_offline_failure;
use crate::failure::TransferFailure;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Point in the user journey where the failure surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// First-time transfer code generation.
    Generate,
    /// Background certificate renewal.
    Update,
}

/// How a failure should look, independent of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Appearance {
    /// The device is offline.
    NoConnectivity,
    /// Any other failure.
    Generic,
}

/// Classify a failure for presentation.
#[must_use]
pub fn appearance(failure: &TransferFailure) -> Appearance {
    if is_offline_failure(failure) {
        Appearance::NoConnectivity
    } else {
        Appearance::Generic
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Icon and corner-icon asset keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSelection<'a> {
    /// Main icon asset key.
    pub icon: &'a str,
    /// Corner badge asset key.
    pub corner_icon: &'a str,
}

/// Title and body localization keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySelection<'a> {
    /// Localization key of the title.
    pub title: &'a str,
    /// Localization key of the body.
    pub body: &'a str,
}

/// Everything the UI needs to render a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Main icon asset key.
    pub icon: String,
    /// Corner badge asset key.
    pub corner_icon: String,
    /// Localization key of the title.
    pub title: String,
    /// Localization key of the body.
    pub body: String,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

impl PresentationCatalog {
    /// Icons for an appearance. Phase does not matter.
    #[must_use]
    pub fn select_icons(&self, appearance: Appearance) -> IconSelection<'_> {
        match appearance {
            Appearance::NoConnectivity => IconSelection {
                icon: &self.icons.no_connectivity,
                corner_icon: &self.icons.corner_no_connectivity,
            },
            Appearance::Generic => IconSelection {
                icon: &self.icons.error,
                corner_icon: &self.icons.corner_error,
            },
        }
    }

    /// Title and body keys for an appearance in a phase.
    #[must_use]
    pub fn select_copy(&self, appearance: Appearance, phase: Phase) -> CopySelection<'_> {
        let copy = match phase {
            Phase::Generate => &self.generate,
            Phase::Update => &self.update,
        };
        match appearance {
            Appearance::NoConnectivity => CopySelection {
                title: &copy.no_internet_title,
                body: &copy.no_internet_body,
            },
            Appearance::Generic => CopySelection {
                title: &copy.error_title,
                body: &copy.error_body,
            },
        }
    }

    /// Full presentation of `failure` in `phase`.
    #[must_use]
    pub fn present(&self, failure: &TransferFailure, phase: Phase) -> Presentation {
        let appearance = appearance(failure);
        let icons = self.select_icons(appearance);
        let copy = self.select_copy(appearance, phase);
        Presentation {
            icon: icons.icon.to_owned(),
            corner_icon: icons.corner_icon.to_owned(),
            title: copy.title.to_owned(),
            body: copy.body.to_owned(),
        }
    }
}

/// Present `failure` in `phase` using the shipped catalog.
#[must_use]
pub fn present(failure: &TransferFailure, phase: Phase) -> Presentation {
    PresentationCatalog::default().present(failure, phase)
}

impl TransferFailure {
    /// See [`present`].
    #[must_use]
    pub fn present(&self, phase: Phase) -> Presentation {
        present(self, phase)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::{Cause, DomainCode, ErrorCause};

    #[derive(Debug)]
    struct NotConnected;

    impl ErrorCause for NotConnected {
        fn domain(&self) -> &str {
            "NSURLErrorDomain"
        }
        fn code(&self) -> i64 {
            -1009
        }
        fn is_no_connectivity(&self) -> bool {
            true
        }
    }

    fn offline() -> Option<Cause> {
        Some(Cause::new(NotConnected))
    }

    fn timed_out() -> Option<Cause> {
        Some(Cause::new(DomainCode::new("NSURLErrorDomain", -1001)))
    }

    #[test]
    fn offline_registration_during_generate() {
        let failure = TransferFailure::RegisterFailed { cause: offline() };
        insta::assert_json_snapshot!(failure.present(Phase::Generate), @r#"
        {
          "icon": "ic-nocon",
          "cornerIcon": "corner-left-nocon",
          "title": "generate_code.no_internet.title",
          "body": "generate_code.no_internet.body"
        }
        "#);
    }

    #[test]
    fn failed_registration_during_generate() {
        let failure = TransferFailure::RegisterFailed { cause: timed_out() };
        insta::assert_json_snapshot!(failure.present(Phase::Generate), @r#"
        {
          "icon": "ic-error-orange",
          "cornerIcon": "corner-left-error",
          "title": "generate_code.error.title",
          "body": "generate_code.error.body"
        }
        "#);
    }

    #[test]
    fn offline_fetch_during_update_keeps_icons_changes_copy() {
        let failure = TransferFailure::GetCertificateFailed { cause: offline() };
        let generate = failure.present(Phase::Generate);
        let update = failure.present(Phase::Update);

        assert_eq!(update.icon, generate.icon);
        assert_eq!(update.corner_icon, generate.corner_icon);
        assert_eq!(update.title, "update_certificate.no_internet.title");
        assert_eq!(update.body, "update_certificate.no_internet.body");
    }

    #[test]
    fn other_variants_ignore_offline_cause() {
        let failures = [
            TransferFailure::DeleteCertificateFailed { cause: offline() },
            TransferFailure::Sign { cause: offline() },
            TransferFailure::CreateKey { cause: offline() },
            TransferFailure::Decryption {
                cause: offline(),
                prefix: None,
            },
            TransferFailure::CannotEncodePublicKey { cause: offline() },
            TransferFailure::CannotDecodeResponse {
                status_code: Some(503),
            },
            TransferFailure::LoadKey { os_status: None },
            TransferFailure::Base64Decoding,
            TransferFailure::CannotGetPublicKey,
        ];
        for failure in &failures {
            for phase in [Phase::Generate, Phase::Update] {
                let p = failure.present(phase);
                assert_eq!(p.icon, "ic-error-orange", "{failure:?}");
                assert_eq!(p.corner_icon, "corner-left-error", "{failure:?}");
            }
        }
    }

    #[test]
    fn missing_cause_presents_generic() {
        let failure = TransferFailure::GetCertificateFailed { cause: None };
        assert_eq!(appearance(&failure), Appearance::Generic);
        assert_eq!(
            failure.present(Phase::Update).title,
            "update_certificate.error.title"
        );
    }

    #[test]
    fn icon_selection_ignores_phase() {
        let catalog = PresentationCatalog::default();
        let icons = catalog.select_icons(Appearance::NoConnectivity);
        assert_eq!(icons.icon, "ic-nocon");
        assert_eq!(icons.corner_icon, "corner-left-nocon");
    }

    #[test]
    fn custom_catalog_keys_are_used() {
        let mut catalog = PresentationCatalog::default();
        catalog.icons.no_connectivity = "ic-airplane".into();
        let failure = TransferFailure::RegisterFailed { cause: offline() };
        assert_eq!(catalog.present(&failure, Phase::Update).icon, "ic-airplane");
    }

    #[test]
    fn phase_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Update).unwrap(), "\"update\"");
    }
}
