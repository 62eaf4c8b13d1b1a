//! Failure reports for the UI and telemetry layers.
//!
//! A [`FailureReport`] bundles the three independent views of one failure
//! (diagnostic code, retry verdict, presentation) into a single DTO that
//! serializes to camelCase JSON for the frontend.

use devcert_failure::{Origin, Phase, Presentation, PresentationCatalog, TransferFailure};
use serde::Serialize;

/// Everything the app shows or records about a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    /// Support-facing diagnostic code (e.g. `N|RF|NSURLED-1009`).
    pub code: String,
    /// Where the failure happened.
    pub origin: Origin,
    /// Whether the UI should offer a retry.
    pub recoverable: bool,
    /// Phase the failure surfaced in.
    pub phase: Phase,
    /// Icon and copy keys to render.
    pub presentation: Presentation,
}

impl FailureReport {
    /// Build a report using the shipped presentation catalog.
    #[must_use]
    pub fn new(failure: &TransferFailure, phase: Phase) -> Self {
        Self::with_catalog(failure, phase, &PresentationCatalog::default())
    }

    /// Build a report using a custom presentation catalog.
    #[must_use]
    pub fn with_catalog(
        failure: &TransferFailure,
        phase: Phase,
        catalog: &PresentationCatalog,
    ) -> Self {
        Self {
            code: failure.diagnostic_code(),
            origin: failure.origin(),
            recoverable: failure.is_recoverable(),
            phase,
            presentation: catalog.present(failure, phase),
        }
    }

    /// Emit one structured log event for this report.
    ///
    /// Only the diagnostic code is logged, never the raw cause.
    pub fn log(&self) {
        let origin = self.origin.prefix();
        let phase = phase_name(self.phase);
        if self.recoverable {
            tracing::warn!(
                code = %self.code,
                origin,
                phase,
                recoverable = true,
                "certificate transfer failed, retry available"
            );
        } else {
            tracing::error!(
                code = %self.code,
                origin,
                phase,
                recoverable = false,
                "certificate transfer failed"
            );
        }
    }
}

/// Build, log and return the report for `failure`.
pub fn log_failure(failure: &TransferFailure, phase: Phase) -> FailureReport {
    let report = FailureReport::new(failure, phase);
    report.log();
    report
}

const fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Generate => "generate",
        Phase::Update => "update",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
