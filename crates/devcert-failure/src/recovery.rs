//! Recoverability policy: which failures are worth retrying.
//!
//! The verdict is advisory. Callers use it to show or hide a retry action;
//! this crate never retries anything itself.

use serde::{Deserialize, Serialize};

use crate::failure::TransferFailure;

/// Whether retrying the failed step can succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recoverability {
    /// Remote failure; a later attempt may succeed.
    Transient,
    /// Local crypto or encoding failure; retrying gives the same result.
    Permanent,
}

/// Classify a failure.
#[must_use]
pub const fn recoverability(failure: &TransferFailure) -> Recoverability {
    match failure {
        TransferFailure::Base64Decoding
        | TransferFailure::Decryption { .. }
        | TransferFailure::Sign { .. }
        | TransferFailure::LoadKey { .. }
        | TransferFailure::CreateKey { .. }
        | TransferFailure::CannotGetPublicKey
        | TransferFailure::CannotEncodePublicKey { .. } => Recoverability::Permanent,

        TransferFailure::RegisterFailed { .. }
        | TransferFailure::GetCertificateFailed { .. }
        | TransferFailure::CannotDecodeResponse { .. }
        | TransferFailure::DeleteCertificateFailed { .. } => Recoverability::Transient,
    }
}

/// `true` when the caller should offer a retry.
#[must_use]
pub const fn is_recoverable(failure: &TransferFailure) -> bool {
    matches!(recoverability(failure), Recoverability::Transient)
}

impl TransferFailure {
    /// See [`is_recoverable`].
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        is_recoverable(self)
    }
}
