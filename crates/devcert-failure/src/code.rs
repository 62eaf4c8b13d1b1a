//! Diagnostic codes for support and triage.
//!
//! A code has the shape `<Origin>|<Tag>[<CauseSuffix>][|<Context>]`:
//!
//! ```text
//! C|B64              base64 payload malformed
//! C|DE|CFEDCFN-4|sig decryption failed, cause kCFErrorDomainCFNetwork -4, prefix "sig"
//! C|LKE-25300        key load failed with OS status -25300
//! N|RF|NSURLED-1009  registration failed, cause NSURLErrorDomain -1009
//! N|CDR503           response undecodable, HTTP 503
//! ```
//!
//! Codes are stable across runs and releases: support tickets quote them
//! verbatim, and log parsers split them on `|`.

use crate::cause::Cause;
use crate::failure::TransferFailure;

/// Field separator between code segments.
pub const SEPARATOR: char = '|';

/// Encode a failure as its diagnostic code.
#[must_use]
pub fn diagnostic_code(failure: &TransferFailure) -> String {
    let mut code = String::from(failure.origin().prefix());
    code.push(SEPARATOR);
    code.push_str(tag(failure));

    match failure {
        TransferFailure::Base64Decoding | TransferFailure::CannotGetPublicKey => {}

        TransferFailure::Decryption { cause, prefix } => {
            code.push_str(&cause_suffix(cause.as_ref()));
            code.push(SEPARATOR);
            code.push_str(prefix.as_deref().unwrap_or_default());
        }

        TransferFailure::Sign { cause }
        | TransferFailure::CreateKey { cause }
        | TransferFailure::CannotEncodePublicKey { cause }
        | TransferFailure::RegisterFailed { cause }
        | TransferFailure::GetCertificateFailed { cause }
        | TransferFailure::DeleteCertificateFailed { cause } => {
            code.push_str(&cause_suffix(cause.as_ref()));
        }

        TransferFailure::LoadKey { os_status } => {
            if let Some(status) = os_status {
                code.push_str(&status.to_string());
            }
        }

        TransferFailure::CannotDecodeResponse { status_code } => {
            if let Some(status) = status_code {
                code.push_str(&status.to_string());
            }
        }
    }

    code
}

/// Fixed mnemonic for each variant.
#[must_use]
pub const fn tag(failure: &TransferFailure) -> &'static str {
    match failure {
        TransferFailure::Base64Decoding => "B64",
        TransferFailure::Decryption { .. } => "DE",
        TransferFailure::Sign { .. } => "SE",
        TransferFailure::LoadKey { .. } => "LKE",
        TransferFailure::CreateKey { .. } => "CKE",
        TransferFailure::CannotGetPublicKey => "CGPK",
        TransferFailure::CannotEncodePublicKey { .. } => "CEPK",
        TransferFailure::RegisterFailed { .. } => "RF",
        TransferFailure::GetCertificateFailed { .. } => "GCF",
        TransferFailure::CannotDecodeResponse { .. } => "CDR",
        TransferFailure::DeleteCertificateFailed { .. } => "DCF",
    }
}

/// `|<mnemonic><code>` for a present cause, empty (no separator) otherwise.
///
/// A cause whose domain filters down to nothing still yields `|<code>`, so
/// the field count only depends on whether a cause was captured.
#[must_use]
pub fn cause_suffix(cause: Option<&Cause>) -> String {
    cause.map_or_else(String::new, |cause| {
        format!("{SEPARATOR}{}", cause.signature())
    })
}

impl TransferFailure {
    /// Diagnostic code for this failure. See [`diagnostic_code`].
    #[must_use]
    pub fn diagnostic_code(&self) -> String {
        diagnostic_code(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
