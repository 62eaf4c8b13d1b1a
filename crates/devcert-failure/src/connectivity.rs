//! Offline detection for network failures.
//!
//! Detection itself belongs to the platform adapter behind [`ErrorCause`]
//! (`devcert-platform` ships one). This module only decides where that
//! verdict is consulted, and fails closed when there is nothing to ask.
//!
//! [`ErrorCause`]: crate::cause::ErrorCause

use crate::cause::Cause;
use crate::failure::TransferFailure;

/// Whether `cause` means the device is offline. `None` is never offline.
#[must_use]
pub fn is_no_connectivity(cause: Option<&Cause>) -> bool {
    cause.is_some_and(Cause::is_no_connectivity)
}

/// Whether a failure should be presented as a connectivity loss.
///
/// Only registration and certificate fetch are presented this way; the other
/// variants ignore their cause's connectivity verdict.
#[must_use]
pub fn is_offline_failure(failure: &TransferFailure) -> bool {
    match failure {
        TransferFailure::RegisterFailed { cause }
        | TransferFailure::GetCertificateFailed { cause } => is_no_connectivity(cause.as_ref()),

        TransferFailure::Base64Decoding
        | TransferFailure::Decryption { .. }
        | TransferFailure::Sign { .. }
        | TransferFailure::LoadKey { .. }
        | TransferFailure::CreateKey { .. }
        | TransferFailure::CannotGetPublicKey
        | TransferFailure::CannotEncodePublicKey { .. }
        | TransferFailure::CannotDecodeResponse { .. }
        | TransferFailure::DeleteCertificateFailed { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::{DomainCode, ErrorCause};

    #[derive(Debug)]
    struct Airplane;

    impl ErrorCause for Airplane {
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

    #[test]
    fn missing_cause_is_not_offline() {
        assert!(!is_no_connectivity(None));
    }

    #[test]
    fn unclassified_cause_is_not_offline() {
        let cause = Cause::new(DomainCode::new("SomeDomain", 1));
        assert!(!is_no_connectivity(Some(&cause)));
    }

    #[test]
    fn adapter_verdict_is_used() {
        assert!(is_no_connectivity(Some(&Cause::new(Airplane))));
    }

    #[test]
    fn only_register_and_fetch_count_as_offline() {
        let offline = || Some(Cause::new(Airplane));
        assert!(is_offline_failure(&TransferFailure::RegisterFailed {
            cause: offline()
        }));
        assert!(is_offline_failure(&TransferFailure::GetCertificateFailed {
            cause: offline()
        }));
        assert!(!is_offline_failure(
            &TransferFailure::DeleteCertificateFailed { cause: offline() }
        ));
        assert!(!is_offline_failure(&TransferFailure::Sign {
            cause: offline()
        }));
    }
}
