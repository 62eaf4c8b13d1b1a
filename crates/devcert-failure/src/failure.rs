//! The closed set of failures the certificate transfer workflow can produce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cause::Cause;

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// Where a failure happened: on-device crypto/encoding, or a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Local crypto, keychain or encoding operation.
    Client,
    /// Remote registration or certificate operation.
    Network,
}

impl Origin {
    /// Leading field of a diagnostic code.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Client => "C",
            Self::Network => "N",
        }
    }
}

// ---------------------------------------------------------------------------
// TransferFailure
// ---------------------------------------------------------------------------

/// A failure raised by one step of the device certificate workflow.
///
/// Every crypto or network error is mapped into exactly one variant at the
/// failure site. `Display` output is meant for developer logs only; users see
/// the curated [`Presentation`](crate::Presentation) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferFailure {
    /// The payload was not valid base64.
    #[error("payload is not valid base64")]
    Base64Decoding,

    /// The payload failed to decrypt.
    #[error("payload decryption failed")]
    Decryption {
        /// Error reported by the crypto library.
        cause: Option<Cause>,
        /// Key-usage prefix the payload was decrypted for.
        prefix: Option<String>,
    },

    /// Signing the payload failed.
    #[error("signing failed")]
    Sign {
        /// Error reported by the crypto library.
        cause: Option<Cause>,
    },

    /// The private key could not be read from secure storage.
    #[error("failed to load key from secure storage")]
    LoadKey {
        /// OS status returned by the keychain.
        os_status: Option<i64>,
    },

    /// Key pair generation failed.
    #[error("key pair generation failed")]
    CreateKey {
        /// Error reported by the key store.
        cause: Option<Cause>,
    },

    /// The key pair did not yield a public key.
    #[error("public key unavailable")]
    CannotGetPublicKey,

    /// The public key could not be serialized.
    #[error("public key encoding failed")]
    CannotEncodePublicKey {
        /// Error reported by the crypto library.
        cause: Option<Cause>,
    },

    /// Device registration request failed.
    #[error("device registration failed")]
    RegisterFailed {
        /// Error reported by the network stack.
        cause: Option<Cause>,
    },

    /// Certificate fetch request failed.
    #[error("certificate fetch failed")]
    GetCertificateFailed {
        /// Error reported by the network stack.
        cause: Option<Cause>,
    },

    /// The server response body could not be decoded.
    #[error("server response could not be decoded")]
    CannotDecodeResponse {
        /// HTTP status of the undecodable response.
        status_code: Option<i64>,
    },

    /// Certificate deletion request failed.
    #[error("certificate deletion failed")]
    DeleteCertificateFailed {
        /// Error reported by the network stack.
        cause: Option<Cause>,
    },
}

impl TransferFailure {
    /// Where this failure happened.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        match self {
            Self::Base64Decoding
            | Self::Decryption { .. }
            | Self::Sign { .. }
            | Self::LoadKey { .. }
            | Self::CreateKey { .. }
            | Self::CannotGetPublicKey
            | Self::CannotEncodePublicKey { .. } => Origin::Client,

            Self::RegisterFailed { .. }
            | Self::GetCertificateFailed { .. }
            | Self::CannotDecodeResponse { .. }
            | Self::DeleteCertificateFailed { .. } => Origin::Network,
        }
    }

    /// Underlying collaborator error, for the variants that carry one.
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Decryption { cause, .. }
            | Self::Sign { cause }
            | Self::CreateKey { cause }
            | Self::CannotEncodePublicKey { cause }
            | Self::RegisterFailed { cause }
            | Self::GetCertificateFailed { cause }
            | Self::DeleteCertificateFailed { cause } => cause.as_ref(),

            Self::Base64Decoding
            | Self::LoadKey { .. }
            | Self::CannotGetPublicKey
            | Self::CannotDecodeResponse { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::DomainCode;

    fn some_cause() -> Option<Cause> {
        Some(Cause::new(DomainCode::new("NSURLErrorDomain", -1001)))
    }

    #[test]
    fn client_variants_have_client_origin() {
        let client = [
            TransferFailure::Base64Decoding,
            TransferFailure::Decryption {
                cause: None,
                prefix: None,
            },
            TransferFailure::Sign { cause: None },
            TransferFailure::LoadKey { os_status: None },
            TransferFailure::CreateKey { cause: None },
            TransferFailure::CannotGetPublicKey,
            TransferFailure::CannotEncodePublicKey { cause: None },
        ];
        for failure in &client {
            assert_eq!(failure.origin(), Origin::Client, "{failure:?}");
        }
    }

    #[test]
    fn network_variants_have_network_origin() {
        let network = [
            TransferFailure::RegisterFailed { cause: None },
            TransferFailure::GetCertificateFailed { cause: None },
            TransferFailure::CannotDecodeResponse { status_code: None },
            TransferFailure::DeleteCertificateFailed { cause: None },
        ];
        for failure in &network {
            assert_eq!(failure.origin(), Origin::Network, "{failure:?}");
        }
    }

    #[test]
    fn origin_prefixes() {
        assert_eq!(Origin::Client.prefix(), "C");
        assert_eq!(Origin::Network.prefix(), "N");
    }

    #[test]
    fn cause_accessor_returns_carried_cause() {
        let failure = TransferFailure::RegisterFailed {
            cause: some_cause(),
        };
        assert_eq!(failure.cause().map(Cause::code), Some(-1001));
        assert!(TransferFailure::LoadKey {
            os_status: Some(-25300)
        }
        .cause()
        .is_none());
    }

    #[test]
    fn display_never_contains_cause_details() {
        let failure = TransferFailure::GetCertificateFailed {
            cause: some_cause(),
        };
        let message = failure.to_string();
        assert_eq!(message, "certificate fetch failed");
        assert!(!message.contains("NSURLErrorDomain"));
    }

    #[test]
    fn origin_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Origin::Network).unwrap(),
            "\"network\""
        );
    }
}
