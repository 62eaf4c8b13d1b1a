//! Platform error adapter that recognises offline signatures in OS/network errors.
//!
//! Errors reach the app as `(domain, code)` pairs: Foundation URL loading
//! errors, `CFNetwork` errors, and POSIX `errno` values from sockets. A
//! [`PlatformCause`] wraps one pair and answers the connectivity question
//! for `devcert-failure`.
//!
//! # Offline signatures
//!
//! | Domain                                         | Codes                                |
//! |------------------------------------------------|--------------------------------------|
//! | `NSURLErrorDomain`, `kCFErrorDomainCFNetwork`  | -1009, -1020, -1018, -1005, -1004, -1003 |
//! | `NSPOSIXErrorDomain`                           | `ENETDOWN`, `ENETUNREACH`, `EHOSTUNREACH` |

use std::io;

use devcert_failure::{Cause, ErrorCause};

// ---------------------------------------------------------------------------
// Domains and codes
// ---------------------------------------------------------------------------

/// Foundation URL loading system.
pub const URL_ERROR_DOMAIN: &str = "NSURLErrorDomain";

/// `CFNetwork`; shares its code space with [`URL_ERROR_DOMAIN`].
pub const CF_NETWORK_ERROR_DOMAIN: &str = "kCFErrorDomainCFNetwork";

/// POSIX `errno` values.
pub const POSIX_ERROR_DOMAIN: &str = "NSPOSIXErrorDomain";

/// URL-loading codes meaning the device cannot reach any network.
const OFFLINE_URL_CODES: [i64; 6] = [
    -1009, // not connected to internet (airplane mode, no Wi-Fi/cellular)
    -1020, // cellular data not allowed
    -1018, // international roaming off
    -1005, // network connection lost
    -1004, // cannot connect to host
    -1003, // cannot find host (DNS)
];

#[cfg(unix)]
const OFFLINE_ERRNOS: [i32; 3] = [libc::ENETDOWN, libc::ENETUNREACH, libc::EHOSTUNREACH];

#[cfg(not(unix))]
const OFFLINE_ERRNOS: [i32; 0] = [];

// ---------------------------------------------------------------------------
// PlatformCause
// ---------------------------------------------------------------------------

/// An OS or network-stack error reduced to its domain and code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCause {
    domain: String,
    code: i64,
}

impl PlatformCause {
    /// Wrap a raw `(domain, code)` pair.
    #[must_use]
    pub fn new(domain: impl Into<String>, code: i64) -> Self {
        Self {
            domain: domain.into(),
            code,
        }
    }

    /// URL loading error with the given code.
    #[must_use]
    pub fn url(code: i64) -> Self {
        Self::new(URL_ERROR_DOMAIN, code)
    }

    /// POSIX error with the given `errno`.
    #[must_use]
    pub fn posix(errno: i32) -> Self {
        Self::new(POSIX_ERROR_DOMAIN, i64::from(errno))
    }

    /// Convert into the handle carried by a `TransferFailure`.
    #[must_use]
    pub fn into_cause(self) -> Cause {
        Cause::new(self)
    }

    fn matches_offline_signature(&self) -> bool {
        match self.domain.as_str() {
            URL_ERROR_DOMAIN | CF_NETWORK_ERROR_DOMAIN => OFFLINE_URL_CODES.contains(&self.code),
            POSIX_ERROR_DOMAIN => OFFLINE_ERRNOS
                .iter()
                .any(|&errno| i64::from(errno) == self.code),
            _ => false,
        }
    }
}

impl ErrorCause for PlatformCause {
    fn domain(&self) -> &str {
        &self.domain
    }

    fn code(&self) -> i64 {
        self.code
    }

    fn is_no_connectivity(&self) -> bool {
        let offline = self.matches_offline_signature();
        if offline {
            tracing::debug!(domain = %self.domain, code = self.code, "cause classified as offline");
        }
        offline
    }
}

/// Socket errors carry their `errno`; errors without one fall back to code 0,
/// which never matches an offline signature.
impl From<&io::Error> for PlatformCause {
    fn from(err: &io::Error) -> Self {
        Self::posix(err.raw_os_error().unwrap_or(0))
    }
}

impl From<io::Error> for PlatformCause {
    fn from(err: io::Error) -> Self {
        Self::from(&err)
    }
}

impl From<PlatformCause> for Cause {
    fn from(cause: PlatformCause) -> Self {
        cause.into_cause()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
