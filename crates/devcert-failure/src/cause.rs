//! Opaque underlying causes reported by crypto, keychain and network collaborators.
//!
//! The core never looks inside a cause beyond three capabilities: its error
//! domain, its numeric code, and whether the collaborator recognises it as a
//! loss of connectivity. Platform adapters implement [`ErrorCause`]; failures
//! hold them behind the shared [`Cause`] handle.

use std::fmt;
use std::sync::Arc;

use unicode_general_category::{get_general_category, GeneralCategory};

// ---------------------------------------------------------------------------
// Collaborator interface
// ---------------------------------------------------------------------------

/// Narrow view of an error produced outside this crate.
pub trait ErrorCause: fmt::Debug + Send + Sync {
    /// Error domain identifier (e.g. `"NSURLErrorDomain"`).
    fn domain(&self) -> &str;

    /// Numeric error code within the domain.
    fn code(&self) -> i64;

    /// Whether this cause means the device has no network connectivity.
    ///
    /// Adapters that cannot tell return `false`.
    fn is_no_connectivity(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

/// Shared, immutable handle to an [`ErrorCause`].
///
/// Two causes compare equal when their domain and code match; the adapter's
/// concrete type and connectivity verdict do not take part.
#[derive(Clone)]
pub struct Cause(Arc<dyn ErrorCause>);

impl Cause {
    /// Wrap a collaborator error.
    pub fn new(inner: impl ErrorCause + 'static) -> Self {
        Self(Arc::new(inner))
    }

    /// Error domain identifier.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.domain()
    }

    /// Numeric error code.
    #[must_use]
    pub fn code(&self) -> i64 {
        self.0.code()
    }

    /// Connectivity verdict of the underlying adapter.
    #[must_use]
    pub fn is_no_connectivity(&self) -> bool {
        self.0.is_no_connectivity()
    }

    /// Support-facing signature: `<mnemonic><code>`, e.g. `NSURLED-1009`.
    #[must_use]
    pub fn signature(&self) -> String {
        format!("{}{}", domain_mnemonic(self.domain()), self.code())
    }
}

impl<T: ErrorCause + 'static> From<Arc<T>> for Cause {
    fn from(inner: Arc<T>) -> Self {
        Self(inner)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("domain", &self.domain())
            .field("code", &self.code())
            .finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain(), self.code())
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.domain() == other.domain() && self.code() == other.code()
    }
}

impl Eq for Cause {}

// ---------------------------------------------------------------------------
// Plain (domain, code) cause
// ---------------------------------------------------------------------------

/// Minimal [`ErrorCause`] carrying only a domain and a code.
///
/// Used when a collaborator hands over an already-flattened error and for
/// tests. Never reports a connectivity loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCode {
    domain: String,
    code: i64,
}

impl DomainCode {
    /// Create a cause from its domain and code.
    #[must_use]
    pub fn new(domain: impl Into<String>, code: i64) -> Self {
        Self {
            domain: domain.into(),
            code,
        }
    }
}

impl ErrorCause for DomainCode {
    fn domain(&self) -> &str {
        &self.domain
    }

    fn code(&self) -> i64 {
        self.code
    }
}

// ---------------------------------------------------------------------------
// Domain mnemonic
// ---------------------------------------------------------------------------

/// Reduce an error domain to its uppercase letters and punctuation, in order.
///
/// `"NSURLErrorDomain"` becomes `"NSURLED"`, `"com.apple.security"` becomes
/// `".."`. Lowercase letters, digits, whitespace and symbols are dropped.
#[must_use]
pub fn domain_mnemonic(domain: &str) -> String {
    domain.chars().filter(|&c| is_mnemonic_char(c)).collect()
}

/// Uppercase letter or Unicode punctuation (general category `P*`).
///
/// `|` is a math symbol (`Sm`), so the code field separator can never leak
/// out of a domain.
#[must_use]
pub fn is_mnemonic_char(c: char) -> bool {
    c.is_uppercase()
        || matches!(
            get_general_category(c),
            GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::OpenPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::OtherPunctuation
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
