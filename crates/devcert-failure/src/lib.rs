//! `devcert-failure`: Failure taxonomy for the device certificate workflow.
//!
//! Turns a [`TransferFailure`] into the three things its consumers need:
//! a stable diagnostic code for support, a retry verdict, and the icon and
//! copy keys the UI renders for the current [`Phase`].
//!
//! Pure and synchronous: zero I/O on the classification path, zero logging.
//! Platform adapters and reporting live in `devcert-platform`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod cause;
pub mod error;
pub mod failure;

pub mod code;
pub mod recovery;

pub mod connectivity;

pub mod catalog;
pub mod presentation;

pub use catalog::{IconKeys, PhaseCopy, PresentationCatalog};
pub use cause::{domain_mnemonic, is_mnemonic_char, Cause, DomainCode, ErrorCause};
pub use code::diagnostic_code;
pub use connectivity::{is_no_connectivity, is_offline_failure};
pub use error::CatalogError;
pub use failure::{Origin, TransferFailure};
pub use presentation::{
    appearance, present, Appearance, CopySelection, IconSelection, Phase, Presentation,
};
pub use recovery::{is_recoverable, recoverability, Recoverability};
