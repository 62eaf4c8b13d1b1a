//! `devcert-platform`: Platform glue for device certificate failures.
//!
//! Adapts OS and network-stack errors to `devcert-failure`'s cause
//! interface, and turns failures into logged, serializable reports for
//! the UI and telemetry layers.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod cause;
pub mod report;

pub use cause::{PlatformCause, CF_NETWORK_ERROR_DOMAIN, POSIX_ERROR_DOMAIN, URL_ERROR_DOMAIN};
pub use report::{log_failure, FailureReport};
