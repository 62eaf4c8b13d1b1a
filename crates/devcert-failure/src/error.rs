//! Error types for `devcert-failure`.

use thiserror::Error;

/// Errors produced while parsing a [`PresentationCatalog`].
///
/// [`PresentationCatalog`]: crate::catalog::PresentationCatalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON is malformed or has the wrong shape.
    #[error("invalid presentation catalog: {0}")]
    Json(#[from] serde_json::Error),
}
