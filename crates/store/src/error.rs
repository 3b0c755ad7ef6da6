//! Unified error handling.
//!
//! Folds the per-concern errors into a single `StoreError` so facade
//! operations and the CLI can return one type. No failure here is fatal
//! to the process; worst case the caller shows a stale or empty list.

use thiserror::Error;

use shopfront_core::ProductId;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::overlay::OverlayError;

/// Top-level error type for storefront operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Remote catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Overlay snapshot could not be written.
    #[error("Overlay error: {0}")]
    Overlay(#[from] OverlayError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No product with this id in the merged list.
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound(ProductId::Remote(12));
        assert_eq!(err.to_string(), "Product not found: 12");

        let err = StoreError::NotFound(ProductId::Local("local-9".to_string()));
        assert_eq!(err.to_string(), "Product not found: local-9");
    }

    #[test]
    fn test_catalog_error_wraps() {
        let inner = CatalogError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        let err = StoreError::from(inner);
        assert!(err.to_string().starts_with("Catalog error:"));
    }
}
