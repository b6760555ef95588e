//! # Error Types
//!
//! Defines error types raised while building catalog entities.

use thiserror::Error;

/// Errors that can occur while constructing a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two products in the same category share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(String),

    /// Price is negative, not a number, or too large to represent.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}
