//! Cart Engine error types.
//!
//! Intents (add/remove/clear/checkout) never return these: storage failures
//! on the intent path are logged and swallowed. They surface only where a
//! caller can act on them, which is category registration.

use thiserror::Error;

/// Cart Engine error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Category display name normalizes to an empty identifier.
    #[error("Category name {0:?} normalizes to an empty identifier")]
    EmptyCategory(String),

    /// Two different display names normalize to the same storage key.
    #[error("Category {display_name:?} collides with {existing:?} on key {key}")]
    CategoryCollision {
        display_name: String,
        existing: String,
        key: String,
    },
}

/// Errors reported by a `CartStore` adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Storage backend is not reachable (disabled, quota exceeded, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Key cannot be mapped onto the backend (e.g. contains a path separator).
    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failure.
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io {
            message: e.to_string(),
        }
    }
}

/// Slot content could not be encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cart slot codec error: {0}")]
pub struct SlotCodecError(pub String);
