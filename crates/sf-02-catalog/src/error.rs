//! Error types for the Catalog Provider subsystem

use thiserror::Error;

/// Errors raised while loading catalogs or themes.
#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("No catalog for category: {0}")]
    NotFound(String),

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid category name: {0}")]
    InvalidCategory(String),
}

impl CatalogSourceError {
    pub(crate) fn io(path: impl std::fmt::Display, err: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(path: impl std::fmt::Display, err: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}
