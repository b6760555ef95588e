//! # Category Identifiers
//!
//! A cart session is scoped to one category view. The category's display
//! name is normalized exactly once into a `CategoryId`, which is then the
//! only thing the engine knows about the category: it derives the storage
//! slot key and nothing else.
//!
//! ## Normalization
//!
//! ```text
//! "Andrew Poultry Farm"  →  "andrew-poultry-farm"  →  "andrew-poultry-farm-cart"
//!      display name             CategoryId              storage key
//! ```

use super::errors::CartError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Fixed suffix appended to a category id to form its storage slot key.
pub const CART_KEY_SUFFIX: &str = "-cart";

/// Normalized, non-empty category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Normalize a display name: surrounding whitespace is dropped, each run
    /// of internal whitespace becomes one hyphen, and the result is lowercased.
    ///
    /// The trim departs from the browser storefront's key layout, which
    /// hyphenates surrounding whitespace too. A slot it saved for
    /// `" Andrew Poultry Farm"` lives under `-andrew-poultry-farm-cart` and is
    /// not found from here.
    ///
    /// # Errors
    /// Returns `EmptyCategory` if nothing remains after normalization.
    pub fn from_display_name(display_name: &str) -> Result<Self, CartError> {
        let normalized = display_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();

        if normalized.is_empty() {
            return Err(CartError::EmptyCategory(display_name.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the persisted ledger slot for this category.
    pub fn storage_key(&self) -> String {
        format!("{}{}", self.0, CART_KEY_SUFFIX)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry of known categories.
///
/// INVARIANT-5: two distinct display names never map to the same id.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    by_id: HashMap<CategoryId, String>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display name and return its id.
    ///
    /// Registering the same display name twice returns the same id.
    ///
    /// # Errors
    /// - `EmptyCategory`: the name normalizes to nothing
    /// - `CategoryCollision`: a different name already owns the id
    pub fn register(&mut self, display_name: &str) -> Result<CategoryId, CartError> {
        let id = CategoryId::from_display_name(display_name)?;
        let display_name = display_name.trim();

        match self.by_id.get(&id) {
            Some(existing) if existing != display_name => Err(CartError::CategoryCollision {
                display_name: display_name.to_string(),
                existing: existing.clone(),
                key: id.storage_key(),
            }),
            Some(_) => Ok(id),
            None => {
                self.by_id.insert(id.clone(), display_name.to_string());
                Ok(id)
            }
        }
    }

    /// Display name a category was registered with.
    pub fn display_name(&self, id: &CategoryId) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
