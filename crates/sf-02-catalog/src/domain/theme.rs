//! # Category Themes
//!
//! Presentation styling per category: an accent class for action buttons, a
//! badge class for the order summary, and an icon shown when a product has
//! no image. Categories without an entry use the fallback theme.
//!
//! Theme files key categories by display name; keys are normalized to
//! `CategoryId` on load, so two names that normalize to the same id are
//! rejected.

use serde::{Deserialize, Serialize};
use sf_01_cart_engine::{CategoryId, CategoryRegistry};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::CatalogSourceError;

const FARM_THEMES_JSON: &str = include_str!("../../themes.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTheme {
    pub accent: String,
    pub badge: String,
    pub icon: String,
}

impl Default for CategoryTheme {
    fn default() -> Self {
        Self {
            accent: "bg-farm-green-600 hover:bg-farm-green-700".to_string(),
            badge: "bg-farm-green-100 text-farm-green-800".to_string(),
            icon: "🌱".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    fallback: Option<CategoryTheme>,
    #[serde(default)]
    categories: BTreeMap<String, CategoryTheme>,
}

/// Theme lookup keyed by `CategoryId`.
#[derive(Debug, Clone, Default)]
pub struct ThemeTable {
    themes: HashMap<CategoryId, CategoryTheme>,
    fallback: CategoryTheme,
}

impl ThemeTable {
    /// Empty table; every category gets `fallback`.
    pub fn new(fallback: CategoryTheme) -> Self {
        Self {
            themes: HashMap::new(),
            fallback,
        }
    }

    /// Themes of the built-in farm categories.
    pub fn farm_defaults() -> Result<Self, CatalogSourceError> {
        Self::from_json(FARM_THEMES_JSON)
    }

    /// Parse a theme file.
    ///
    /// # Errors
    /// `Parse` for malformed JSON, `InvalidCategory` for blank or colliding
    /// category names.
    pub fn from_json(raw: &str) -> Result<Self, CatalogSourceError> {
        let file: ThemeFile =
            serde_json::from_str(raw).map_err(|e| CatalogSourceError::parse("theme table", e))?;

        let mut registry = CategoryRegistry::new();
        let mut table = Self::new(file.fallback.unwrap_or_default());
        for (display_name, theme) in file.categories {
            let id = registry
                .register(&display_name)
                .map_err(|e| CatalogSourceError::InvalidCategory(e.to_string()))?;
            table.themes.insert(id, theme);
        }
        Ok(table)
    }

    /// Read and parse a theme file from disk.
    pub fn from_file(path: &Path) -> Result<Self, CatalogSourceError> {
        let raw =
            std::fs::read_to_string(path).map_err(|e| CatalogSourceError::io(path.display(), e))?;
        Self::from_json(&raw).map_err(|e| match e {
            CatalogSourceError::Parse { message, .. } => CatalogSourceError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Theme for `category`, or the fallback.
    pub fn theme_for(&self, category: &CategoryId) -> &CategoryTheme {
        self.themes.get(category).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &CategoryTheme {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
