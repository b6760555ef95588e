//! # Storefront Configuration
//!
//! Defaults plus environment overrides:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SF_DATA_DIR` | `./data/carts` | Directory holding one `<category>-cart.json` per category |
//! | `SF_CATALOG_DIR` | unset | Directory of `<category-id>.json` catalogs; built-in catalogs when unset |
//! | `SF_CATEGORY` | `Andrew Poultry Farm` | Display name of the category to open |
//! | `SF_THEME_FILE` | unset | Theme table JSON; built-in farm themes when unset |

use std::path::PathBuf;
use thiserror::Error;

/// Complete storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Cart slot directory.
    pub data_dir: PathBuf,
    /// Catalog directory, if not using the built-in catalogs.
    pub catalog_dir: Option<PathBuf>,
    /// Display name of the category view.
    pub category: String,
    /// Theme table file, if not using the built-in themes.
    pub theme_file: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/carts"),
            catalog_dir: None,
            category: "Andrew Poultry Farm".to_string(),
            theme_file: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Category name is blank; set SF_CATEGORY")]
    BlankCategory,

    #[error("Data directory {0} exists and is not a directory")]
    DataDirNotADirectory(PathBuf),

    #[error("Catalog directory {0} does not exist")]
    MissingCatalogDir(PathBuf),

    #[error("Theme file {0} does not exist")]
    MissingThemeFile(PathBuf),
}

impl StorefrontConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup on top of the
    /// defaults. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get("SF_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("SF_CATALOG_DIR") {
            config.catalog_dir = Some(PathBuf::from(dir));
        }
        if let Some(category) = get("SF_CATEGORY") {
            config.category = category;
        }
        if let Some(file) = get("SF_THEME_FILE") {
            config.theme_file = Some(PathBuf::from(file));
        }
        config
    }

    /// Check the configuration against the filesystem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.category.trim().is_empty() {
            return Err(ConfigError::BlankCategory);
        }
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(ConfigError::DataDirNotADirectory(self.data_dir.clone()));
        }
        if let Some(dir) = &self.catalog_dir {
            if !dir.is_dir() {
                return Err(ConfigError::MissingCatalogDir(dir.clone()));
            }
        }
        if let Some(file) = &self.theme_file {
            if !file.is_file() {
                return Err(ConfigError::MissingThemeFile(file.clone()));
            }
        }
        Ok(())
    }
}
