use async_trait::async_trait;
use sf_01_cart_engine::CategoryId;
use shared_types::Catalog;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::CatalogSourceError;
use crate::ports::CatalogSource;

/// Catalogs read from `<dir>/<category-id>.json`.
///
/// Files are read on every `load_catalog`; callers cache the result for the
/// lifetime of a view.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    dir: PathBuf,
}

impl JsonCatalogSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn catalog_path(&self, category: &CategoryId) -> PathBuf {
        self.dir.join(format!("{}.json", category.as_str()))
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load_catalog(&self, category: &CategoryId) -> Result<Catalog, CatalogSourceError> {
        let path = self.catalog_path(category);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CatalogSourceError::NotFound(category.to_string()))
            }
            Err(e) => return Err(CatalogSourceError::io(path.display(), e)),
        };

        let catalog: Catalog =
            serde_json::from_str(&raw).map_err(|e| CatalogSourceError::parse(path.display(), e))?;
        debug!(
            "[sf-02] loaded {} products for {} from {}",
            catalog.len(),
            category,
            path.display()
        );
        Ok(catalog)
    }

    async fn categories(&self) -> Result<Vec<CategoryId>, CatalogSourceError> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| CatalogSourceError::io(self.dir.display(), e))?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CatalogSourceError::io(self.dir.display(), e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match CategoryId::from_display_name(stem) {
                Ok(id) if id.as_str() == stem => ids.push(id),
                _ => warn!("[sf-02] skipping catalog file with non-canonical name: {}", path.display()),
            }
        }
        ids.sort();
        Ok(ids)
    }
}
