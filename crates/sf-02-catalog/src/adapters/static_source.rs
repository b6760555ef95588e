use async_trait::async_trait;
use sf_01_cart_engine::{CategoryId, CategoryRegistry};
use shared_types::Catalog;
use std::collections::BTreeMap;

use crate::error::CatalogSourceError;
use crate::ports::CatalogSource;

const ANDREW_POULTRY_FARM: &str = "Andrew Poultry Farm";
const ANDREW_POULTRY_FARM_JSON: &str = include_str!("../../catalogs/andrew-poultry-farm.json");

/// Catalogs held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    registry: CategoryRegistry,
    catalogs: BTreeMap<CategoryId, Catalog>,
}

impl StaticCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in farm catalogs shipped with the storefront.
    pub fn farm_defaults() -> Result<Self, CatalogSourceError> {
        let poultry: Catalog = serde_json::from_str(ANDREW_POULTRY_FARM_JSON)
            .map_err(|e| CatalogSourceError::parse("andrew-poultry-farm.json", e))?;
        Self::new().with_catalog(ANDREW_POULTRY_FARM, poultry)
    }

    /// Add the catalog of a category, by display name.
    ///
    /// Passing the same display name again replaces its catalog. A different
    /// display name that normalizes to an id already held is refused, since
    /// both would share one cart slot.
    pub fn with_catalog(
        mut self,
        display_name: &str,
        catalog: Catalog,
    ) -> Result<Self, CatalogSourceError> {
        let id = self
            .registry
            .register(display_name)
            .map_err(|e| CatalogSourceError::InvalidCategory(e.to_string()))?;
        self.catalogs.insert(id, catalog);
        Ok(self)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load_catalog(&self, category: &CategoryId) -> Result<Catalog, CatalogSourceError> {
        self.catalogs
            .get(category)
            .cloned()
            .ok_or_else(|| CatalogSourceError::NotFound(category.to_string()))
    }

    async fn categories(&self) -> Result<Vec<CategoryId>, CatalogSourceError> {
        Ok(self.catalogs.keys().cloned().collect())
    }
}
