//! Outbound Ports (Driven Ports)

use async_trait::async_trait;
use sf_01_cart_engine::CategoryId;
use shared_types::Catalog;

use crate::error::CatalogSourceError;

/// Read-only provider of category catalogs.
///
/// A loaded catalog is immutable for the lifetime of the category view that
/// receives it.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the ordered product list of one category.
    async fn load_catalog(&self, category: &CategoryId) -> Result<Catalog, CatalogSourceError>;

    /// Category ids this source can serve, sorted.
    async fn categories(&self) -> Result<Vec<CategoryId>, CatalogSourceError>;
}
