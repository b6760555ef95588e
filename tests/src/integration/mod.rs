//! Cross-crate integration flows.

pub mod cart_flows;
pub mod checkout_flows;
pub mod runtime_flows;

/// Shared fixtures.
#[cfg(test)]
pub(crate) mod fixtures {
    use sf_01_cart_engine::CategoryId;
    use sf_02_catalog::{CatalogSource, StaticCatalogSource};
    use shared_types::Catalog;
    use std::sync::Arc;

    pub const POULTRY: &str = "Andrew Poultry Farm";
    pub const POULTRY_SLOT: &str = "andrew-poultry-farm-cart";

    pub fn poultry() -> CategoryId {
        CategoryId::from_display_name(POULTRY).unwrap()
    }

    pub async fn poultry_catalog() -> Arc<Catalog> {
        let source = StaticCatalogSource::farm_defaults().unwrap();
        Arc::new(source.load_catalog(&poultry()).await.unwrap())
    }
}
