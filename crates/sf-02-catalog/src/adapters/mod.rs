//! Catalog source adapters

mod json_dir;
mod static_source;

pub use json_dir::JsonCatalogSource;
pub use static_source::StaticCatalogSource;
