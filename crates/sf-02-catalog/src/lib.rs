//! # Catalog Provider Subsystem
//!
//! Supplies the read-only product list of each category page and the
//! presentation theme of each category. The cart engine only ever receives
//! a finished `Catalog`; it never talks to a source directly.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Catalog Provider                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  ports::CatalogSource (outbound, async)                  │
//! │     ├── adapters::StaticCatalogSource  (built-in data)   │
//! │     └── adapters::JsonCatalogSource    (<dir>/<id>.json) │
//! │                                                          │
//! │  domain::ThemeTable  CategoryId → CategoryTheme          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog File Format
//!
//! One JSON array of products per category, named after the category id:
//!
//! ```text
//! catalogs/andrew-poultry-farm.json
//! [{"id":"p1","name":"Free-Range Whole Chicken","price":12.99,"unit":"kg","inStock":true}, ...]
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

pub use adapters::{JsonCatalogSource, StaticCatalogSource};
pub use domain::{CategoryTheme, ThemeTable};
pub use error::CatalogSourceError;
pub use ports::CatalogSource;
