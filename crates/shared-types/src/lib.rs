//! # Shared Types Crate
//!
//! This crate contains the catalog entities consumed by every storefront
//! crate: product identifiers, prices, product records and the ordered
//! per-category catalog.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate catalog types are defined here.
//! - **Read-Only Catalog**: A `Catalog` is immutable once built; the cart
//!   engine only ever reads it.
//! - **Exact Money**: Prices are held in minor units so totals never drift.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
