//! Ports Layer
//!
//! - `outbound`: `CatalogSource`, the driven port the runtime loads catalogs through

pub mod outbound;

pub use outbound::CatalogSource;
