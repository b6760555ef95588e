//! # Farm Storefront Runtime
//!
//! Terminal front-end for one farm category: the product list, the
//! "Your Order" panel and the simulated checkout.
//!
//! ## Modular Structure
//!
//! - `config/` - `StorefrontConfig` defaults, env overrides and validation
//! - `commands/` - terminal command parsing
//! - `render/` - plain-text product list and order summary
//! - `app/` - wiring of catalog, theme and cart session
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`storefront-telemetry`)
//! 2. Load and validate configuration
//! 3. Load the category catalog and theme
//! 4. Mount the cart session (hydrates the saved cart)
//! 5. Run the command loop until `quit` or Ctrl+C

pub mod app;
pub mod commands;
pub mod config;
pub mod render;

pub use app::{Reply, StorefrontApp};
pub use commands::{Command, CommandError};
pub use config::{ConfigError, StorefrontConfig};
