//! # Farm Storefront Test Suite
//!
//! Cross-crate flows that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── cart_flows.rs       # catalog source + engine + file store
//!     ├── checkout_flows.rs   # session timers against real storage
//!     └── runtime_flows.rs    # terminal commands end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sf-tests
//! cargo test -p sf-tests integration::checkout_flows
//! ```

pub mod integration;
