//! Domain Layer
//!
//! - `theme`: per-category presentation theme table

pub mod theme;

pub use theme::{CategoryTheme, ThemeTable};
