//! Storage Adapters
//!
//! Implementations of the `CartStore` trait.

mod file;
mod memory;

pub use file::FileCartStore;
pub use memory::InMemoryCartStore;
