//! Cart Engine Service
//!
//! - `engine`: synchronous `CartEngine` implementing `CartApi`
//! - `session`: tokio driver owning an engine and its scheduled transitions

mod engine;
mod session;

pub use engine::{CartEngine, CartSnapshot};
pub use session::CartSession;
