//! # Cart Engine Subsystem
//!
//! **Subsystem ID:** 1
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Owns the per-category shopping cart: the quantity ledger, its
//! synchronization with persisted storage, the derived totals and the
//! simulated checkout state machine.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | No ledger entry with quantity <= 0 | `domain/ledger.rs` - `NonZeroU32` values |
//! | INVARIANT-2 | Every mutation is persisted before the next intent | `service/engine.rs` - `persist()` |
//! | INVARIANT-3 | At most one checkout in flight | `domain/checkout.rs` - `begin()` guard |
//! | INVARIANT-4 | Stale continuations never fire | `domain/checkout.rs` - generation check |
//! | INVARIANT-5 | Two categories never share a slot | `domain/category.rs` - `CategoryRegistry` |
//!
//! ## Checkout Cycle
//!
//! ```text
//! [IDLE] ──checkout (items > 0)──→ [SUBMITTING] ──2000 ms──→ [CONFIRMED]
//!   ↑                                    │                         │
//!   └──────── cancel_pending ────────────┘                         │
//!   └──────────────── 3000 ms: clear + persist ────────────────────┘
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - InMemoryCartStore, FileCartStore                   │
//! │  service/session.rs - tokio driver for scheduled transitions    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - CartApi trait                              │
//! │  ports/outbound.rs - CartStore trait                            │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/category.rs    - CategoryId, CategoryRegistry           │
//! │  domain/ledger.rs      - CartLedger, CartLine                   │
//! │  domain/checkout.rs    - CheckoutMachine, ScheduledTransition   │
//! │  domain/persistence.rs - ledger slot codec                      │
//! │  domain/errors.rs      - CartError, StoreError                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sf_01_cart_engine::{CartSession, CategoryId, InMemoryCartStore};
//! use std::sync::Arc;
//!
//! let category = CategoryId::from_display_name("Andrew Poultry Farm")?;
//! let session = CartSession::mount(category, catalog, Arc::new(InMemoryCartStore::new()));
//! session.add("p1");
//! session.checkout();
//! let mut updates = session.subscribe();
//! updates.changed().await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{FileCartStore, InMemoryCartStore};
pub use domain::*;
pub use metrics::{CartMetrics, CartMetricsSnapshot};
pub use ports::{CartApi, CartStore};
pub use service::{CartEngine, CartSession, CartSnapshot};
