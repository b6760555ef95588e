//! # Domain Layer - Cart Engine Subsystem
//!
//! Pure business logic: no I/O, no timers.
//!
//! ## Components
//!
//! - `category`: CategoryId value object and collision-checking registry
//! - `ledger`: CartLedger quantity map and derived totals
//! - `checkout`: CheckoutMachine with generation-stamped transition tickets
//! - `persistence`: serialized slot format for the ledger
//! - `errors`: CartError and StoreError enumerations

pub mod category;
pub mod checkout;
pub mod errors;
pub mod ledger;
pub mod persistence;

pub use category::*;
pub use checkout::*;
pub use errors::*;
pub use ledger::*;
pub use persistence::*;
