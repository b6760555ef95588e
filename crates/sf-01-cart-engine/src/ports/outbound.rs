//! Outbound (Driven) ports for the Cart Engine subsystem.
//!
//! The engine depends on a durable key-value slot store. Keys are category
//! storage keys (`<category>-cart`), values are serialized ledgers.

use crate::domain::StoreError;

/// Durable, category-scoped slot storage.
///
/// Methods take `&self` so one store can back several category sessions
/// through an `Arc`; adapters use interior mutability where needed.
pub trait CartStore: Send + Sync {
    /// Read a slot.
    ///
    /// # Returns
    /// - `Ok(Some(raw))`: slot exists
    /// - `Ok(None)`: slot has never been written or was erased
    /// - `Err`: storage unavailable
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a slot with the full serialized ledger.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a slot. Erasing an absent slot succeeds.
    fn erase(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: CartStore + ?Sized> CartStore for std::sync::Arc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }

    fn erase(&self, key: &str) -> Result<(), StoreError> {
        (**self).erase(key)
    }
}
