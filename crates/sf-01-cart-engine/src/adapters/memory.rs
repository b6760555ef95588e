use crate::domain::StoreError;
use crate::ports::CartStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory slot store for tests and ephemeral sessions.
///
/// Can be switched to "unavailable" to simulate a disabled or full
/// browser storage: every call then fails with `StoreError::Unavailable`.
#[derive(Debug)]
pub struct InMemoryCartStore {
    slots: RwLock<HashMap<String, String>>,
    available: AtomicBool,
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.write().insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Raw slot content, bypassing the availability switch.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots.read().get(key).cloned()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store disabled".to_string()))
        }
    }
}

impl CartStore for InMemoryCartStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        Ok(self.slots.read().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.slots.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.slots.write().remove(key);
        Ok(())
    }
}
