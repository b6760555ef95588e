//! Metrics hooks for cart operations
//!
//! Counters for ledger mutations, persistence writes and checkout cycles.
//! Persistence failures are swallowed on the intent path, so these counters
//! are the only place they remain visible.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one cart engine.
#[derive(Debug, Default)]
pub struct CartMetrics {
    /// Ledger mutations applied (add/remove/clear, checkout reset)
    pub mutations: AtomicU64,
    /// Successful slot writes
    pub writes: AtomicU64,
    /// Failed slot writes (swallowed)
    pub write_failures: AtomicU64,
    /// Hydrations that found a corrupt slot and started empty
    pub hydration_recoveries: AtomicU64,
    /// Checkouts started
    pub checkouts_started: AtomicU64,
    /// Checkout cycles that reached the reset
    pub checkouts_completed: AtomicU64,
}

impl CartMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_mutation(&self) {
        self.mutations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of a slot write.
    pub fn record_write(&self, ok: bool) {
        if ok {
            self.writes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.write_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_hydration_recovery(&self) {
        self.hydration_recoveries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_checkout_started(&self) {
        self.checkouts_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_checkout_completed(&self) {
        self.checkouts_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CartMetricsSnapshot {
        CartMetricsSnapshot {
            mutations: self.mutations.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
            hydration_recoveries: self.hydration_recoveries.load(Ordering::Relaxed),
            checkouts_started: self.checkouts_started.load(Ordering::Relaxed),
            checkouts_completed: self.checkouts_completed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of `CartMetrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartMetricsSnapshot {
    pub mutations: u64,
    pub writes: u64,
    pub write_failures: u64,
    pub hydration_recoveries: u64,
    pub checkouts_started: u64,
    pub checkouts_completed: u64,
}
