//! Cart Session
//!
//! Drives a `CartEngine` on the tokio runtime. Checkout continuations run on
//! a spawned task that sleeps for each scheduled delay and fires the ticket.
//! Every state change is published on a `watch` channel so views can render
//! the latest snapshot.
//!
//! Dropping the session (or calling `shutdown`) aborts the pending task, so
//! no continuation touches a ledger that is no longer on screen.

use parking_lot::Mutex;
use shared_types::Catalog;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::engine::{CartEngine, CartSnapshot};
use crate::domain::{CategoryId, ScheduledTransition};
use crate::metrics::CartMetrics;
use crate::ports::{CartApi, CartStore};

type SharedEngine<S> = Arc<Mutex<CartEngine<S>>>;

/// A mounted category view with its checkout timer.
pub struct CartSession<S: CartStore + 'static> {
    engine: SharedEngine<S>,
    updates: Arc<watch::Sender<CartSnapshot>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<S: CartStore + 'static> CartSession<S> {
    /// Mount the engine and open the snapshot channel.
    pub fn mount(category: CategoryId, catalog: Arc<Catalog>, store: S) -> Self {
        let engine = CartEngine::mount(category, catalog, store);
        let (updates, _) = watch::channel(engine.snapshot());
        Self {
            engine: Arc::new(Mutex::new(engine)),
            updates: Arc::new(updates),
            pending: Mutex::new(None),
        }
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.engine.lock().snapshot()
    }

    pub fn metrics(&self) -> Arc<CartMetrics> {
        self.engine.lock().metrics()
    }

    pub fn add(&self, product_id: &str) {
        self.apply(|engine| engine.add(product_id));
    }

    pub fn remove(&self, product_id: &str) {
        self.apply(|engine| engine.remove(product_id));
    }

    pub fn clear(&self) {
        self.apply(|engine| engine.clear());
    }

    /// Start a checkout cycle.
    ///
    /// Returns false when the intent was ignored (empty cart or a cycle is
    /// already running). Must be called from within a tokio runtime.
    pub fn checkout(&self) -> bool {
        let Some(first) = self.apply(|engine| engine.checkout()) else {
            return false;
        };

        let handle = tokio::spawn(drive(
            Arc::clone(&self.engine),
            Arc::clone(&self.updates),
            first,
        ));
        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
        true
    }

    /// Return the engine to `Idle` and abort the checkout timer.
    ///
    /// The generation is bumped under the engine lock before the task is
    /// aborted, so a continuation that already woke up fires a stale ticket.
    pub fn shutdown(&self) {
        if self.apply(|engine| engine.cancel_pending()) {
            info!("[sf-01] session shut down mid-checkout");
        }
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    fn apply<R>(&self, f: impl FnOnce(&mut CartEngine<S>) -> R) -> R {
        let mut engine = self.engine.lock();
        let result = f(&mut engine);
        self.updates.send_replace(engine.snapshot());
        result
    }
}

impl<S: CartStore + 'static> Drop for CartSession<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

/// Sleep through each scheduled delay and fire its ticket until the cycle
/// schedules nothing further.
async fn drive<S: CartStore + 'static>(
    engine: SharedEngine<S>,
    updates: Arc<watch::Sender<CartSnapshot>>,
    mut next: ScheduledTransition,
) {
    loop {
        tokio::time::sleep(next.delay).await;

        let following = {
            let mut engine = engine.lock();
            let following = engine.fire(next.ticket);
            updates.send_replace(engine.snapshot());
            following
        };

        match following {
            Some(transition) => next = transition,
            None => break,
        }
    }
    debug!("[sf-01] checkout driver finished");
}
