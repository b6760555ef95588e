//! Cart Engine
//!
//! Orchestrates the ledger, the checkout machine and the storage port for a
//! single category view. Every ledger mutation is followed by a full-ledger
//! write to the category slot before the method returns (INVARIANT-2).

use serde::Serialize;
use shared_types::{Catalog, Price, ProductId};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{
    decode_ledger, encode_ledger, CartLedger, CartLine, CategoryId, CheckoutMachine,
    CheckoutState, FireOutcome, ScheduledTransition, TransitionTicket,
};
use crate::metrics::CartMetrics;
use crate::ports::{CartApi, CartStore};

/// Render-ready view of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub category: CategoryId,
    pub state: CheckoutState,
    pub total_items: u64,
    pub total_price: Price,
    pub lines: Vec<CartLine>,
}

/// Cart engine for one category.
pub struct CartEngine<S: CartStore> {
    category: CategoryId,
    storage_key: String,
    catalog: Arc<Catalog>,
    ledger: CartLedger,
    checkout: CheckoutMachine,
    store: S,
    metrics: Arc<CartMetrics>,
}

impl<S: CartStore> CartEngine<S> {
    /// Mount a category view: hydrate the ledger from its slot.
    ///
    /// - Slot absent or store unavailable: start empty.
    /// - Slot corrupt: erase it and start empty.
    /// - Slot valid: adopt it and write it back in canonical form.
    pub fn mount(category: CategoryId, catalog: Arc<Catalog>, store: S) -> Self {
        let storage_key = category.storage_key();
        let mut engine = Self {
            category,
            storage_key,
            catalog,
            ledger: CartLedger::new(),
            checkout: CheckoutMachine::new(),
            store,
            metrics: Arc::new(CartMetrics::new()),
        };

        if let Some(ledger) = engine.hydrate() {
            engine.ledger = ledger;
            engine.persist();
        }
        engine
    }

    fn hydrate(&self) -> Option<CartLedger> {
        let raw = match self.store.load(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(category = %self.category, "[sf-01] no saved cart");
                return None;
            }
            Err(e) => {
                warn!(category = %self.category, error = %e, "[sf-01] cart storage unavailable, starting empty");
                return None;
            }
        };

        match decode_ledger(&raw) {
            Ok(ledger) => {
                let stale = ledger.stale_entries(&self.catalog).len();
                info!(
                    category = %self.category,
                    items = ledger.total_item_count(),
                    stale,
                    "[sf-01] cart hydrated"
                );
                Some(ledger)
            }
            Err(e) => {
                warn!(category = %self.category, error = %e, "[sf-01] failed to parse saved cart, discarding");
                self.metrics.record_hydration_recovery();
                if let Err(e) = self.store.erase(&self.storage_key) {
                    warn!(category = %self.category, error = %e, "[sf-01] could not erase corrupt cart slot");
                }
                None
            }
        }
    }

    /// Write the full ledger to the category slot. Failures are logged and
    /// counted, never returned.
    fn persist(&self) {
        let result = encode_ledger(&self.ledger)
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                self.store
                    .save(&self.storage_key, &raw)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => self.metrics.record_write(true),
            Err(e) => {
                self.metrics.record_write(false);
                warn!(category = %self.category, error = %e, "[sf-01] failed to persist cart");
            }
        }
    }

    fn mutated(&self) {
        self.metrics.record_mutation();
        self.persist();
    }

    /// Fire a scheduled continuation.
    ///
    /// Returns the next continuation to schedule, if any. Stale tickets are
    /// ignored.
    pub fn fire(&mut self, ticket: TransitionTicket) -> Option<ScheduledTransition> {
        match self.checkout.fire(ticket) {
            FireOutcome::Confirmed(next) => {
                info!(category = %self.category, "[sf-01] order confirmed");
                Some(next)
            }
            FireOutcome::ResetRequired => {
                self.ledger.clear();
                self.mutated();
                self.metrics.record_checkout_completed();
                info!(category = %self.category, "[sf-01] cart reset after checkout");
                None
            }
            FireOutcome::Ignored => {
                debug!(category = %self.category, kind = ?ticket.kind(), "[sf-01] ignoring stale transition");
                None
            }
        }
    }

    /// Abandon an in-flight checkout; the ledger is kept.
    ///
    /// Returns true if a checkout was in progress.
    pub fn cancel_pending(&mut self) -> bool {
        let cancelled = self.checkout.cancel_pending();
        if cancelled {
            info!(category = %self.category, "[sf-01] pending checkout cancelled");
        }
        cancelled
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            category: self.category.clone(),
            state: self.checkout.state(),
            total_items: self.ledger.total_item_count(),
            total_price: self.ledger.total_price(&self.catalog),
            lines: self.ledger.line_items(&self.catalog),
        }
    }

    pub fn line_items(&self) -> Vec<CartLine> {
        self.ledger.line_items(&self.catalog)
    }

    /// Ledger ids absent from the current catalog.
    pub fn stale_entries(&self) -> Vec<&ProductId> {
        self.ledger.stale_entries(&self.catalog)
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn metrics(&self) -> Arc<CartMetrics> {
        Arc::clone(&self.metrics)
    }
}

impl<S: CartStore> CartApi for CartEngine<S> {
    fn add(&mut self, product_id: &str) {
        let quantity = self.ledger.add(product_id);
        debug!(category = %self.category, product_id, quantity, "[sf-01] add");
        self.mutated();
    }

    fn remove(&mut self, product_id: &str) {
        let quantity = self.ledger.remove(product_id);
        debug!(category = %self.category, product_id, quantity, "[sf-01] remove");
        self.mutated();
    }

    fn clear(&mut self) {
        self.ledger.clear();
        debug!(category = %self.category, "[sf-01] clear");
        self.mutated();
    }

    fn checkout(&mut self) -> Option<ScheduledTransition> {
        let total_items = self.ledger.total_item_count();
        let scheduled = self.checkout.begin(total_items);
        match &scheduled {
            Some(_) => {
                self.metrics.record_checkout_started();
                info!(
                    category = %self.category,
                    items = total_items,
                    total = %self.ledger.total_price(&self.catalog),
                    "[sf-01] submitting order"
                );
            }
            None => debug!(
                category = %self.category,
                state = ?self.checkout.state(),
                items = total_items,
                "[sf-01] checkout ignored"
            ),
        }
        scheduled
    }

    fn quantity_of(&self, product_id: &str) -> u32 {
        self.ledger.quantity_of(product_id)
    }

    fn total_item_count(&self) -> u64 {
        self.ledger.total_item_count()
    }

    fn total_price(&self) -> Price {
        self.ledger.total_price(&self.catalog)
    }

    fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }
}
