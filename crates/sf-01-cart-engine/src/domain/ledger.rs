//! # Cart Ledger
//!
//! Mapping from product id to a strictly positive quantity.
//!
//! The ledger does not validate ids against the catalog: `add` accepts any
//! id. Ids that are absent from the current catalog ("stale" entries) are kept
//! but contribute nothing to `total_price` or `line_items`.

use serde::{Deserialize, Serialize};
use shared_types::{Catalog, Price, ProductId};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

/// Per-product quantity ledger.
///
/// INVARIANT-1: values are `NonZeroU32`, so a zero quantity cannot be stored;
/// an entry decremented to zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLedger {
    entries: BTreeMap<ProductId, NonZeroU32>,
}

/// One row of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment `id` by one, creating it at 1. Saturates at `u32::MAX`.
    ///
    /// Returns the new quantity.
    pub fn add(&mut self, id: &str) -> u32 {
        let quantity = self
            .entries
            .entry(ProductId::from(id))
            .and_modify(|q| *q = q.saturating_add(1))
            .or_insert(NonZeroU32::MIN);
        quantity.get()
    }

    /// Decrement `id` by one, deleting the entry when it reaches zero.
    ///
    /// No-op for absent ids. Returns the remaining quantity (0 if gone).
    pub fn remove(&mut self, id: &str) -> u32 {
        let Some(current) = self.entries.get(id).copied() else {
            return 0;
        };

        match NonZeroU32::new(current.get() - 1) {
            Some(next) => {
                if let Some(slot) = self.entries.get_mut(id) {
                    *slot = next;
                }
                next.get()
            }
            None => {
                self.entries.remove(id);
                0
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored quantity, or 0 if absent.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.entries.get(id).map_or(0, |q| q.get())
    }

    /// Sum of all quantities, stale entries included.
    pub fn total_item_count(&self) -> u64 {
        self.entries.values().map(|q| u64::from(q.get())).sum()
    }

    /// Sum of `price × quantity` over the catalog's products.
    pub fn total_price(&self, catalog: &Catalog) -> Price {
        catalog
            .iter()
            .map(|product| product.price.times(self.quantity_of(product.id.as_str())))
            .sum()
    }

    /// Order summary rows in catalog order, for products with quantity > 0.
    pub fn line_items(&self, catalog: &Catalog) -> Vec<CartLine> {
        catalog
            .iter()
            .filter_map(|product| {
                let quantity = self.quantity_of(product.id.as_str());
                (quantity > 0).then(|| CartLine {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    quantity,
                    unit_price: product.price,
                    line_total: product.price.times(quantity),
                })
            })
            .collect()
    }

    /// Ledger ids that the catalog does not know about.
    pub fn stale_entries<'a>(&'a self, catalog: &Catalog) -> Vec<&'a ProductId> {
        self.entries
            .keys()
            .filter(|id| !catalog.contains(id.as_str()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.entries.iter().map(|(id, q)| (id, q.get()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
