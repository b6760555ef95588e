//! # Inbound Port - CartApi
//!
//! Primary driving port used by the presentation layer.
//!
//! All methods are synchronous. Mutating intents never fail: storage errors
//! are logged and swallowed, unknown ids are no-ops, and checkout
//! re-entrancy is ignored.

use crate::domain::{CheckoutState, ScheduledTransition};
use shared_types::Price;

/// Presentation-facing cart API.
///
/// # Example
///
/// ```rust,ignore
/// use sf_01_cart_engine::CartApi;
///
/// fn on_plus_clicked(cart: &mut impl CartApi, product_id: &str) {
///     cart.add(product_id);
///     render_badge(cart.quantity_of(product_id), cart.total_item_count());
/// }
/// ```
pub trait CartApi {
    /// Increment a product's quantity by one.
    fn add(&mut self, product_id: &str);

    /// Decrement a product's quantity by one; no-op if absent.
    fn remove(&mut self, product_id: &str);

    /// Empty the cart.
    fn clear(&mut self);

    /// Start checkout.
    ///
    /// Returns the continuation the caller must schedule, or `None` if the
    /// cart is empty or a checkout is already in progress.
    fn checkout(&mut self) -> Option<ScheduledTransition>;

    /// Quantity of a product, 0 if absent.
    fn quantity_of(&self, product_id: &str) -> u32;

    /// Sum of all ledger quantities.
    fn total_item_count(&self) -> u64;

    /// Sum of price × quantity over the current catalog.
    fn total_price(&self) -> Price;

    /// Current checkout state.
    fn checkout_state(&self) -> CheckoutState;
}
