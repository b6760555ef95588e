//! Plain-text rendering of the product list and the order summary.

use sf_01_cart_engine::{CartSnapshot, CheckoutState};
use sf_02_catalog::CategoryTheme;
use shared_types::Catalog;

/// Label of the checkout action in each state.
pub fn checkout_label(state: CheckoutState) -> &'static str {
    match state {
        CheckoutState::Idle => "Proceed to Checkout",
        CheckoutState::Submitting => "Processing Order...",
        CheckoutState::Confirmed => "Order Complete!",
    }
}

/// Product cards in catalog order, with the in-cart quantity of each.
pub fn render_products(
    catalog: &Catalog,
    snapshot: &CartSnapshot,
    theme: &CategoryTheme,
) -> String {
    let mut out = String::new();
    for product in catalog {
        let quantity = snapshot
            .lines
            .iter()
            .find(|line| line.product_id == product.id)
            .map_or(0, |line| line.quantity);

        let picture = if product.image.is_some() { "▣" } else { theme.icon.as_str() };
        out.push_str(&format!(
            "{picture} [{id}] {name}  ${price} / {unit}\n",
            id = product.id,
            name = product.name,
            price = product.price,
            unit = product.unit,
        ));
        if !product.description.is_empty() {
            out.push_str(&format!("    {}\n", product.description));
        }
        let stock = if product.in_stock { "In Stock" } else { "Out of Stock" };
        if quantity > 0 {
            out.push_str(&format!("    {stock} · in cart: {quantity}\n"));
        } else {
            out.push_str(&format!("    {stock}\n"));
        }
    }
    out
}

/// The "Your Order" panel.
pub fn render_summary(snapshot: &CartSnapshot, display_name: &str, theme: &CategoryTheme) -> String {
    let mut out = format!(
        "── Your Order ── {} {} · {} items\n",
        theme.icon, display_name, snapshot.total_items
    );

    if snapshot.total_items == 0 {
        out.push_str("Your cart is empty\n");
        out.push_str("Add items from the list below\n");
        return out;
    }

    for line in &snapshot.lines {
        out.push_str(&format!("{} × {}  ${}\n", line.quantity, line.name, line.line_total));
    }
    out.push_str(&format!("Total: ${}\n", snapshot.total_price));
    out.push_str(&format!("[ {} ]\n", checkout_label(snapshot.state)));
    if !snapshot.state.is_busy() {
        out.push_str("  (clear to empty the cart)\n");
    }
    out
}
