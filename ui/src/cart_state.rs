//! The reactive cart store: the single authoritative holder of cart
//! contents, shared with every view surface through the Dioxus context.

use api::cart::Cart;
use api::cart::CartEntry;
use api::cart::Product;
use api::cart::ProductId;
use api::money::Money;
use dioxus::prelude::*;

/// A `Copy` handle over the cart signal.
///
/// Views receive this through `use_context` and never touch the underlying
/// collection directly: all mutation is funneled through the methods below,
/// on the single UI event loop, so there is exactly one writer. Writing
/// through the signal marks every subscribed view dirty before the mutating
/// call returns, so no consumer can observe a torn update.
#[derive(Clone, Copy)]
pub struct CartState {
    cart: Signal<Cart>,
}

impl CartState {
    pub fn new(cart: Signal<Cart>) -> Self {
        Self { cart }
    }

    // --- Mutations ---

    /// Adds a product snapshot to the cart, merging with an existing entry
    /// for the same product. A malformed snapshot is rejected and logged
    /// rather than stored.
    pub fn add_item(&mut self, product: Product) {
        let result = self.cart.write().add(product);
        if let Err(e) = result {
            dioxus_logger::tracing::warn!("rejected cart add: {e}");
        }
    }

    /// Removes the entry for `product_id`; a missing key is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.cart.write().remove(product_id);
    }

    /// Replaces an entry's quantity; zero or below removes the entry.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.cart.write().set_quantity(product_id, quantity);
    }

    /// Empties the cart. Called after an order is placed.
    pub fn clear_cart(&mut self) {
        self.cart.write().clear();
    }

    // --- Reads (subscribe the calling view) ---

    /// The current entries in insertion order.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.cart.read().iter().cloned().collect()
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.cart.read().len()
    }

    /// The raw subtotal, recomputed from current entries on every call.
    pub fn total_price(&self) -> Money {
        self.cart.read().total()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.read().is_empty()
    }
}
