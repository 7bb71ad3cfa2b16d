//! The floating mini-cart overlay shown on top of the catalog.
//!
//! Collapsed, it is a one-line summary (count + running total); expanded, it
//! lists every entry with quantity controls. It renders nothing at all while
//! the cart is empty.

use crate::cart_state::CartState;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn FloatingCart() -> Element {
    let cart_state = use_context::<CartState>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut is_expanded = use_signal(|| false);

    // Reading the count subscribes this component to every cart mutation.
    let item_count = cart_state.item_count();
    if item_count == 0 {
        return rsx! {};
    }

    let total_label = cart_state.total_price().to_string_with_symbol();

    rsx! {
        div {
            class: "floating-cart",
            div {
                class: "floating-cart-header",
                onclick: move |_| is_expanded.toggle(),
                strong { "Cart ({item_count} items)" }
                strong { class: "cart-total", "{total_label}" }
            }

            if is_expanded() {
                div {
                    class: "floating-cart-items",
                    for entry in cart_state.entries() {
                        CartRow {
                            key: "{entry.product.product_id}",
                            entry,
                        }
                    }
                }
                button {
                    class: "floating-cart-checkout",
                    onclick: move |_| active_screen.set(Screen::Checkout),
                    "Checkout ({total_label})"
                }
            }
        }
    }
}

/// One entry row inside the expanded mini-cart.
#[component]
fn CartRow(entry: api::cart::CartEntry) -> Element {
    let mut cart_state = use_context::<CartState>();

    let id = entry.product.product_id;
    let quantity = entry.quantity;
    let line_total = entry.line_total().to_string_with_symbol();

    rsx! {
        div {
            class: "cart-row",
            img {
                class: "cart-row-image",
                src: "{entry.product.image}",
                alt: "{entry.product.product_name}",
            }
            div {
                class: "cart-row-info",
                p { class: "cart-row-name", "{entry.product.product_name}" }
                p { class: "cart-row-price", "{line_total}" }
                div {
                    class: "quantity-control",
                    button {
                        class: "quantity-button",
                        onclick: move |_| cart_state.update_quantity(id, quantity as i64 - 1),
                        "−"
                    }
                    span { class: "quantity", "{quantity}" }
                    button {
                        class: "quantity-button",
                        onclick: move |_| cart_state.update_quantity(id, quantity as i64 + 1),
                        "+"
                    }
                }
            }
            button {
                class: "remove-button",
                "aria-label": "Remove from cart",
                onclick: move |_| cart_state.remove_item(id),
                "×"
            }
        }
    }
}
