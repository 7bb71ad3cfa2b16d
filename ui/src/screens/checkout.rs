//=============================================================================
// File: src/screens/checkout.rs
//=============================================================================
use crate::app_state::AppState;
use crate::cart_state::CartState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Modal;
use crate::Screen;
use dioxus::prelude::*;

/// The checkout screen: the full order summary, the price breakdown with
/// surcharges, and the place-order action.
#[component]
pub fn CheckoutScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut cart_state = use_context::<CartState>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let order_placed = use_signal(|| false);

    let item_count = cart_state.item_count();

    if item_count == 0 && !order_placed() {
        return rsx! {
            EmptyState {
                title: "Your cart is empty",
                description: "Add something from the catalog to get started.",
                icon: rsx! { span { "🛒" } },
                primary_action: rsx! {
                    Button {
                        on_click: move |_| active_screen.set(Screen::Home),
                        "Continue Shopping"
                    }
                },
            }
        };
    }

    // The store exposes the raw subtotal only; tax and shipping are applied
    // here, through the one shared schedule.
    let schedule = app_state.config.surcharges;
    let summary = schedule.summarize(cart_state.total_price());
    let grand_total = summary.grand_total.to_string_with_symbol();

    rsx! {
        OrderPlacedModal {
            is_open: order_placed,
        }

        Card {
            header {
                h3 { style: "margin-bottom: 0;", "Checkout" }
                small { "({item_count} items)" }
            }

            h4 { "Order Summary" }
            for entry in cart_state.entries() {
                SummaryRow {
                    key: "{entry.product.product_id}",
                    entry,
                }
            }

            h4 { "Price Details" }
            table {
                tbody {
                    tr {
                        td { "Subtotal" }
                        td { class: "amount-cell", "{summary.subtotal.to_string_with_symbol()}" }
                    }
                    tr {
                        td { "Shipping" }
                        td { class: "amount-cell", "{summary.shipping.to_string_with_symbol()}" }
                    }
                    tr {
                        td { "Tax ({schedule.tax_percent_label()})" }
                        td { class: "amount-cell", "{summary.tax.to_string_with_symbol()}" }
                    }
                    tr {
                        td { strong { "Total" } }
                        td { class: "amount-cell", strong { "{grand_total}" } }
                    }
                }
            }

            footer {
                PlaceOrderButton {
                    label: "Place Order ({grand_total})",
                    order_placed,
                }
            }
        }
    }
}

/// One line of the order summary with quantity controls.
#[component]
fn SummaryRow(entry: api::cart::CartEntry) -> Element {
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

/// Finalizes the order: logs it, then atomically empties the cart so that no
/// entry survives the placement.
#[component]
fn PlaceOrderButton(label: String, order_placed: Signal<bool>) -> Element {
    let app_state = use_context::<AppState>();
    let mut cart_state = use_context::<CartState>();
    let mut order_placed = order_placed;

    rsx! {
        Button {
            on_click: move |_| {
                let total = app_state
                    .config
                    .surcharges
                    .summarize(cart_state.total_price())
                    .grand_total;
                dioxus_logger::tracing::info!(
                    "order placed: {} items, {}",
                    cart_state.item_count(),
                    total.to_string_with_code(),
                );
                cart_state.clear_cart();
                order_placed.set(true);
            },
            "{label}"
        }
    }
}

#[component]
fn OrderPlacedModal(is_open: Signal<bool>) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut is_open = is_open;

    rsx! {
        Modal {
            is_open,
            title: "Order placed",
            p { "Order placed successfully!" }
            footer {
                Button {
                    on_click: move |_| {
                        is_open.set(false);
                        active_screen.set(Screen::Home);
                    },
                    "Back to the catalog"
                }
            }
        }
    }
}
