//! The product catalog grid: fetches the listing and hands snapshots to the
//! cart on "Add to Cart".

use crate::cart_state::CartState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use api::cart::Product;
use dioxus::prelude::*;

const FAVORITE_ICON: &str = "https://img.icons8.com/flat_round/64/000000/hearts.png";

/// One card in the catalog grid.
#[component]
fn ProductCard(product: Product) -> Element {
    let mut cart_state = use_context::<CartState>();

    let price_label = product.product_price.to_string_with_symbol();
    let snapshot = product.clone();

    rsx! {
        div {
            class: "product-card",
            img {
                class: "favorite-icon",
                src: FAVORITE_ICON,
                alt: "Favorite",
            }
            img {
                class: "product-image",
                src: "{product.image}",
                alt: "{product.product_name}",
            }
            div {
                class: "product-info",
                p {
                    class: "product-name",
                    title: "{product.product_name}",
                    "{product.product_name}"
                }
                p { class: "product-price", "{price_label}" }
                Button {
                    on_click: move |_| cart_state.add_item(snapshot.clone()),
                    "Add to Cart"
                }
            }
        }
    }
}

#[component]
pub fn ProductList() -> Element {
    let mut products = use_resource(move || async move { api::products().await });

    rsx! {
        match &*products.read() {
            // The listing has not arrived yet.
            None => rsx! {
                Card {
                    p { "Loading products..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to fetch products: {e}" }
                    button {
                        onclick: move |_| products.restart(),
                        "Retry"
                    }
                }
            },
            Some(Ok(listing)) => rsx! {
                div {
                    class: "product-grid",
                    for product in listing.iter() {
                        ProductCard {
                            key: "{product.product_id}",
                            product: product.clone(),
                        }
                    }
                }
            },
        }
    }
}
