//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::components::floating_cart::FloatingCart;
use crate::components::product_list::ProductList;
use dioxus::prelude::*;

/// The cashier's main screen: the catalog grid with the mini-cart floating
/// on top of it.
#[component]
pub fn HomeScreen() -> Element {
    rsx! {
        div {
            class: "home-screen",
            ProductList {}
            FloatingCart {}
        }
    }
}
