//! The components module contains all shared components for our app.
//! Components are the building blocks of dioxus apps.
pub mod empty_state;
pub mod floating_cart;
pub mod pico;
pub mod product_list;
