//! This crate contains the storefront's domain types and all shared
//! fullstack server functions.

pub mod cart;
#[cfg(not(target_arch = "wasm32"))]
pub mod catalog;
#[cfg(not(target_arch = "wasm32"))]
mod catalog_caching;
pub mod config;
pub mod currency;
pub mod money;
pub mod stats;
pub mod surcharge;

use dioxus::prelude::*;

use cart::Product;
use config::StoreConfig;
use stats::DailyStat;

/// Retrieves the storefront configuration.
///
/// Resolved from the server's environment so that every client shares one
/// set of surcharge rates and no two views can disagree on totals.
// The marker is named explicitly: the default, derived from the function
// name, would collide with the `StoreConfig` import above.
#[server(FetchStoreConfig)]
pub async fn store_config() -> Result<StoreConfig, ServerFnError> {
    Ok(StoreConfig::from_env())
}

/// Retrieves the product listing from the configured catalog provider.
///
/// Listings are served from a short-lived server-side cache so that every
/// client mounting the home screen does not hammer the upstream API.
#[server]
pub async fn products() -> Result<Vec<Product>, ServerFnError> {
    let products = catalog_caching::get_cached_products().await?;
    dioxus_logger::tracing::info!("serving {} catalog products", products.len());
    Ok(products)
}

/// Retrieves daily sales statistics for the statistics screen.
#[server]
pub async fn daily_stats() -> Result<Vec<DailyStat>, ServerFnError> {
    Ok(stats::last_seven_days())
}
