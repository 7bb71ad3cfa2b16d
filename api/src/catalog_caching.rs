//! Handles the caching logic for external catalog provider data.

use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use dioxus::prelude::ServerFnError;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::cart::Product;
use crate::catalog::dummy_json::DummyJson;
use crate::catalog::fake_store::FakeStore;
use crate::catalog::CatalogProvider;
use crate::catalog::CatalogProviderKind;

#[derive(Clone, Debug)]
struct CachedCatalog {
    products: Vec<Product>,
    last_fetched: Instant,
}

/// Retrieves the product listing, using a lazy, time-based cache.
///
/// This function acts as a gatekeeper to the underlying catalog provider. It
/// only calls the provider when the cache is empty or older than the defined
/// `CACHE_DURATION`.
pub async fn get_cached_products() -> Result<Vec<Product>, ServerFnError> {
    static CACHE: OnceCell<Arc<RwLock<Option<CachedCatalog>>>> = OnceCell::const_new();
    const CACHE_DURATION: Duration = Duration::from_secs(60);

    let cache_lock = CACHE
        .get_or_init(|| async { Arc::new(RwLock::new(None)) })
        .await;

    // Check if a valid, non-stale cache entry exists first with a read lock.
    let read_lock = cache_lock.read().await;
    if let Some(cache) = &*read_lock {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.products.clone());
        }
    }
    drop(read_lock); // Release read lock before attempting to acquire a write lock.

    // If the cache was empty or stale, acquire a write lock to update it.
    let mut write_lock = cache_lock.write().await;

    // Another task might have updated the cache while we were waiting for the write lock.
    if let Some(cache) = &*write_lock {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.products.clone());
        }
    }

    // We have the lock and the cache is confirmed to be stale. Fetch new data.
    let products = match CatalogProviderKind::from_env() {
        CatalogProviderKind::FakeStore => FakeStore.get_products().await?,
        CatalogProviderKind::DummyJson => DummyJson.get_products().await?,
    };

    *write_lock = Some(CachedCatalog {
        products: products.clone(),
        last_fetched: Instant::now(),
    });

    Ok(products)
}
