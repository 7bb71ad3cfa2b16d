//! Defines traits and implementations for external product catalog providers.
//!
//! The storefront never talks to a catalog directly; it asks the active
//! provider for a listing and hands the resulting snapshots to the cart.

use std::str::FromStr;

use dioxus::prelude::ServerFnError;
use serde::Deserialize;

use crate::cart::Product;
use crate::cart::ProductId;
use crate::currency::Currency;
use crate::money::Money;

/// A trait for any service that can provide the product listing.
pub trait CatalogProvider {
    /// Fetches the latest product listing.
    async fn get_products(&self) -> Result<Vec<Product>, ServerFnError>;
}

/// The catalog providers the server can be configured to use.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum CatalogProviderKind {
    #[default]
    FakeStore,
    DummyJson,
}

impl CatalogProviderKind {
    /// Reads the provider choice from the `CATALOG_PROVIDER` env var
    /// ("fakestore" or "dummyjson"), falling back to the default.
    pub fn from_env() -> Self {
        std::env::var("CATALOG_PROVIDER")
            .ok()
            .and_then(|s| Self::from_str(&s).ok())
            .unwrap_or_default()
    }
}

/// Provides product data from the public Fake Store API.
pub mod fake_store {
    use super::*;

    /// One product in the JSON response from fakestoreapi.com. Fields we do
    /// not display (description, category, rating) are ignored.
    #[derive(Deserialize, Debug)]
    struct FakeStoreProduct {
        id: u64,
        title: String,
        price: f64,
        image: String,
    }

    /// An implementation of the `CatalogProvider` trait for the Fake Store API.
    pub struct FakeStore;

    impl CatalogProvider for FakeStore {
        async fn get_products(&self) -> Result<Vec<Product>, ServerFnError> {
            const URL: &str = "https://fakestoreapi.com/products";

            let client = reqwest::Client::new();
            let body = client.get(URL).send().await?.text().await?;

            parse_products(&body)
        }
    }

    /// Parses a Fake Store listing body into product snapshots.
    ///
    /// Prices arrive as floats and are converted to minor units immediately;
    /// the listing is quoted in USD.
    pub fn parse_products(body: &str) -> Result<Vec<Product>, ServerFnError> {
        let raw: Vec<FakeStoreProduct> = serde_json::from_str(body)?;

        Ok(raw
            .into_iter()
            .map(|p| Product {
                product_id: ProductId::new(p.id),
                product_name: p.title,
                product_price: Money::from_float(p.price, Currency::USD),
                image: p.image,
            })
            .collect())
    }
}

/// Provides product data from the DummyJSON API, as an alternative source.
pub mod dummy_json {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct DummyJsonListing {
        products: Vec<DummyJsonProduct>,
    }

    #[derive(Deserialize, Debug)]
    struct DummyJsonProduct {
        id: u64,
        title: String,
        price: f64,
        thumbnail: String,
    }

    /// An implementation of the `CatalogProvider` trait for DummyJSON.
    pub struct DummyJson;

    impl CatalogProvider for DummyJson {
        async fn get_products(&self) -> Result<Vec<Product>, ServerFnError> {
            const URL: &str = "https://dummyjson.com/products";

            let client = reqwest::Client::new();
            let body = client.get(URL).send().await?.text().await?;

            parse_products(&body)
        }
    }

    /// Parses a DummyJSON listing body into product snapshots.
    pub fn parse_products(body: &str) -> Result<Vec<Product>, ServerFnError> {
        let raw: DummyJsonListing = serde_json::from_str(body)?;

        Ok(raw
            .products
            .into_iter()
            .map(|p| Product {
                product_id: ProductId::new(p.id),
                product_name: p.title,
                product_price: Money::from_float(p.price, Currency::USD),
                image: p.thumbnail,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fake_store_listing() {
        let body = r#"[
            {
                "id": 1,
                "title": "Fjallraven - Foldsack No. 1 Backpack",
                "price": 109.95,
                "description": "Your perfect pack for everyday use.",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
                "rating": { "rate": 3.9, "count": 120 }
            },
            {
                "id": 2,
                "title": "Mens Casual Premium Slim Fit T-Shirts",
                "price": 22.3,
                "description": "Slim-fitting style.",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
                "rating": { "rate": 4.1, "count": 259 }
            }
        ]"#;

        let products = fake_store::parse_products(body).unwrap();
        assert_eq!(products.len(), 2);

        assert_eq!(products[0].product_id, ProductId::new(1));
        assert_eq!(products[0].product_price.as_minor_units(), 10995);
        assert_eq!(products[1].product_name, "Mens Casual Premium Slim Fit T-Shirts");
        assert_eq!(products[1].product_price.as_minor_units(), 2230);
    }

    #[test]
    fn parses_dummy_json_listing() {
        let body = r#"{
            "products": [
                {
                    "id": 5,
                    "title": "Red Nail Polish",
                    "price": 8.99,
                    "stock": 71,
                    "thumbnail": "https://cdn.dummyjson.com/product-images/5/thumbnail.jpg"
                }
            ],
            "total": 194,
            "skip": 0,
            "limit": 30
        }"#;

        let products = dummy_json::parse_products(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_id, ProductId::new(5));
        assert_eq!(products[0].product_price.as_minor_units(), 899);
        assert!(products[0].image.contains("thumbnail"));
    }

    #[test]
    fn rejects_malformed_listing() {
        assert!(fake_store::parse_products("not json").is_err());
        assert!(dummy_json::parse_products("[]").is_err());
    }

    #[test]
    fn provider_kind_parses_case_insensitively() {
        assert_eq!(
            CatalogProviderKind::from_str("fakestore"),
            Ok(CatalogProviderKind::FakeStore)
        );
        assert_eq!(
            CatalogProviderKind::from_str("DUMMYJSON"),
            Ok(CatalogProviderKind::DummyJson)
        );
        assert!(CatalogProviderKind::from_str("etsy").is_err());
    }
}
