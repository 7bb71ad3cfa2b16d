//! Server-side storefront configuration, resolved from environment variables.

use serde::Deserialize;
use serde::Serialize;

use crate::currency::Currency;
use crate::surcharge::SurchargeSchedule;

/// Everything the client needs to know about how this storefront is set up.
///
/// Resolved once on the server and shipped to the client at app start; the
/// client never reads environment variables itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name shown in the app chrome.
    pub store_name: String,
    /// The currency the catalog is quoted in.
    pub currency: Currency,
    /// Tax and shipping rates applied by checkout-style views.
    pub surcharges: SurchargeSchedule,
}

impl StoreConfig {
    /// Creates a config from environment variables, with in-code defaults.
    ///
    /// # Environment Variables:
    /// - `STORE_NAME`: display name. Defaults to "Cashier".
    /// - `STORE_CURRENCY`: ISO 4217 code, e.g. "USD".
    /// - `TAX_RATE` / `SHIPPING_RATE`: see [`SurchargeSchedule::from_env`].
    pub fn from_env() -> Self {
        use std::str::FromStr;

        let store_name = std::env::var("STORE_NAME").unwrap_or_else(|_| "Cashier".to_string());

        let currency = std::env::var("STORE_CURRENCY")
            .ok()
            .and_then(|s| Currency::from_str(&s).ok())
            .unwrap_or_default();

        Self {
            store_name,
            currency,
            surcharges: SurchargeSchedule::from_env(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = StoreConfig::default();
        assert!(!config.store_name.is_empty());
        assert_eq!(config.currency, Currency::USD);
    }
}
