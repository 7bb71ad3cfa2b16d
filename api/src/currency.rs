//! Defines the currencies the storefront can price products in.

use serde::Deserialize;
use serde::Serialize;

/// A currency, with its code, symbol, and formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    AUD, // Australian Dollar
    CAD, // Canadian Dollar
    EUR, // Euro
    GBP, // Great British Pound
    INR, // Indian Rupee
    JPY, // Japanese Yen
    #[default]
    USD, // United States Dollar
    VND, // Vietnamese Đồng
}

impl Currency {
    /// Returns the number of decimal digits used by the currency.
    ///
    /// USD uses 2 decimal places (cents), while JPY and VND use 0.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY | Self::VND => 0,
            _ => 2,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "$",
            Self::CAD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
            Self::JPY => "¥",
            Self::USD => "$",
            Self::VND => "₫",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AUD => "Australian Dollar",
            Self::CAD => "Canadian Dollar",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::INR => "Indian Rupee",
            Self::JPY => "Japanese Yen",
            Self::USD => "United States Dollar",
            Self::VND => "Vietnamese Đồng",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decimals_per_currency() {
        assert_eq!(Currency::USD.decimals(), 2);
        assert_eq!(Currency::JPY.decimals(), 0);
        assert_eq!(Currency::VND.decimals(), 0);
    }

    #[test]
    fn parses_code_case_insensitively() {
        assert_eq!(Currency::from_str("usd"), Ok(Currency::USD));
        assert_eq!(Currency::from_str("VND"), Ok(Currency::VND));
        assert!(Currency::from_str("doubloons").is_err());
    }

    #[test]
    fn code_round_trips() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::USD.symbol(), "$");
    }
}
