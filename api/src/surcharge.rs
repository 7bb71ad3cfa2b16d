//! Presentation-layer surcharges applied on top of the cart's raw subtotal.
//!
//! Tax and shipping are not the cart's concern; every view that needs a
//! grand total goes through [`SurchargeSchedule::summarize`] so no two
//! screens can disagree on rounding or rates.

use std::env;

use serde::Deserialize;
use serde::Serialize;

use crate::money::Money;

/// Surcharge rates in basis points (1% = 100 bps), so a 10% tax rate is
/// representable without floating point.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SurchargeSchedule {
    pub tax_bps: u32,
    pub shipping_bps: u32,
}

impl SurchargeSchedule {
    /// Creates a schedule from whole-percent rates.
    pub fn from_percent(tax_percent: u32, shipping_percent: u32) -> Self {
        Self {
            tax_bps: tax_percent * 100,
            shipping_bps: shipping_percent * 100,
        }
    }

    /// Creates a schedule from environment variables, with in-code defaults.
    ///
    /// # Environment Variables (whole percents):
    /// - `TAX_RATE`: e.g. "10". Defaults to 10.
    /// - `SHIPPING_RATE`: e.g. "5". Defaults to 0.
    pub fn from_env() -> Self {
        const DEFAULT_TAX_PERCENT: u32 = 10;
        const DEFAULT_SHIPPING_PERCENT: u32 = 0;

        let tax_percent = env::var("TAX_RATE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TAX_PERCENT);

        let shipping_percent = env::var("SHIPPING_RATE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SHIPPING_PERCENT);

        Self::from_percent(tax_percent, shipping_percent)
    }

    /// The tax rate as a display string, e.g. "10%".
    pub fn tax_percent_label(&self) -> String {
        format_bps(self.tax_bps)
    }

    /// The shipping rate as a display string, e.g. "0%".
    pub fn shipping_percent_label(&self) -> String {
        format_bps(self.shipping_bps)
    }

    /// Computes the full price breakdown for a given subtotal.
    ///
    /// Each surcharge is rounded half-up at minor-unit precision; the
    /// subtotal itself passes through untouched.
    pub fn summarize(&self, subtotal: Money) -> OrderSummary {
        let shipping = apply_bps(subtotal, self.shipping_bps);
        let tax = apply_bps(subtotal, self.tax_bps);
        let grand_total = subtotal + shipping + tax;

        OrderSummary {
            subtotal,
            shipping,
            tax,
            grand_total,
        }
    }
}

impl Default for SurchargeSchedule {
    fn default() -> Self {
        Self::from_env()
    }
}

/// A complete price breakdown for display on checkout-style views.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub grand_total: Money,
}

fn format_bps(bps: u32) -> String {
    if bps % 100 == 0 {
        format!("{}%", bps / 100)
    } else {
        format!("{}.{:02}%", bps / 100, bps % 100)
    }
}

/// amount × bps / 10_000, rounded half-up in minor units.
fn apply_bps(amount: Money, bps: u32) -> Money {
    let product = amount.as_minor_units() as i128 * bps as i128;
    let rounded = (product + 5_000) / 10_000;
    Money::from_minor(rounded as i64, amount.currency())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;

    fn usd(minor: i64) -> Money {
        Money::from_minor(minor, Currency::USD)
    }

    #[test]
    fn ten_percent_tax_zero_shipping() {
        let schedule = SurchargeSchedule::from_percent(10, 0);
        let summary = schedule.summarize(usd(2500));

        assert_eq!(summary.subtotal, usd(2500));
        assert_eq!(summary.shipping, usd(0));
        assert_eq!(summary.tax, usd(250));
        assert_eq!(summary.grand_total, usd(2750));
    }

    #[test]
    fn surcharges_round_half_up() {
        let schedule = SurchargeSchedule::from_percent(10, 0);
        // 10% of $0.05 is half a cent; rounds up to one cent.
        assert_eq!(schedule.summarize(usd(5)).tax, usd(1));
        // 10% of $0.04 is 0.4 cents; rounds down to zero.
        assert_eq!(schedule.summarize(usd(4)).tax, usd(0));
    }

    #[test]
    fn grand_total_includes_all_surcharges() {
        let schedule = SurchargeSchedule::from_percent(10, 5);
        let summary = schedule.summarize(usd(10_000));

        assert_eq!(summary.tax, usd(1_000));
        assert_eq!(summary.shipping, usd(500));
        assert_eq!(summary.grand_total, usd(11_500));
    }

    #[test]
    fn percent_labels() {
        let schedule = SurchargeSchedule::from_percent(10, 0);
        assert_eq!(schedule.tax_percent_label(), "10%");
        assert_eq!(schedule.shipping_percent_label(), "0%");

        let fractional = SurchargeSchedule {
            tax_bps: 875,
            shipping_bps: 0,
        };
        assert_eq!(fractional.tax_percent_label(), "8.75%");
    }

    #[test]
    fn zero_subtotal_yields_zero_breakdown() {
        let schedule = SurchargeSchedule::from_percent(10, 5);
        let summary = schedule.summarize(usd(0));
        assert_eq!(summary.grand_total, usd(0));
    }
}
