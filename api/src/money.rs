//! Provides a safe, self-contained type for representing monetary amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;

use serde::Deserialize;
use serde::Serialize;

use crate::currency::Currency;

/// A monetary value in a specific currency.
///
/// Internally, the amount is stored as a signed 64-bit integer in the currency's
/// smallest unit (e.g., cents for USD) to prevent floating-point inaccuracies.
/// The default `Display` implementation formats this as a plain numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    // --- Getters ---

    /// Returns the currency of the amount.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit (e.g., cents).
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    // --- Constructors ---

    /// The zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Creates a new `Money` from a floating-point value, typically from an API.
    ///
    /// The float is safely converted to an integer representation by rounding to the
    /// nearest minor unit based on the currency's specified number of decimal places.
    pub fn from_float(value: f64, currency: Currency) -> Self {
        let decimals = currency.decimals();
        let multiplier = 10_f64.powi(decimals as i32);
        let amount = (value * multiplier).round() as i64;

        Self { amount, currency }
    }

    /// Creates a new `Money` directly from its smallest unit.
    ///
    /// 12345 cents represents $123.45.
    pub fn from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    // --- Arithmetic ---

    /// Checked addition. Returns `None` if currencies mismatch or if addition overflows.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        if self.currency != rhs.currency {
            return None;
        }
        self.amount.checked_add(rhs.amount).map(|amount| Self {
            amount,
            currency: self.currency,
        })
    }

    // --- Display Methods ---

    /// Formats the amount with its currency symbol (e.g., "$25.34").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }

    /// Formats the amount with its currency code (e.g., "25.34 USD").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Formats the amount as a plain numeric string (e.g., "25.34").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_u64.pow(decimals as u32);
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let major_units = abs / divisor;
        let minor_units = abs % divisor;

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            major_units,
            minor_units,
            width = decimals
        )
    }
}

/// Implements the addition operator. Panics if currencies do not match.
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.currency != rhs.currency {
            panic!(
                "Cannot add amounts of different currencies: {:?} and {:?}",
                self.currency, rhs.currency
            );
        }
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

/// Implements the addition assignment operator. Panics if currencies do not match.
impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        if self.currency != rhs.currency {
            panic!(
                "Cannot add amounts of different currencies: {:?} and {:?}",
                self.currency, rhs.currency
            );
        }
        self.amount += rhs.amount;
    }
}

/// Multiplies a unit amount by an integer count (e.g., unit price × quantity).
impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self {
            amount: self.amount * rhs as i64,
            currency: self.currency,
        }
    }
}

/// Sums an iterator of amounts. The empty sum is zero in the default currency.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(Currency::default()), |acc, m| {
            if acc.amount == 0 && acc.currency != m.currency {
                m
            } else {
                acc + m
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_float_rounds_to_nearest_minor_unit() {
        let amount = Money::from_float(123.456, Currency::USD);
        assert_eq!(amount.as_minor_units(), 12346);

        let amount = Money::from_float(109.95, Currency::USD);
        assert_eq!(amount.as_minor_units(), 10995);
    }

    #[test]
    fn from_float_zero_decimal_currency() {
        let amount = Money::from_float(1250.4, Currency::JPY);
        assert_eq!(amount.as_minor_units(), 1250);
    }

    #[test]
    fn display_formats_minor_units() {
        assert_eq!(Money::from_minor(12345, Currency::USD).to_string(), "123.45");
        assert_eq!(Money::from_minor(5, Currency::USD).to_string(), "0.05");
        assert_eq!(Money::from_minor(1250, Currency::JPY).to_string(), "1250");
        assert_eq!(Money::from_minor(-50, Currency::USD).to_string(), "-0.50");
        assert_eq!(Money::from_minor(-12345, Currency::USD).to_string(), "-123.45");
    }

    #[test]
    fn display_with_symbol() {
        let amount = Money::from_minor(2534, Currency::USD);
        assert_eq!(amount.to_string_with_symbol(), "$25.34");
        assert_eq!(amount.to_string_with_code(), "25.34 USD");
    }

    #[test]
    fn multiply_by_quantity() {
        let unit = Money::from_minor(1250, Currency::USD);
        assert_eq!((unit * 2).as_minor_units(), 2500);
        assert_eq!((unit * 0).as_minor_units(), 0);
    }

    #[test]
    fn sum_of_amounts() {
        let total: Money = [
            Money::from_minor(1000, Currency::USD),
            Money::from_minor(500, Currency::USD),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.as_minor_units(), 1500);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert_eq!(empty.as_minor_units(), 0);
    }

    #[test]
    fn checked_add_rejects_currency_mismatch() {
        let usd = Money::from_minor(100, Currency::USD);
        let eur = Money::from_minor(100, Currency::EUR);
        assert_eq!(usd.checked_add(&eur), None);
        assert_eq!(
            usd.checked_add(&usd),
            Some(Money::from_minor(200, Currency::USD))
        );
    }
}
