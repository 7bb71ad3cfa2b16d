//! Daily sales statistics shown on the statistics screen.

use serde::Deserialize;
use serde::Serialize;

use crate::currency::Currency;
use crate::money::Money;

/// One day of aggregated sales figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    pub revenue: Money,
    pub orders: u32,
}

impl DailyStat {
    /// Average order value for the day, zero when no orders were placed.
    pub fn avg_order_value(&self) -> Money {
        if self.orders == 0 {
            return Money::zero(self.revenue.currency());
        }
        Money::from_minor(
            self.revenue.as_minor_units() / self.orders as i64,
            self.revenue.currency(),
        )
    }
}

/// A canned seven-day window of sales figures.
///
/// TODO: replace with real aggregation once placed orders are recorded
/// server-side.
pub fn last_seven_days() -> Vec<DailyStat> {
    let days = [
        ("2024-02-03", 12_500_00, 25),
        ("2024-02-04", 21_000_00, 42),
        ("2024-02-05", 18_000_00, 36),
        ("2024-02-06", 23_000_00, 46),
        ("2024-02-07", 19_500_00, 39),
        ("2024-02-08", 28_000_00, 56),
        ("2024-02-09", 25_000_00, 50),
    ];

    days.into_iter()
        .map(|(date, revenue_minor, orders)| DailyStat {
            date: date.to_string(),
            revenue: Money::from_minor(revenue_minor, Currency::USD),
            orders,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_days_of_data() {
        let stats = last_seven_days();
        assert_eq!(stats.len(), 7);
        assert!(stats.iter().all(|d| d.orders > 0));
    }

    #[test]
    fn avg_order_value() {
        let day = DailyStat {
            date: "2024-02-03".into(),
            revenue: Money::from_minor(12_500_00, Currency::USD),
            orders: 25,
        };
        assert_eq!(day.avg_order_value(), Money::from_minor(500_00, Currency::USD));

        let quiet = DailyStat {
            date: "2024-02-10".into(),
            revenue: Money::zero(Currency::USD),
            orders: 0,
        };
        assert_eq!(quiet.avg_order_value().as_minor_units(), 0);
    }
}
