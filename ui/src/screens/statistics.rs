//=============================================================================
// File: src/screens/statistics.rs
//=============================================================================
use crate::components::pico::Card;
use crate::components::pico::Grid;
use api::stats::DailyStat;
use dioxus::prelude::*;

/// Percent change between two daily figures, as a signed whole number.
fn percent_change(today: i64, yesterday: i64) -> i64 {
    if yesterday == 0 {
        return 0;
    }
    (today - yesterday) * 100 / yesterday
}

#[component]
pub fn StatisticsScreen() -> Element {
    let mut stats = use_resource(move || async move { api::daily_stats().await });

    rsx! {
        match &*stats.read() {
            None => rsx! {
                Card {
                    h3 { "Statistics" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load statistics: {e}" }
                    button { onclick: move |_| stats.restart(), "Retry" }
                }
            },
            Some(Ok(days)) => rsx! {
                SummaryCards { days: days.clone() }
                RevenueChart { days: days.clone() }
                DailyTable { days: days.clone() }
            },
        }
    }
}

/// Today's headline figures with a delta against yesterday.
#[component]
fn SummaryCards(days: Vec<DailyStat>) -> Element {
    let (today, yesterday) = match days.as_slice() {
        [.., prev, last] => (last, prev),
        _ => return rsx! {},
    };

    let revenue_delta = percent_change(
        today.revenue.as_minor_units(),
        yesterday.revenue.as_minor_units(),
    );
    let orders_delta = percent_change(today.orders as i64, yesterday.orders as i64);

    rsx! {
        Grid {
            Card {
                p { "Today's revenue" }
                h4 { "{today.revenue.to_string_with_symbol()}" }
                small { "{revenue_delta:+}% from yesterday" }
            }
            Card {
                p { "Today's orders" }
                h4 { "{today.orders}" }
                small { "{orders_delta:+}% from yesterday" }
            }
        }
    }
}

/// Seven days of revenue as horizontal bars.
#[component]
fn RevenueChart(days: Vec<DailyStat>) -> Element {
    let max_revenue = days
        .iter()
        .map(|d| d.revenue.as_minor_units())
        .max()
        .unwrap_or(1);

    rsx! {
        Card {
            h4 { "Revenue, last 7 days" }
            for day in days.iter() {
                div {
                    class: "chart-row",
                    // Day-of-month label, like "09" for 2024-02-09.
                    span { class: "chart-label", {day.date.get(8..).unwrap_or_default()} }
                    progress {
                        value: "{day.revenue.as_minor_units()}",
                        max: "{max_revenue}",
                    }
                    span { class: "chart-value", "{day.revenue.to_string_with_symbol()}" }
                }
            }
        }
    }
}

/// The per-day detail table, most recent day first.
#[component]
fn DailyTable(days: Vec<DailyStat>) -> Element {
    rsx! {
        Card {
            h4 { "Daily breakdown" }
            table {
                thead { tr {
                    th { "Date" }
                    th { "Revenue" }
                    th { "Orders" }
                    th { "Avg. order" }
                }}
                tbody {
                    for day in days.iter().rev() {
                        tr {
                            td { "{day.date}" }
                            td { "{day.revenue.to_string_with_symbol()}" }
                            td { "{day.orders}" }
                            td { "{day.avg_order_value().to_string_with_symbol()}" }
                        }
                    }
                }
            }
        }
    }
}
