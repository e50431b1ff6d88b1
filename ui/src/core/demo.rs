//! Synthetic sample dataset.
//!
//! Lets the dashboard be explored without the remote endpoint: one row per
//! day with weekly seasonality, a gentle upward trend, and bounded noise.
//! Floors and clamps keep the numbers plausible (sales ≥ 500, customers
//! ≥ 20, conversion rate within [0.05, 0.35]).

use api::MetricRow;
use rand::Rng;
use time::Date;

const BASE_SALES: f64 = 3000.0;

/// Generate one row per day over `[start, end]` (inclusive). An inverted
/// range yields no rows.
pub fn sample_rows(start: Date, end: Date) -> Vec<MetricRow> {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::new();
    let mut date = start;
    let mut index = 0u32;

    while date <= end {
        let weekly = (index as f64 * std::f64::consts::TAU / 7.0).sin() * 0.2;
        let trend = 0.3 * index as f64 / 90.0;
        let noise: f64 = rng.gen_range(-200.0..200.0);

        let sales = (BASE_SALES * (1.0 + weekly + trend) + noise).max(500.0);
        let customers = ((sales / 30.0) * (1.0 + rng.gen_range(-0.1..0.1))).max(20.0) as u64;
        let conversion_rate =
            (0.15 + weekly * 0.5 + rng.gen_range(-0.03..0.03)).clamp(0.05, 0.35);

        rows.push(MetricRow {
            date,
            sales: (sales * 100.0).round() / 100.0,
            customers,
            conversion_rate: (conversion_rate * 10_000.0).round() / 10_000.0,
        });

        date = match date.next_day() {
            Some(next) => next,
            None => break,
        };
        index += 1;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn one_row_per_day_inclusive() {
        let rows = sample_rows(date!(2024 - 01 - 01), date!(2024 - 01 - 31));
        assert_eq!(rows.len(), 31);
        assert_eq!(rows.first().unwrap().date, date!(2024 - 01 - 01));
        assert_eq!(rows.last().unwrap().date, date!(2024 - 01 - 31));
    }

    #[test]
    fn values_stay_in_plausible_bounds() {
        for row in sample_rows(date!(2024 - 01 - 01), date!(2024 - 06 - 30)) {
            assert!(row.sales >= 500.0, "sales floor violated: {}", row.sales);
            assert!(row.customers >= 20);
            assert!((0.05..=0.35).contains(&row.conversion_rate));
        }
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(sample_rows(date!(2024 - 02 - 01), date!(2024 - 01 - 01)).is_empty());
    }
}
