//! KPI aggregation over the current dataset.
//!
//! Summaries and trends are pure functions of a row slice; they never mutate
//! the dataset and carry no display concerns beyond the [`Trend`] label
//! helpers. An empty dataset yields all-zero KPIs and flat trends, so the
//! dashboard can always render something sensible.

use api::MetricRow;

use crate::core::format;

/// Headline scalars for the KPI cards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct KpiSummary {
    pub total_sales: f64,
    pub total_customers: u64,
    pub avg_conversion_rate: f64,
    pub avg_order_value: f64,
}

impl KpiSummary {
    pub fn compute(rows: &[MetricRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let total_sales: f64 = rows.iter().map(|row| row.sales).sum();
        let total_customers: u64 = rows.iter().map(|row| row.customers).sum();
        let avg_conversion_rate =
            rows.iter().map(|row| row.conversion_rate).sum::<f64>() / rows.len() as f64;
        let avg_order_value = if total_customers == 0 {
            0.0
        } else {
            total_sales / total_customers as f64
        };

        Self {
            total_sales,
            total_customers,
            avg_conversion_rate,
            avg_order_value,
        }
    }
}

/// Percent change of a KPI between the first and last row of the range.
///
/// A zero or non-finite endpoint makes the ratio meaningless; that case is
/// an explicit variant rather than a NaN/∞ that leaks into the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trend {
    Pct(f64),
    Unavailable,
}

impl Trend {
    /// Percent change from `first` to `last`.
    pub fn between(first: f64, last: f64) -> Self {
        if !first.is_finite() || !last.is_finite() || first == 0.0 {
            return Trend::Unavailable;
        }
        Trend::Pct((last - first) / first * 100.0)
    }

    /// Badge text: `+50.0%`, `-3.2%`, `0.0%`, or `N/A`.
    pub fn label(&self) -> String {
        match self {
            Trend::Pct(value) if *value > 0.0 => format!("+{value:.1}%"),
            Trend::Pct(value) => format!("{value:.1}%"),
            Trend::Unavailable => "N/A".to_string(),
        }
    }

    /// Modifier class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Pct(value) if *value < 0.0 => "kpi-card__trend--negative",
            Trend::Pct(_) => "kpi-card__trend--positive",
            Trend::Unavailable => "kpi-card__trend--na",
        }
    }
}

/// One trend per KPI card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiTrends {
    pub sales: Trend,
    pub customers: Trend,
    pub conversion: Trend,
    pub order_value: Trend,
}

impl KpiTrends {
    pub fn compute(rows: &[MetricRow]) -> Self {
        let flat = Self {
            sales: Trend::Pct(0.0),
            customers: Trend::Pct(0.0),
            conversion: Trend::Pct(0.0),
            order_value: Trend::Pct(0.0),
        };

        let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
            return flat;
        };

        Self {
            sales: Trend::between(first.sales, last.sales),
            customers: Trend::between(first.customers as f64, last.customers as f64),
            conversion: Trend::between(first.conversion_rate, last.conversion_rate),
            order_value: Trend::between(order_value(first), order_value(last)),
        }
    }
}

/// A single row's own sales-per-customer ratio (∞ when customers is zero;
/// [`Trend::between`] turns that into `Unavailable`).
fn order_value(row: &MetricRow) -> f64 {
    row.sales / row.customers as f64
}

/// Formatted card values in display order: sales, customers, conversion, AOV.
pub fn summary_labels(summary: &KpiSummary) -> [String; 4] {
    [
        format::format_currency(summary.total_sales),
        format::format_count(summary.total_customers),
        format::format_percent(summary.avg_conversion_rate),
        format::format_currency(summary.avg_order_value),
    ]
}
