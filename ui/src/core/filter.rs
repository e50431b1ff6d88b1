//! Dataset-level range filtering (the "advanced filters" panel).
//!
//! Unlike the table's text search, a range filter narrows the dataset the
//! whole dashboard renders from: KPIs, charts and table all recompute over
//! the subset. The fetched dataset is kept intact by the caller so clearing
//! the bounds restores the full range without a refetch.

use api::MetricRow;

/// Optional inclusive bounds on sales and customer counts.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    pub min_sales: Option<f64>,
    pub max_sales: Option<f64>,
    pub min_customers: Option<u64>,
    pub max_customers: Option<u64>,
}

impl RangeFilter {
    /// True when no bound is set (applying it is the identity).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn retains(&self, row: &MetricRow) -> bool {
        if let Some(min) = self.min_sales {
            if row.sales < min {
                return false;
            }
        }
        if let Some(max) = self.max_sales {
            if row.sales > max {
                return false;
            }
        }
        if let Some(min) = self.min_customers {
            if row.customers < min {
                return false;
            }
        }
        if let Some(max) = self.max_customers {
            if row.customers > max {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, rows: &[MetricRow]) -> Vec<MetricRow> {
        rows.iter().filter(|row| self.retains(row)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn row(day: u8, sales: f64, customers: u64) -> MetricRow {
        MetricRow {
            date: date!(2024 - 02 - 01).replace_day(day).unwrap(),
            sales,
            customers,
            conversion_rate: 0.15,
        }
    }

    #[test]
    fn empty_filter_is_identity() {
        let rows = vec![row(1, 100.0, 10), row(2, 150.0, 12)];
        let filter = RangeFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&rows), rows);
    }

    #[test]
    fn bounds_are_inclusive() {
        let rows = vec![row(1, 100.0, 10), row(2, 150.0, 12), row(3, 200.0, 20)];
        let filter = RangeFilter {
            min_sales: Some(100.0),
            max_sales: Some(150.0),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows), vec![row(1, 100.0, 10), row(2, 150.0, 12)]);
    }

    #[test]
    fn customer_bounds_stack_with_sales_bounds() {
        let rows = vec![row(1, 100.0, 10), row(2, 150.0, 12), row(3, 160.0, 30)];
        let filter = RangeFilter {
            min_sales: Some(120.0),
            max_customers: Some(15),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows), vec![row(2, 150.0, 12)]);
    }
}
