//! Table view model and text filtering.
//!
//! Filtering runs over the typed dataset, not over whatever happens to be in
//! the DOM: each row is projected into a [`DisplayRow`] of formatted cells,
//! and visibility is decided from the row plus its cells. Matching covers
//! both the rendered cell strings (any substring the user can see matches)
//! and the canonical numeric forms of each field, so a search like `0.10`
//! finds the row whose rate renders as `10.0%`.
//!
//! Text filtering only toggles visibility; the dataset, KPIs and charts are
//! untouched.

use api::MetricRow;

use crate::core::format;

/// The four formatted cells of a table row, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub date: String,
    pub sales: String,
    pub customers: String,
    pub conversion: String,
}

pub fn display_row(row: &MetricRow) -> DisplayRow {
    DisplayRow {
        date: format::format_iso_date(row.date),
        sales: format::format_currency(row.sales),
        customers: format::format_count(row.customers),
        conversion: format::format_percent(row.conversion_rate),
    }
}

pub fn build_display_rows(rows: &[MetricRow]) -> Vec<DisplayRow> {
    rows.iter().map(display_row).collect()
}

/// Column the category filter restricts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricCategory {
    #[default]
    All,
    Sales,
    Customers,
}

impl MetricCategory {
    /// Parse the `<select>` value; anything unknown falls back to `All`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "sales" => Self::Sales,
            "customers" => Self::Customers,
            _ => Self::All,
        }
    }
}

/// The table's free-text search plus category restriction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableQuery {
    pub term: String,
    pub category: MetricCategory,
}

impl TableQuery {
    /// Whether `row` stays visible under this query.
    pub fn matches(&self, row: &MetricRow, cells: &DisplayRow) -> bool {
        let term = self.term.trim().to_lowercase();
        if !term.is_empty() {
            let rendered = [&cells.date, &cells.sales, &cells.customers, &cells.conversion];
            let canonical = [
                row.sales.to_string(),
                row.customers.to_string(),
                format!("{:.2}", row.conversion_rate),
            ];
            let hit = rendered
                .iter()
                .any(|cell| cell.to_lowercase().contains(&term))
                || canonical.iter().any(|value| value.contains(&term));
            if !hit {
                return false;
            }
        }

        match self.category {
            MetricCategory::All => true,
            MetricCategory::Sales => row.sales != 0.0,
            MetricCategory::Customers => row.customers != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn rows() -> Vec<MetricRow> {
        vec![
            MetricRow {
                date: date!(2024 - 01 - 01),
                sales: 100.0,
                customers: 10,
                conversion_rate: 0.10,
            },
            MetricRow {
                date: date!(2024 - 01 - 02),
                sales: 150.0,
                customers: 12,
                conversion_rate: 0.12,
            },
        ]
    }

    fn visible(query: &TableQuery, rows: &[MetricRow]) -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, row)| query.matches(row, &display_row(row)))
            .map(|(idx, _)| idx)
            .collect()
    }

    #[test]
    fn cells_are_formatted_for_display() {
        let cells = display_row(&rows()[0]);
        assert_eq!(cells.date, "2024-01-01");
        assert_eq!(cells.sales, "$100.00");
        assert_eq!(cells.customers, "10");
        assert_eq!(cells.conversion, "10.0%");
    }

    #[test]
    fn empty_term_keeps_everything_visible() {
        assert_eq!(visible(&TableQuery::default(), &rows()), vec![0, 1]);
    }

    #[test]
    fn term_matches_rendered_cells_case_insensitively() {
        let query = TableQuery {
            term: "10.0%".into(),
            category: MetricCategory::All,
        };
        assert_eq!(visible(&query, &rows()), vec![0]);

        let query = TableQuery {
            term: "2024-01".into(),
            category: MetricCategory::All,
        };
        assert_eq!(visible(&query, &rows()), vec![0, 1]);
    }

    #[test]
    fn term_matches_canonical_rate_form() {
        let query = TableQuery {
            term: "0.10".into(),
            category: MetricCategory::All,
        };
        assert_eq!(visible(&query, &rows()), vec![0]);
    }

    #[test]
    fn unmatched_term_hides_all_rows() {
        let query = TableQuery {
            term: "widgets".into(),
            category: MetricCategory::All,
        };
        assert!(visible(&query, &rows()).is_empty());
    }

    #[test]
    fn category_filter_drops_zero_valued_rows() {
        let mut data = rows();
        data[1].customers = 0;
        let query = TableQuery {
            term: String::new(),
            category: MetricCategory::Customers,
        };
        assert_eq!(visible(&query, &data), vec![0]);
    }

    #[test]
    fn category_stacks_on_top_of_search() {
        let mut data = rows();
        data[0].sales = 0.0;
        let query = TableQuery {
            term: "2024-01".into(),
            category: MetricCategory::Sales,
        };
        assert_eq!(visible(&query, &data), vec![1]);
    }
}
