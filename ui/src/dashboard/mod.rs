//! Dashboard state and panels.
//!
//! [`DashboardState`] is the single owner of "what data is currently
//! displayed": the last fetched dataset, the (possibly range-filtered) view
//! of it the panels render from, the active date range, and a fetch
//! generation counter. Panels receive the state signal or row snapshots;
//! nothing reads an ambient global.
//!
//! The generation counter closes the rapid-interaction race: every fetch
//! captures a token at start, and a completion whose token is no longer
//! current is dropped. The superseded HTTP request itself is not cancelled;
//! its result simply loses.

use api::{FetchError, MetricRow};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use time::{Date, Duration, OffsetDateTime};

use crate::core::filter::RangeFilter;
use crate::core::notify;

mod charts;
mod export;
mod filters;
mod kpis;
mod table;

pub use charts::{
    conversion_chart, customers_chart, sales_chart, weekday_sales_chart, ChartSpec, ChartsPanel,
    Trace,
};
pub use export::ExportPanel;
pub use filters::FiltersBar;
pub use kpis::KpiGrid;
pub use table::DataTable;

/// Inclusive date range driving the range query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// `[today - days, today]`. The preset buttons and the startup default
    /// (30 days) both come through here.
    pub fn last_days(days: i64) -> Self {
        let end = OffsetDateTime::now_utc().date();
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    pub fn start_iso(&self) -> String {
        crate::core::format::format_iso_date(self.start)
    }

    pub fn end_iso(&self) -> String {
        crate::core::format::format_iso_date(self.end)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::last_days(30)
    }
}

/// What became of a completed fetch once it reported back.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Dataset replaced; carries the new row count.
    Applied(usize),
    /// A newer fetch started in the meantime; result discarded.
    Stale,
    /// The fetch failed; dashboard degraded to an empty dataset.
    Failed(String),
}

/// Owner of the currently displayed dataset.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Last successfully fetched (or sample) dataset.
    fetched: Vec<MetricRow>,
    /// What the panels render: `fetched`, or a range-filtered subset of it.
    pub rows: Vec<MetricRow>,
    pub range: DateRange,
    pub error: Option<String>,
    generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_data(&self) -> bool {
        !self.fetched.is_empty()
    }

    /// Start a fetch: bumps the generation and returns the token the
    /// completion must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Land a fetch result. Stale tokens leave the state untouched.
    pub fn complete_fetch(
        &mut self,
        token: u64,
        result: Result<Vec<MetricRow>, FetchError>,
    ) -> FetchOutcome {
        if token != self.generation {
            return FetchOutcome::Stale;
        }

        match result {
            Ok(rows) => {
                self.fetched = rows.clone();
                self.rows = rows;
                self.error = None;
                FetchOutcome::Applied(self.rows.len())
            }
            Err(err) => {
                let message = err.to_string();
                self.fetched.clear();
                self.rows.clear();
                self.error = Some(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Install rows without a network round-trip (sample data). Bumping the
    /// generation means any in-flight fetch lands stale.
    pub fn install_rows(&mut self, rows: Vec<MetricRow>) {
        self.generation += 1;
        self.fetched = rows.clone();
        self.rows = rows;
        self.error = None;
    }

    /// Re-derive the displayed subset from the fetched dataset. An empty
    /// filter restores the full range.
    pub fn apply_range_filter(&mut self, filter: &RangeFilter) {
        self.rows = filter.apply(&self.fetched);
    }
}

/// Kick off a fetch for the state's current range and land the result.
///
/// Reads the state via `peek` so callers inside effects don't subscribe and
/// re-trigger themselves.
pub fn trigger_fetch(mut state: Signal<DashboardState>) {
    let token = state.write().begin_fetch();
    let (start, end) = {
        let snapshot = state.peek();
        (snapshot.range.start_iso(), snapshot.range.end_iso())
    };

    spawn(async move {
        let result = api::fetch_rows(&start, &end).await;
        let outcome = state.write().complete_fetch(token, result);
        match outcome {
            FetchOutcome::Applied(count) => {
                tracing::debug!(count, start = %start, end = %end, "dashboard refreshed");
            }
            FetchOutcome::Stale => {
                tracing::warn!(start = %start, end = %end, "discarded superseded fetch");
            }
            FetchOutcome::Failed(message) => {
                tracing::error!(%message, "fetch failed");
                notify::blocking_alert("Error fetching data. Please try again.");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn row(day: u8, sales: f64, customers: u64) -> MetricRow {
        MetricRow {
            date: date!(2024 - 03 - 01).replace_day(day).unwrap(),
            sales,
            customers,
            conversion_rate: 0.1,
        }
    }

    #[test]
    fn default_range_spans_thirty_days() {
        let range = DateRange::default();
        assert_eq!(range.end - range.start, Duration::days(30));
    }

    #[test]
    fn successful_fetch_replaces_dataset() {
        let mut state = DashboardState::new();
        let token = state.begin_fetch();
        let outcome = state.complete_fetch(token, Ok(vec![row(1, 100.0, 10)]));
        assert_eq!(outcome, FetchOutcome::Applied(1));
        assert!(state.has_data());
        assert!(state.error.is_none());
    }

    #[test]
    fn stale_token_cannot_overwrite_newer_result() {
        let mut state = DashboardState::new();
        let old_token = state.begin_fetch();
        let new_token = state.begin_fetch();

        assert_eq!(
            state.complete_fetch(new_token, Ok(vec![row(2, 150.0, 12)])),
            FetchOutcome::Applied(1)
        );
        // The older fetch finishes last; it must not clobber the newer rows.
        assert_eq!(
            state.complete_fetch(old_token, Ok(vec![row(1, 100.0, 10)])),
            FetchOutcome::Stale
        );
        assert_eq!(state.rows, vec![row(2, 150.0, 12)]);
    }

    #[test]
    fn failed_fetch_degrades_to_empty() {
        let mut state = DashboardState::new();
        let token = state.begin_fetch();
        state.complete_fetch(token, Ok(vec![row(1, 100.0, 10)]));

        let token = state.begin_fetch();
        let outcome =
            state.complete_fetch(token, Err(FetchError::Status { status: 500 }));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert!(state.rows.is_empty());
        assert!(state.error.is_some());
    }

    #[test]
    fn range_filter_narrows_and_restores() {
        let mut state = DashboardState::new();
        let token = state.begin_fetch();
        state.complete_fetch(
            token,
            Ok(vec![row(1, 100.0, 10), row(2, 150.0, 12), row(3, 300.0, 25)]),
        );

        state.apply_range_filter(&RangeFilter {
            min_sales: Some(120.0),
            max_sales: Some(200.0),
            ..Default::default()
        });
        assert_eq!(state.rows, vec![row(2, 150.0, 12)]);

        // Clearing the bounds restores the fetched dataset untouched.
        state.apply_range_filter(&RangeFilter::default());
        assert_eq!(state.rows.len(), 3);
    }

    #[test]
    fn installing_sample_rows_supersedes_inflight_fetch() {
        let mut state = DashboardState::new();
        let token = state.begin_fetch();
        state.install_rows(vec![row(1, 100.0, 10)]);
        assert_eq!(
            state.complete_fetch(token, Ok(vec![row(2, 150.0, 12)])),
            FetchOutcome::Stale
        );
        assert_eq!(state.rows, vec![row(1, 100.0, 10)]);
    }
}
