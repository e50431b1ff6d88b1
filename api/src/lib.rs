//! Data access for Pulseboard: the typed metric rows served by the remote
//! `/api/data` endpoint and the HTTP client that fetches them.

mod fetch;
mod rows;

pub use fetch::{data_url, fetch_rows, FetchError};
pub use rows::{parse_date_flexible, MetricRow};
