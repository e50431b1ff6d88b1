//! HTTP client for the remote metrics endpoint.
//!
//! The endpoint is an external collaborator: one GET per range query,
//! `/api/data?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`, returning a JSON
//! array of rows. Whether start ≤ end is the caller's business; the server
//! simply returns an empty array for inverted ranges.
//!
//! On the web the URL is relative (same origin as the served bundle). Native
//! builds read `PULSEBOARD_API_BASE`, defaulting to the reference backend's
//! local address.

use thiserror::Error;

use crate::rows::MetricRow;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, refused connection, aborted request.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },
    /// The body arrived but wasn't the expected row array.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch all rows in `[start_date, end_date]` (ISO date strings, inclusive).
pub async fn fetch_rows(start_date: &str, end_date: &str) -> Result<Vec<MetricRow>, FetchError> {
    let url = data_url(start_date, end_date);
    let body = http_get(&url).await?;
    let rows: Vec<MetricRow> = serde_json::from_str(&body)?;
    tracing::debug!(count = rows.len(), "fetched metric rows");
    Ok(rows)
}

/// Build the range-query URL for the metrics endpoint.
pub fn data_url(start_date: &str, end_date: &str) -> String {
    format!("{}/api/data?start_date={start_date}&end_date={end_date}", base_url())
}

#[cfg(target_arch = "wasm32")]
fn base_url() -> String {
    // Same-origin relative URL; the bundle is served next to the API.
    String::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url() -> String {
    std::env::var("PULSEBOARD_API_BASE").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
}

#[cfg(target_arch = "wasm32")]
async fn http_get(url: &str) -> Result<String, FetchError> {
    use gloo_net::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn http_get(url: &str) -> Result<String, FetchError> {
    let response = reqwest::get(url)
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_both_range_bounds() {
        let url = data_url("2024-01-01", "2024-01-31");
        assert!(url.ends_with("/api/data?start_date=2024-01-01&end_date=2024-01-31"));
    }

    #[test]
    fn decode_error_wraps_serde() {
        let parsed: Result<Vec<MetricRow>, serde_json::Error> = serde_json::from_str("{}");
        let err = FetchError::from(parsed.unwrap_err());
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn status_error_is_descriptive() {
        let err = FetchError::Status { status: 502 };
        assert_eq!(err.to_string(), "server returned HTTP 502");
    }
}
