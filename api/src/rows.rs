//! The metric row schema shared by every dashboard surface.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// One day of business metrics as served by `/api/data`.
///
/// The endpoint sends `date` as a string; deserialization normalizes it to a
/// structured [`Date`] so downstream code never re-parses. Rows are treated
/// as immutable once fetched; a new fetch replaces the whole sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub sales: f64,
    pub customers: u64,
    pub conversion_rate: f64,
}

/// Parse a remote date field.
///
/// Accepts the plain `YYYY-MM-DD` form the reference backend emits, and
/// falls back to RFC 3339 for backends that serialize full timestamps.
pub fn parse_date_flexible(raw: &str) -> Option<Date> {
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| OffsetDateTime::parse(raw, &Rfc3339).ok().map(|ts| ts.date()))
}

/// Serde adapter: dates cross the wire (and land in JSON exports) as
/// ISO-8601 `YYYY-MM-DD`.
pub(crate) mod iso_date {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let (year, month, day) = (date.year(), date.month() as u8, date.day());
        serializer.serialize_str(&format!("{year:04}-{month:02}-{day:02}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_flexible(&raw)
            .ok_or_else(|| D::Error::custom(format!("unrecognized date `{raw}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn deserializes_plain_dates() {
        let row: MetricRow = serde_json::from_str(
            r#"{"date":"2024-01-01","sales":100.0,"customers":10,"conversion_rate":0.1}"#,
        )
        .unwrap();
        assert_eq!(row.date, date!(2024 - 01 - 01));
        assert_eq!(row.customers, 10);
    }

    #[test]
    fn deserializes_rfc3339_timestamps() {
        let row: MetricRow = serde_json::from_str(
            r#"{"date":"2024-03-05T00:00:00Z","sales":12.5,"customers":3,"conversion_rate":0.2}"#,
        )
        .unwrap();
        assert_eq!(row.date, date!(2024 - 03 - 05));
    }

    #[test]
    fn rejects_garbage_dates() {
        let result: Result<MetricRow, _> = serde_json::from_str(
            r#"{"date":"yesterday","sales":1.0,"customers":1,"conversion_rate":0.1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn serializes_dates_as_iso() {
        let row = MetricRow {
            date: date!(2024 - 01 - 02),
            sales: 150.0,
            customers: 12,
            conversion_rate: 0.12,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains(r#""date":"2024-01-02""#));
    }
}
