//! Serializers behind the export buttons.
//!
//! Three formats, one dataset:
//! - CSV with the fixed `Date,Sales,Customers,Conversion Rate` header; dates
//!   as `YYYY-MM-DD`, sales/customers as raw numbers, the rate as a
//!   one-decimal percentage (re-importing loses precision past that decimal).
//! - Pretty-printed JSON; dates serialize as ISO-8601 `YYYY-MM-DD`.
//! - "Spreadsheet": the CSV bytes under an `.xlsx` filename. Spreadsheet
//!   apps open it fine; it is not a real workbook. Kept from the reference
//!   implementation as an accepted shortcut.
//!
//! Delivery (Blob download / file write) lives with the export panel; this
//! module is pure so it can be tested without a DOM.

use api::MetricRow;
use time::OffsetDateTime;

use crate::core::format;

pub const CSV_HEADER: &str = "Date,Sales,Customers,Conversion Rate";

/// Export format selector, with its filename extension and MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Spreadsheet,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Spreadsheet => "xlsx",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Csv | Self::Spreadsheet => "text/csv;charset=utf-8",
            Self::Json => "application/json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Spreadsheet => "Excel",
        }
    }
}

/// `dashboard_export_<YYYY-MM-DD>.<ext>`, stamped with today's UTC date.
pub fn export_filename(format: ExportFormat) -> String {
    let today = format::format_iso_date(OffsetDateTime::now_utc().date());
    format!("dashboard_export_{today}.{}", format.extension())
}

/// Serialize rows for the given format.
pub fn serialize(format: ExportFormat, rows: &[MetricRow]) -> Result<String, String> {
    match format {
        ExportFormat::Csv | ExportFormat::Spreadsheet => Ok(build_csv(rows)),
        ExportFormat::Json => build_json(rows),
    }
}

pub fn build_csv(rows: &[MetricRow]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for row in rows {
        let fields = [
            format::format_iso_date(row.date),
            row.sales.to_string(),
            row.customers.to_string(),
            format::format_percent(row.conversion_rate),
        ];
        let line = fields
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

pub fn build_json(rows: &[MetricRow]) -> Result<String, String> {
    serde_json::to_string_pretty(rows).map_err(|err| err.to_string())
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::parse_date_flexible;
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
                sales: 150.5,
                customers: 12,
                conversion_rate: 0.1234,
            },
        ]
    }

    /// Inverse of `build_csv`, good enough for round-trip checks.
    fn parse_csv(csv: &str) -> Vec<MetricRow> {
        csv.lines()
            .skip(1)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let fields: Vec<&str> = line.split(',').collect();
                let percent: f64 = fields[3].trim_end_matches('%').parse().unwrap();
                MetricRow {
                    date: parse_date_flexible(fields[0]).unwrap(),
                    sales: fields[1].parse().unwrap(),
                    customers: fields[2].parse().unwrap(),
                    conversion_rate: percent / 100.0,
                }
            })
            .collect()
    }

    #[test]
    fn csv_layout_matches_reference() {
        let csv = build_csv(&rows());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date,Sales,Customers,Conversion Rate"));
        assert_eq!(lines.next(), Some("2024-01-01,100,10,10.0%"));
        assert_eq!(lines.next(), Some("2024-01-02,150.5,12,12.3%"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_round_trip_is_lossless_except_rate_precision() {
        let original = rows();
        let parsed = parse_csv(&build_csv(&original));
        assert_eq!(parsed.len(), original.len());
        for (back, orig) in parsed.iter().zip(&original) {
            assert_eq!(back.date, orig.date);
            assert_eq!(back.sales, orig.sales);
            assert_eq!(back.customers, orig.customers);
            // The rate survives only to one percentage decimal.
            assert!((back.conversion_rate - orig.conversion_rate).abs() < 0.0005 + 1e-12);
        }
    }

    #[test]
    fn empty_dataset_serializes_to_header_only() {
        assert_eq!(build_csv(&[]), "Date,Sales,Customers,Conversion Rate\n");
    }

    #[test]
    fn json_uses_iso_dates() {
        let json = build_json(&rows()).unwrap();
        assert!(json.contains(r#""date": "2024-01-01""#));
        assert!(json.contains(r#""customers": 12"#));
    }

    #[test]
    fn spreadsheet_reuses_csv_bytes() {
        assert_eq!(
            serialize(ExportFormat::Spreadsheet, &rows()).unwrap(),
            serialize(ExportFormat::Csv, &rows()).unwrap()
        );
        assert_eq!(ExportFormat::Spreadsheet.extension(), "xlsx");
    }

    #[test]
    fn filenames_carry_format_extensions() {
        let name = export_filename(ExportFormat::Json);
        assert!(name.starts_with("dashboard_export_"));
        assert!(name.ends_with(".json"));
    }
}
