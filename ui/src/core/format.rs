//! Formatting helpers for presenting metrics.

use time::Date;

/// `$1,234.56`: two decimals, thousands grouping.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    format!("{sign}${}.{frac_part}", group_thousands(digits))
}

/// `1,234`: thousands grouping for whole counts.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// A rate in `[0, 1]` as a one-decimal percentage: `0.11` → `11.0%`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// ISO `YYYY-MM-DD`, the canonical date rendering for tables and exports.
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
