//! Formatting utilities for pt-BR presentation.
//!
//! Provides currency, integer, percentage, and date formatting shared by the
//! CLI tables and the TUI screens.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Group the digits of `n` with `.` every three places.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a value as Brazilian reais.
///
/// # Examples
///
/// ```
/// use lap_client::format::format_brl;
///
/// assert_eq!(format_brl(1234.56), "R$ 1.234,56");
/// assert_eq!(format_brl(-1234.56), "-R$ 1.234,56");
/// assert_eq!(format_brl(0.0), "R$ 0,00");
/// ```
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$ 0,00".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u128;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}R$ {},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format an optional amount, showing `-` when absent.
pub fn format_opt_brl(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), format_brl)
}

/// Integer with `.` thousands separators (`12.345`).
pub fn format_int(value: u64) -> String {
    group_thousands(u128::from(value))
}

/// Percentage with one decimal and a comma separator (`12,5%`).
pub fn format_percent(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.1}%").replace('.', ",")
}

/// Decimal with one place and a comma separator, without a unit.
pub fn format_decimal(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.1}").replace('.', ",")
}

/// Parse the timestamp forms the API emits into a calendar date.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Format an API date as `dd/mm/yyyy`; unparseable input is returned verbatim.
///
/// ```
/// use lap_client::format::format_date;
///
/// assert_eq!(format_date("2024-03-05T10:00:00"), "05/03/2024");
/// assert_eq!(format_date("ontem"), "ontem");
/// ```
pub fn format_date(raw: &str) -> String {
    parse_api_date(raw).map_or_else(
        || raw.to_string(),
        |date| date.format("%d/%m/%Y").to_string(),
    )
}

pub fn format_opt_date(raw: Option<&str>) -> String {
    raw.map_or_else(|| "-".to_string(), format_date)
}

/// Keep at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Like [`truncate_chars`] but marks the cut with `...`.
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        format!("{}...", truncate_chars(text, max))
    }
}
