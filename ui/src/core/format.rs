//! Formatting helpers for presenting metrics.

use crate::core::analyzer::Percentage;

/// Placeholder for values that cannot be computed (zero denominators).
pub const UNAVAILABLE: &str = "N/A";

/// Placeholder for fields that have no analysis behind them yet.
pub const EMPTY: &str = "—";

/// `200000` → `"200,000"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_metric(value: Option<Percentage>) -> String {
    match value {
        Some(pct) => format!("{pct}%"),
        None => UNAVAILABLE.to_string(),
    }
}

pub fn format_whole_percent(value: u8) -> String {
    format!("{value}%")
}

pub fn format_records(value: u64) -> String {
    format!("{} records", format_count(value))
}
