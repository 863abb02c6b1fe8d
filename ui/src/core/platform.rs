//! Platform detection and wall-clock helpers.

use time::{macros::format_description, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Local time when the offset can be determined, UTC otherwise.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn unix_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

/// Header clock label, e.g. `Oct 17, 03:45 PM`.
pub fn clock_label(at: OffsetDateTime) -> String {
    at.format(&format_description!(
        "[month repr:short] [day padding:none], [hour repr:12]:[minute] [period]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn clock_uses_twelve_hour_format() {
        assert_eq!(clock_label(datetime!(2025-10-17 15:45 UTC)), "Oct 17, 03:45 PM");
        assert_eq!(clock_label(datetime!(2025-01-05 09:05 UTC)), "Jan 5, 09:05 AM");
    }
}
