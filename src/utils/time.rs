//! Time utilities

use chrono::{DateTime, Duration, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Start of a trailing window of `days` whole days, ending now
pub fn window_start(days: i64) -> DateTime<Utc> {
    now_utc() - Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T12:00:00Z");
        assert!(dt.is_some());

        let offset = parse_datetime("2024-01-15T12:00:00+05:30").unwrap();
        assert_eq!(offset.to_rfc3339(), "2024-01-15T06:30:00+00:00");

        let invalid = parse_datetime("not a date");
        assert!(invalid.is_none());
    }

    #[test]
    fn test_window_start() {
        let start = window_start(7);
        let span = now_utc() - start;
        assert_eq!(span.num_days(), 7);

        assert!(window_start(90) < window_start(7));
    }
}
