use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Render a server timestamp for display.
///
/// A valid RFC 3339 timestamp is shown in local time; the service sentinels
/// (`"never"`, `"initialized"`) and anything else unparseable pass through
/// unchanged. Never panics.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Current time as an RFC 3339 string, the shape the service itself uses.
/// Stamped onto local fallback mutations.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_sentinel_passes_through() {
        assert_eq!(format_timestamp("never"), "never");
    }

    #[test]
    fn initialized_sentinel_passes_through() {
        assert_eq!(format_timestamp("initialized"), "initialized");
    }

    #[test]
    fn valid_iso_timestamp_is_reformatted() {
        let formatted = format_timestamp("2024-01-01T00:00:00Z");
        // Local-time rendering, so only the shape is stable across zones.
        assert_ne!(formatted, "2024-01-01T00:00:00Z");
        assert!(formatted.contains(':'));
        assert_eq!(formatted.len(), "2024-01-01 00:00:00".len());
    }

    #[test]
    fn malformed_timestamp_returns_input_unchanged() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(format_timestamp("2024-13-99T99:99:99Z"), "2024-13-99T99:99:99Z");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn now_iso_round_trips_through_the_formatter() {
        let now = now_iso();
        assert_ne!(format_timestamp(&now), now);
    }
}
