use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::TimestampValue;

/// Resolve a raw timestamp into a naive datetime.
///
/// Text values are tried as RFC 3339, ISO datetime (with a "T" or a space
/// separator, optional fractional seconds), then date-only. Blank or
/// unreadable input is `None`, never an error.
pub fn parse_timestamp(raw: &TimestampValue) -> Option<NaiveDateTime> {
    match raw {
        TimestampValue::DateTime(dt) => Some(dt.naive_utc()),
        TimestampValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc())
                .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").ok())
                .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f").ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .ok()
                        .map(|d| d.and_time(NaiveTime::MIN))
                })
        }
    }
}
