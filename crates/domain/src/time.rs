//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// UTC timestamp used for enrollment dates.
pub type Timestamp = DateTime<Utc>;

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as
/// midnight UTC.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Timestamp `millis` milliseconds after the Unix epoch.
#[must_use]
pub fn from_epoch_millis(millis: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_parse_rfc3339_into_utc() {
        let parsed = parse_timestamp("2024-09-01T08:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 9, 1, 6, 30, 0).unwrap());
    }

    #[test]
    fn should_parse_date_only_as_midnight_utc() {
        let parsed = parse_timestamp("2024-09-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn should_reject_unrecognised_text() {
        for text in ["", "yesterday", "2024-13-01", "01/09/2024"] {
            assert!(parse_timestamp(text).is_none(), "{text:?}");
        }
    }

    #[test]
    fn should_convert_epoch_millis() {
        let parsed = from_epoch_millis(1_725_148_800_000).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap());
    }
}
