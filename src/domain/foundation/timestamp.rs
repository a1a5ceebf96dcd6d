//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Hour and minute in local time, e.g. `02:45 PM`.
    pub fn display_time(&self) -> String {
        self.0.with_timezone(&Local).format("%I:%M %p").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.0 >= before);
        assert!(ts.0 <= after);
    }

    #[test]
    fn display_time_is_two_digit_hour_and_minute() {
        let ts = Timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 8, 5, 0).unwrap());
        let shown = ts.display_time();
        // "HH:MM AM" regardless of the local offset
        assert_eq!(shown.len(), 8);
        assert_eq!(&shown[2..3], ":");
        assert!(shown.ends_with("AM") || shown.ends_with("PM"));
    }

    #[test]
    fn serializes_transparently() {
        let ts = Timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 8, 5, 0).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-03-01T08:05:00Z\"");
    }
}
