//! Timestamp rendering for human-facing output.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a timestamp as `YYYY-MM-DD HH:MM TZ` in a chosen time zone,
/// the system zone unless told otherwise.
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    zone: TimeZone,
}

impl<'a> LocalDateTime<'a> {
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self::in_zone(timestamp, TimeZone::system())
    }

    pub fn in_zone(timestamp: &'a Timestamp, zone: TimeZone) -> Self {
        Self { timestamp, zone }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.timestamp.to_zoned(self.zone.clone());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M %Z"))
    }
}
