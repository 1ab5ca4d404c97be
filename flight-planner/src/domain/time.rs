//! Naive local timestamps for flight schedules.
//!
//! Flight data carries departure and arrival times as
//! `YYYY-MM-DDTHH:MM:SS` strings in the local time of each airport. No
//! time-zone normalization is attempted: connection windows are computed
//! on the naive values exactly as they appear in the input.

use chrono::{Duration, NaiveDateTime};
use std::fmt;
use std::ops::Add;

/// Format used for both parsing and rendering timestamps.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimeError {
    input: String,
}

/// A naive local date-time of a departure or arrival.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::FlightTime;
///
/// let t = FlightTime::parse("2017-02-11T06:25:00").unwrap();
/// assert_eq!(t.to_string(), "2017-02-11T06:25:00");
///
/// assert!(FlightTime::parse("2017-02-11 06:25").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightTime(NaiveDateTime);

impl FlightTime {
    /// Wrap an already-built date-time.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parse a timestamp in `YYYY-MM-DDTHH:MM:SS` format.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        NaiveDateTime::parse_from_str(s, ISO_FORMAT)
            .map(Self)
            .map_err(|_| TimeError {
                input: s.to_string(),
            })
    }

    /// Add a duration, returning `None` on overflow.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self)
    }
}

impl Add<Duration> for FlightTime {
    type Output = Option<Self>;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightTime({})", self.0.format(ISO_FORMAT))
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl serde::Serialize for FlightTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_timestamp()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) -> String {
            format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}")
        }
    }

    proptest! {
        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(s in valid_timestamp()) {
            let parsed = FlightTime::parse(&s).unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        /// Adding a positive duration always moves forward
        #[test]
        fn add_is_monotonic(a in valid_timestamp(), mins in 1i64..100_000) {
            let t = FlightTime::parse(&a).unwrap();
            let later = (t + Duration::minutes(mins)).unwrap();
            prop_assert!(later > t);
        }
    }
}
