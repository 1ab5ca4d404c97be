//! Airport code types.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code {input:?}: {reason}")]
pub struct InvalidAirportCode {
    input: String,
    reason: &'static str,
}

/// An airport code as it appears in the flights file.
///
/// Codes are compared exactly, so `"USM"` and `"usm"` are different
/// airports. Any non-empty token without whitespace is accepted, which
/// covers both IATA (`PRG`) and ICAO (`LKPR`) codes. Clones share the
/// same allocation.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let usm = AirportCode::parse("USM").unwrap();
/// assert_eq!(usm.as_str(), "USM");
///
/// assert!(AirportCode::parse("EGLL").is_ok());
///
/// assert!(AirportCode::parse("").is_err());
/// assert!(AirportCode::parse("U SM").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode(Arc<str>);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be non-empty and must not contain whitespace or
    /// control characters.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let reject = |reason| InvalidAirportCode {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(reject("must not be empty"));
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(reject("must not contain whitespace"));
        }

        Ok(AirportCode(Arc::from(s)))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for AirportCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the input
        #[test]
        fn roundtrip(s in "[A-Za-z0-9]{1,8}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any embedded space is rejected
        #[test]
        fn whitespace_rejected(a in "[A-Z]{0,4}", b in "[A-Z]{0,4}") {
            let s = format!("{a} {b}");
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
