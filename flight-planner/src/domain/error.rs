//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! raised while building records at the input boundary; once a `Flight` or
//! `Route` exists, the search never fails.

use rust_decimal::Decimal;

use super::{InvalidAirportCode, TimeError};

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Source or destination is not a valid airport code
    #[error(transparent)]
    Airport(#[from] InvalidAirportCode),

    /// Departure or arrival is not a valid timestamp
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Arrival is not strictly after departure
    #[error("flight {0} must arrive after it departs")]
    ArrivalNotAfterDeparture(String),

    /// Price or bag price is negative
    #[error("invalid {field}: {value} (must be a non-negative number)")]
    InvalidAmount {
        field: &'static str,
        value: Decimal,
    },

    /// Connection window bounds overflow the calendar
    #[error("connection window of flight {0} is out of range")]
    WindowOutOfRange(String),

    /// Route has fewer than two legs
    #[error("route must have at least two legs, got {0}")]
    RouteTooShort(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::ArrivalNotAfterDeparture("PV404".into());
        assert_eq!(err.to_string(), "flight PV404 must arrive after it departs");

        let err = DomainError::InvalidAmount {
            field: "price",
            value: Decimal::NEGATIVE_ONE,
        };
        assert_eq!(
            err.to_string(),
            "invalid price: -1 (must be a non-negative number)"
        );

        let err = DomainError::RouteTooShort(1);
        assert_eq!(err.to_string(), "route must have at least two legs, got 1");
    }

    #[test]
    fn wraps_field_errors() {
        let err: DomainError = crate::domain::AirportCode::parse("").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid airport code"));

        let err: DomainError = crate::domain::FlightTime::parse("x").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid timestamp"));
    }
}
