//! Flight record type.
//!
//! A `Flight` represents one flight segment with its fare and the
//! connection window derived from its arrival time. Flights are immutable
//! once built and are referred to by `FlightIndex` during the search.

use std::fmt;

use chrono::Duration;
use rust_decimal::Decimal;

use super::{AirportCode, DomainError, FlightTime};

/// Position of a flight in the loaded dataset.
///
/// Indices are stable for the lifetime of a search and double as the
/// human-readable route label in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightIndex(pub usize);

impl fmt::Display for FlightIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time allowed for changing planes after an arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionWindow {
    /// Earliest connecting departure after arrival.
    pub min: Duration,
    /// Latest connecting departure after arrival.
    pub max: Duration,
}

impl ConnectionWindow {
    /// Create a window from hour bounds.
    pub fn hours(min: i64, max: i64) -> Self {
        Self {
            min: Duration::hours(min),
            max: Duration::hours(max),
        }
    }
}

impl Default for ConnectionWindow {
    fn default() -> Self {
        Self::hours(1, 4)
    }
}

/// Ticket and baggage pricing of a single flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    /// Ticket price without baggage.
    pub price: Decimal,
    /// Maximum number of checked bags that can be bought.
    pub bags_allowed: u32,
    /// Price of one checked bag.
    pub bag_price: Decimal,
}

impl Fare {
    fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [("price", self.price), ("bag_price", self.bag_price)] {
            if value < Decimal::ZERO {
                return Err(DomainError::InvalidAmount { field, value });
            }
        }
        Ok(())
    }
}

/// One flight segment.
///
/// # Invariants
///
/// - `arrival > departure`
/// - `price` and `bag_price` are non-negative
/// - `min_connect_departure <= max_connect_departure`
#[derive(Debug, Clone)]
pub struct Flight {
    source: AirportCode,
    destination: AirportCode,
    departure: FlightTime,
    arrival: FlightTime,
    flight_number: String,
    fare: Fare,
    // Derived from arrival at construction
    min_connect_departure: FlightTime,
    max_connect_departure: FlightTime,
}

impl Flight {
    /// Construct a flight, validating times and amounts.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `arrival <= departure`
    /// - a price is negative
    /// - the window is inverted or its bounds overflow the calendar
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{AirportCode, ConnectionWindow, Fare, Flight, FlightTime};
    /// use rust_decimal::Decimal;
    ///
    /// let flight = Flight::new(
    ///     AirportCode::parse("USM").unwrap(),
    ///     AirportCode::parse("HKT").unwrap(),
    ///     FlightTime::parse("2017-02-11T06:25:00").unwrap(),
    ///     FlightTime::parse("2017-02-11T07:25:00").unwrap(),
    ///     "PV404",
    ///     Fare {
    ///         price: Decimal::new(24, 0),
    ///         bags_allowed: 1,
    ///         bag_price: Decimal::new(9, 0),
    ///     },
    ///     ConnectionWindow::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(flight.min_connect_departure().to_string(), "2017-02-11T08:25:00");
    /// assert_eq!(flight.max_connect_departure().to_string(), "2017-02-11T11:25:00");
    /// ```
    pub fn new(
        source: AirportCode,
        destination: AirportCode,
        departure: FlightTime,
        arrival: FlightTime,
        flight_number: impl Into<String>,
        fare: Fare,
        window: ConnectionWindow,
    ) -> Result<Self, DomainError> {
        let flight_number = flight_number.into();

        if arrival <= departure {
            return Err(DomainError::ArrivalNotAfterDeparture(flight_number));
        }
        fare.validate()?;

        let (min_connect_departure, max_connect_departure) =
            match (arrival + window.min, arrival + window.max) {
                (Some(min), Some(max)) if min <= max => (min, max),
                _ => return Err(DomainError::WindowOutOfRange(flight_number)),
            };

        Ok(Flight {
            source,
            destination,
            departure,
            arrival,
            flight_number,
            fare,
            min_connect_departure,
            max_connect_departure,
        })
    }

    /// Returns the departure airport.
    pub fn source(&self) -> &AirportCode {
        &self.source
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    pub fn departure(&self) -> FlightTime {
        self.departure
    }

    pub fn arrival(&self) -> FlightTime {
        self.arrival
    }

    /// Returns the flight number (not unique across a dataset).
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn price(&self) -> Decimal {
        self.fare.price
    }

    pub fn bags_allowed(&self) -> u32 {
        self.fare.bags_allowed
    }

    pub fn bag_price(&self) -> Decimal {
        self.fare.bag_price
    }

    /// Earliest departure of a connecting flight.
    pub fn min_connect_departure(&self) -> FlightTime {
        self.min_connect_departure
    }

    /// Latest departure of a connecting flight.
    pub fn max_connect_departure(&self) -> FlightTime {
        self.max_connect_departure
    }

    /// Check if a departure falls inside this flight's connection window.
    ///
    /// Both bounds are inclusive.
    pub fn change_possible(&self, departure: FlightTime) -> bool {
        departure >= self.min_connect_departure && departure <= self.max_connect_departure
    }

    /// Check if `next` is a valid continuation of this flight.
    ///
    /// `next` must leave from where this flight lands, depart inside the
    /// connection window, and allow at least as many bags as this flight.
    pub fn connects_to(&self, next: &Flight) -> bool {
        self.destination == next.source
            && self.change_possible(next.departure)
            && self.bags_allowed() <= next.bags_allowed()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {} {}",
            self.flight_number, self.source, self.departure, self.destination, self.arrival
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn time(s: &str) -> FlightTime {
        FlightTime::parse(&format!("2017-02-11T{s}:00")).unwrap()
    }

    fn fare(price: Decimal, bags_allowed: u32, bag_price: Decimal) -> Fare {
        Fare {
            price,
            bags_allowed,
            bag_price,
        }
    }

    fn flight(from: &str, to: &str, dep: &str, arr: &str, bags: u32) -> Flight {
        Flight::new(
            code(from),
            code(to),
            time(dep),
            time(arr),
            "TST1",
            fare(dec!(10), bags, dec!(5)),
            ConnectionWindow::default(),
        )
        .unwrap()
    }

    #[test]
    fn derives_connection_window() {
        let f = flight("AAA", "BBB", "10:00", "11:00", 1);
        assert_eq!(f.min_connect_departure(), time("12:00"));
        assert_eq!(f.max_connect_departure(), time("15:00"));
    }

    #[test]
    fn custom_window() {
        let f = Flight::new(
            code("AAA"),
            code("BBB"),
            time("10:00"),
            time("11:00"),
            "TST1",
            fare(dec!(10), 0, dec!(0)),
            ConnectionWindow::hours(2, 3),
        )
        .unwrap();
        assert_eq!(f.min_connect_departure(), time("13:00"));
        assert_eq!(f.max_connect_departure(), time("14:00"));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let f = flight("AAA", "BBB", "10:00", "11:00", 1);
        assert!(!f.change_possible(time("11:59")));
        assert!(f.change_possible(time("12:00")));
        assert!(f.change_possible(time("13:30")));
        assert!(f.change_possible(time("15:00")));
        assert!(!f.change_possible(time("15:01")));
    }

    #[test]
    fn rejects_arrival_before_departure() {
        let result = Flight::new(
            code("AAA"),
            code("BBB"),
            time("11:00"),
            time("11:00"),
            "PV404",
            fare(dec!(10), 1, dec!(5)),
            ConnectionWindow::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            DomainError::ArrivalNotAfterDeparture("PV404".into())
        );
    }

    #[test]
    fn rejects_negative_amounts() {
        for bad in [fare(dec!(-1), 1, dec!(5)), fare(dec!(1), 1, dec!(-0.01))] {
            let result = Flight::new(
                code("AAA"),
                code("BBB"),
                time("10:00"),
                time("11:00"),
                "TST1",
                bad,
                ConnectionWindow::default(),
            );
            assert!(matches!(result, Err(DomainError::InvalidAmount { .. })));
        }
    }

    #[test]
    fn accepts_zero_and_negative_zero_amounts() {
        let result = Flight::new(
            code("AAA"),
            code("BBB"),
            time("10:00"),
            time("11:00"),
            "TST1",
            fare(dec!(0), 1, -dec!(0)),
            ConnectionWindow::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_inverted_window() {
        let result = Flight::new(
            code("AAA"),
            code("BBB"),
            time("10:00"),
            time("11:00"),
            "TST1",
            fare(dec!(1), 1, dec!(1)),
            ConnectionWindow::hours(4, 1),
        );
        assert!(matches!(result, Err(DomainError::WindowOutOfRange(_))));
    }

    #[test]
    fn connects_to_requires_same_airport() {
        let first = flight("AAA", "BBB", "10:00", "11:00", 1);
        let elsewhere = flight("CCC", "DDD", "13:00", "14:00", 1);
        assert!(!first.connects_to(&elsewhere));
    }

    #[test]
    fn connects_to_requires_non_decreasing_bags() {
        let first = flight("AAA", "BBB", "10:00", "11:00", 1);
        assert!(first.connects_to(&flight("BBB", "CCC", "13:00", "14:00", 1)));
        assert!(first.connects_to(&flight("BBB", "CCC", "13:00", "14:00", 2)));
        assert!(!first.connects_to(&flight("BBB", "CCC", "13:00", "14:00", 0)));
    }

    #[test]
    fn display() {
        let f = flight("AAA", "BBB", "10:00", "11:00", 1);
        assert_eq!(
            f.to_string(),
            "TST1 AAA 2017-02-11T10:00:00 -> BBB 2017-02-11T11:00:00"
        );
    }
}
