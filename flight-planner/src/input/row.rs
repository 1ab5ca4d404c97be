//! CSV row DTO.
//!
//! Maps one line of the flights file. Numeric columns are typed so that
//! the CSV reader rejects non-numeric values; airport codes and timestamps
//! are validated when the row is turned into a `Flight`. Prices are read
//! from their decimal text, never through a float.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{AirportCode, ConnectionWindow, DomainError, Fare, Flight, FlightTime};

/// One row of the flights file, matched to columns by header name.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRow {
    /// Departure airport code (e.g. "USM").
    pub source: String,

    /// Arrival airport code (e.g. "HKT").
    pub destination: String,

    /// Departure time, `YYYY-MM-DDTHH:MM:SS`.
    pub departure: String,

    /// Arrival time, `YYYY-MM-DDTHH:MM:SS`.
    pub arrival: String,

    /// Segment identifier (e.g. "PV404").
    pub flight_number: String,

    /// Ticket price without baggage.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,

    /// Number of bags that can be bought.
    pub bags_allowed: u32,

    /// Price of one bag.
    #[serde(with = "rust_decimal::serde::str")]
    pub bag_price: Decimal,
}

impl FlightRow {
    /// Validate the row and build a flight with the given window.
    pub fn into_flight(self, window: ConnectionWindow) -> Result<Flight, DomainError> {
        Flight::new(
            AirportCode::parse(&self.source)?,
            AirportCode::parse(&self.destination)?,
            FlightTime::parse(&self.departure)?,
            FlightTime::parse(&self.arrival)?,
            self.flight_number,
            Fare {
                price: self.price,
                bags_allowed: self.bags_allowed,
                bag_price: self.bag_price,
            },
            window,
        )
    }
}
