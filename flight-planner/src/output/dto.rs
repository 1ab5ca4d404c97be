//! Data transfer objects for the JSON result document.
//!
//! Every route is a single-entry object keyed by its label, and every price
//! is a single-entry object keyed by `"tickets + {k} bag/s"`. Amounts are
//! written as JSON numbers.

use rust_decimal::Decimal;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::domain::{AirportCode, Flight, FlightTime};
use crate::planner::{PricedRoute, round_cents};

/// All priced routes, in discovery order.
#[derive(Debug, Default, Serialize)]
pub struct RoutesDocument {
    pub routes: Vec<RouteResult>,
}

/// One priced route.
#[derive(Debug)]
pub struct RouteResult {
    /// Leg indices joined with `->`
    pub label: String,

    /// Legs in travel order
    pub flights: Vec<FlightResult>,

    /// Price for each number of bags, starting at zero
    pub prices: Vec<PriceEntry>,
}

/// A flight leg with every timestamp rendered as ISO-8601.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub source: AirportCode,
    pub destination: AirportCode,
    pub departure: FlightTime,
    pub arrival: FlightTime,
    pub flight_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub bags_allowed: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub bag_price: Decimal,

    /// Earliest departure of a connecting flight
    pub min_connect_departure: FlightTime,

    /// Latest departure of a connecting flight
    pub max_connect_departure: FlightTime,
}

/// Route price with a given number of checked bags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceEntry {
    pub bags: u32,

    /// Rounded to cents
    pub total: Decimal,
}

/// Key of a price entry in the JSON document.
pub fn price_key(bags: u32) -> String {
    format!("tickets + {bags} bag/s")
}

// Conversion implementations

impl RouteResult {
    /// Create from a priced route and the dataset it was found in.
    pub fn from_priced(flights: &[Flight], priced: &PricedRoute) -> Self {
        let legs: Vec<FlightResult> = priced
            .route()
            .legs()
            .iter()
            .map(|idx| FlightResult::from_flight(&flights[idx.0]))
            .collect();

        let prices: Vec<PriceEntry> = priced
            .price_table()
            .into_iter()
            .map(|(bags, total)| PriceEntry {
                bags,
                total: round_cents(total),
            })
            .collect();

        Self {
            label: priced.route().label(),
            flights: legs,
            prices,
        }
    }
}

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            source: flight.source().clone(),
            destination: flight.destination().clone(),
            departure: flight.departure(),
            arrival: flight.arrival(),
            flight_number: flight.flight_number().to_string(),
            price: flight.price(),
            bags_allowed: flight.bags_allowed(),
            bag_price: flight.bag_price(),
            min_connect_departure: flight.min_connect_departure(),
            max_connect_departure: flight.max_connect_departure(),
        }
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct Amount(#[serde(with = "rust_decimal::serde::float")] Decimal);

#[derive(Serialize)]
struct RouteBody<'a> {
    flights: &'a [FlightResult],
    prices: &'a [PriceEntry],
}

impl Serialize for RouteResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.label,
            &RouteBody {
                flights: &self.flights,
                prices: &self.prices,
            },
        )?;
        map.end()
    }
}

impl Serialize for PriceEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&price_key(self.bags), &Amount(self.total))?;
        map.end()
    }
}
