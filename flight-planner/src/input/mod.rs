//! Loading flights from CSV.
//!
//! This is the validation boundary of the planner: every row is checked
//! here, so the search only ever sees well-formed flights.

mod error;
mod row;

pub use error::LoadError;
pub use row::FlightRow;

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{ConnectionWindow, Flight};

/// Columns every flights file must have, in the conventional order.
pub const COLUMNS: [&str; 8] = [
    "source",
    "destination",
    "departure",
    "arrival",
    "flight_number",
    "price",
    "bags_allowed",
    "bag_price",
];

/// Load flights from a CSV file.
pub fn load_path(path: &Path, window: ConnectionWindow) -> Result<Vec<Flight>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let flights = load_reader(file, window)?;

    info!(path = %path.display(), flights = flights.len(), "Loaded flights");
    Ok(flights)
}

/// Load flights from any CSV source.
///
/// Stops at the first malformed row; the error carries its 1-based row
/// number (header excluded).
///
/// # Examples
///
/// ```
/// use flight_planner::domain::ConnectionWindow;
/// use flight_planner::input::load_reader;
///
/// let csv = "\
/// source,destination,departure,arrival,flight_number,price,bags_allowed,bag_price
/// USM,HKT,2017-02-11T06:25:00,2017-02-11T07:25:00,PV404,24,1,9
/// ";
/// let flights = load_reader(csv.as_bytes(), ConnectionWindow::default()).unwrap();
/// assert_eq!(flights.len(), 1);
/// assert_eq!(flights[0].flight_number(), "PV404");
/// ```
pub fn load_reader<R: io::Read>(
    reader: R,
    window: ConnectionWindow,
) -> Result<Vec<Flight>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::Header)?;
    if let Some(missing) = COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(LoadError::MissingColumn(*missing));
    }

    let mut flights = Vec::new();
    for (i, result) in reader.deserialize::<FlightRow>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| LoadError::Csv { row, source })?;
        let flight = record
            .into_flight(window)
            .map_err(|source| LoadError::Record { row, source })?;
        flights.push(flight);
    }

    debug!(flights = flights.len(), "Parsed flights file");
    Ok(flights)
}
