//! Result assembly and JSON rendering.

mod dto;

pub use dto::{FlightResult, PriceEntry, RouteResult, RoutesDocument, price_key};

use std::io;

use crate::domain::{Flight, Route};
use crate::planner::PricedRoute;

/// Price every route and build the output document.
///
/// Routes keep the order they are given in; none are dropped.
pub fn assemble(flights: &[Flight], routes: Vec<Route>) -> RoutesDocument {
    let routes = routes
        .into_iter()
        .map(|route| {
            let priced = PricedRoute::new(flights, route);
            RouteResult::from_priced(flights, &priced)
        })
        .collect();

    RoutesDocument { routes }
}

/// Write the document as JSON, pretty-printed unless `compact` is set.
pub fn write_json<W: io::Write>(
    document: &RoutesDocument,
    mut writer: W,
    compact: bool,
) -> serde_json::Result<()> {
    if compact {
        serde_json::to_writer(&mut writer, document)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, document)?;
    }
    writeln!(writer).map_err(serde_json::Error::io)
}
