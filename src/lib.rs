//! Finds the best priced station to trade a commodity near a star system,
//! using the commodity search on inara.cz.

use log::warn;

pub mod config;
pub mod normalize;
pub mod selector;
pub mod sources;
pub mod transport;

pub use selector::{select_best, Constraints};
pub use sources::{
    inara::{
        types::{PadSize, Record},
        Inara,
    },
    PriceSource, PricingError,
};

/// Lists every station trading `commodity` around `reference_system`.
///
/// Lookup failures are logged and reported as an empty list.
pub async fn get_records<S: PriceSource>(
    source: &S,
    commodity: &str,
    reference_system: &str,
) -> Vec<Record> {
    match source.get_records(commodity, reference_system).await {
        Ok(records) => records,
        Err(e) => {
            warn!(
                "No records for {} near {}: {}",
                commodity, reference_system, e
            );
            Vec::new()
        }
    }
}

/// Looks up the stations and returns the best one meeting `constraints`
pub async fn find_best_price<S: PriceSource>(
    source: &S,
    commodity: &str,
    reference_system: &str,
    constraints: &Constraints,
) -> Option<Record> {
    let records = get_records(source, commodity, reference_system).await;

    select_best(&records, constraints).cloned()
}
