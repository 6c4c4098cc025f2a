use log::debug;

use crate::sources::inara::types::{PadSize, Record};

/// Limited demand figures older than this are ignored (6 hours)
pub const STALE_LIMITED_DEMAND_SECS: u64 = 21_600;

/// Requirements a station must meet to be considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Light years from the reference system
    pub max_distance: u32,
    pub min_pad: PadSize,
    pub min_quantity: u64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_distance: u32::MAX,
            min_pad: PadSize::Small,
            min_quantity: 0,
        }
    }
}

impl Constraints {
    pub fn accepts(&self, record: &Record) -> bool {
        if record.limited_demand && record.updated_secs > STALE_LIMITED_DEMAND_SECS {
            return false;
        }

        record.distance <= self.max_distance
            && record.max_quantity >= self.min_quantity
            && record.pad >= self.min_pad
    }
}

/// Picks the highest priced record that meets the constraints.
///
/// On equal prices the earlier record wins. Records priced at 0 are never
/// returned, so `None` is the only "nothing found" answer.
pub fn select_best<'a>(records: &'a [Record], constraints: &Constraints) -> Option<&'a Record> {
    let mut best: Option<&Record> = None;

    for record in records {
        if !constraints.accepts(record) {
            debug!("Filtered out {}", record);
            continue;
        }

        if record.price > best.map_or(0, |b| b.price) {
            best = Some(record);
        }
    }

    best
}
