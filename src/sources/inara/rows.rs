use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::types::{PadSize, Record};
use crate::normalize::{clean_text, parse_age, parse_quantity};

static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.+?)</tr>").unwrap());
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").unwrap());
static MORE_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"more than (\d+)").unwrap());

// column layout of the goods table
const COL_LOCATION: usize = 0;
const COL_PAD: usize = 1;
const COL_DISTANCE: usize = 3;
const COL_QUANTITY: usize = 4;
const COL_PRICE: usize = 5;
const COL_UPDATED: usize = 7;

/// Splits a results page into records, one per table row.
///
/// Rows that can't be decomposed (header rows, missing cells, unknown pad
/// size) are skipped without affecting the rest of the page.
pub fn parse_records(html: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut skipped = 0;

    for row in ROW.captures_iter(html) {
        match parse_row(&row[1]) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} rows of the goods table", skipped);
    }

    records
}

fn parse_row(row: &str) -> Option<Record> {
    let cells: Vec<&str> = CELL
        .captures_iter(row)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    if cells.len() <= COL_UPDATED {
        debug!("Row has {} cells, skipping", cells.len());
        return None;
    }

    let location = clean_text(cells[COL_LOCATION]);
    let Some((system, station)) = location.split_once('|') else {
        debug!("No system/station separator in {:?}", location);
        return None;
    };

    let pad_text = clean_text(cells[COL_PAD]);
    let Some(pad) = PadSize::from_letter(&pad_text) else {
        debug!("Unknown pad size {:?} for {}", pad_text, location);
        return None;
    };

    let quantity_cell = cells[COL_QUANTITY];
    let quantity = number_or_zero(quantity_cell, "quantity");
    let (max_quantity, limited_demand) = match MORE_THAN
        .captures(quantity_cell)
        .and_then(|c| c[1].parse::<u64>().ok())
    {
        Some(floor) => (floor, true),
        None => (quantity, false),
    };

    let updated = clean_text(cells[COL_UPDATED]);
    let updated_secs = parse_age(&updated);

    Some(Record {
        system: system.trim().to_owned(),
        station: station.trim().to_owned(),
        pad,
        distance: u32::try_from(number_or_zero(cells[COL_DISTANCE], "distance"))
            .unwrap_or(u32::MAX),
        quantity,
        max_quantity,
        limited_demand,
        price: number_or_zero(cells[COL_PRICE], "price"),
        updated,
        updated_secs,
    })
}

fn number_or_zero(cell: &str, column: &str) -> u64 {
    match parse_quantity(cell) {
        Some(value) => value,
        None => {
            debug!("Could not parse {} from {:?}, using 0", column, cell);
            0
        }
    }
}
