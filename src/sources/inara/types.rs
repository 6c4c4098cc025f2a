use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::sources::PricingError;

/// Landing pad size a station supports, ordered Small < Medium < Large
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PadSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl PadSize {
    /// Maps the single letter shown in the pad column
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.to_ascii_lowercase().as_str() {
            "s" => Some(Self::Small),
            "m" => Some(Self::Medium),
            "l" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::Small => 'S',
            Self::Medium => 'M',
            Self::Large => 'L',
        }
    }
}

impl FromStr for PadSize {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(pad) = Self::from_letter(trimmed) {
            return Ok(pad);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(PricingError::InvalidPad(s.to_owned())),
        }
    }
}

impl fmt::Display for PadSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One station offering the commodity, as listed on the results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub system: String,
    pub station: String,
    pub pad: PadSize,
    /// Light years from the reference system
    pub distance: u32,
    pub quantity: u64,
    /// Equal to `quantity` unless the site only reports "more than N"
    pub max_quantity: u64,
    pub limited_demand: bool,
    pub price: u64,
    /// Relative timestamp as displayed, e.g. `3 hours ago`
    pub updated: String,
    pub updated_secs: u64,
}

impl Record {
    /// Approximate time of the last price update, relative to `now`
    pub fn updated_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let secs = i64::try_from(self.updated_secs).unwrap_or(i64::MAX);

        Duration::try_seconds(secs)
            .and_then(|age| now.checked_sub_signed(age))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} [{}] - {} ly - {} Cr",
            self.system, self.station, self.pad, self.distance, self.price
        )
    }
}
