use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+([a-z]+?)s?\s+ago").unwrap());

/// Removes html tags from the fragment
pub fn strip_tags(raw: &str) -> String {
    TAG.replace_all(raw, "").into_owned()
}

/// Strips markup and any non-ascii characters, then trims the result.
///
/// The site pads names with icons and non-breaking spaces, none of which
/// belong in a station or system name.
pub fn clean_text(raw: &str) -> String {
    strip_tags(raw)
        .chars()
        .filter(|c| c.is_ascii())
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Parses a numeric cell such as `300,100`, `42ly` or `1,234 Cr` into an integer.
///
/// Everything except digits and the decimal point is dropped before parsing,
/// so thousands separators and unit suffixes are ignored. The value is rounded
/// to the nearest integer. Returns `None` when nothing numeric is left.
pub fn parse_quantity(raw: &str) -> Option<u64> {
    let digits: String = strip_tags(raw)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let value: f64 = digits.parse().ok()?;

    Some(value.round() as u64)
}

/// Converts a relative timestamp like `2 hours ago` into seconds.
///
/// Only minutes, hours and days are understood, anything else is 0.
pub fn parse_age(text: &str) -> u64 {
    let Some(caps) = AGE.captures(text) else {
        return 0;
    };

    let Ok(amount) = caps[1].parse::<u64>() else {
        return 0;
    };

    let factor = match caps[2].to_ascii_lowercase().as_str() {
        "minute" => 60,
        "hour" => 3_600,
        "day" => 86_400,
        _ => 0,
    };

    amount.saturating_mul(factor)
}
