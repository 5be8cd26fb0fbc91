//! Byte sizes from scraped text, with thousands/decimal comma resolution.

pub mod units;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use units::UnitTable;

const DEFAULT_UNIT: &str = "byte";

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<size>-?[\d.,]+)\s*(?P<unit>[a-zA-Z]*)").unwrap());
/// `1,234,567.89`: commas group thousands.
static THOUSANDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})+(?:\.\d+)?$").unwrap());
/// `12,34`: comma is the decimal point.
static DECIMAL_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+,\d{2}$").unwrap());

/// Parses a leading "<number> <unit>" into bytes.
///
/// `from_unit` overrides the unit written in the text; with neither, the
/// number is taken as bytes. Fractional bytes are truncated toward zero.
/// Returns `None` when the text does not start with a number, the number
/// does not parse, the unit is unknown, or the result does not fit an `i64`.
pub fn parse_byte_size(text: &str, from_unit: Option<&str>, units: &UnitTable) -> Option<i64> {
    let caps = SIZE_RE.captures(text.trim_start())?;
    let raw = caps.name("size")?.as_str();
    let value = parse_magnitude(raw)?;

    let unit = match from_unit {
        Some(u) => u,
        None => caps
            .name("unit")
            .map(|m| m.as_str())
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_UNIT),
    };

    let bytes = value * units.bytes_per(unit)?;
    if !bytes.is_finite() || bytes >= i64::MAX as f64 || bytes <= i64::MIN as f64 {
        return None;
    }
    Some(bytes as i64)
}

/// Resolves separators in a numeric literal and parses it.
fn parse_magnitude(raw: &str) -> Option<f64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let normalized = if THOUSANDS_RE.is_match(digits) {
        digits.replace(',', "")
    } else if DECIMAL_COMMA_RE.is_match(digits) {
        digits.replace(',', ".")
    } else {
        digits.to_string()
    };

    let value: f64 = normalized.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Remaining account traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    Unlimited,
    Bytes(i64),
}

/// Parses a traffic figure: "Unlimited" or a size as in [`parse_byte_size`].
pub fn parse_traffic(text: &str, from_unit: Option<&str>, units: &UnitTable) -> Option<Traffic> {
    let trimmed = text.trim_start();
    let head: String = trimmed.chars().take(9).collect();
    if head.eq_ignore_ascii_case("unlimited") {
        return Some(Traffic::Unlimited);
    }
    parse_byte_size(trimmed, from_unit, units).map(Traffic::Bytes)
}
