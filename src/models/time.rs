//! Parsing of client-supplied booking times.
//!
//! The store keeps a single naive timeline. Any offset on the input is dropped and
//! the wall-clock value is kept as written, so `10:00Z` and `10:00+02:00` both
//! become `10:00`.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Storage format for `booking_time` columns.
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Rendering used by the public projection.
pub const PUBLIC_FORMAT: &str = "%Y-%m-%d %H:%M";

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, thiserror::Error)]
#[error("invalid booking_time: {0:?}")]
pub struct TimeParseError(pub String);

pub fn normalize_booking_time(input: &str) -> Result<NaiveDateTime, TimeParseError> {
    let trimmed = input.trim();
    // `%z` has no spelling for the UTC designator.
    let zulu;
    let s = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => {
            zulu = format!("{rest}+00:00");
            zulu.as_str()
        }
        None => trimmed,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.naive_local());
        }
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| TimeParseError(input.to_string()))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    normalize_booking_time(&raw).map_err(serde::de::Error::custom)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => normalize_booking_time(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
