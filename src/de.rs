//! Serde helpers for FRED payload quirks
//!
//! The service formats timestamps as `YYYY-MM-DD HH:MM:SS-06` (offset hours
//! only) and reports missing observation values as a lone dot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// FRED/ALFRED represent an empty observation value as a dot.
pub(crate) const EMPTY_VALUE: &str = ".";

/// Parse a service timestamp like `2014-01-17 07:16:44-06`.
///
/// The offset lacks a minutes part; pad it before handing the string to
/// chrono, then normalize to UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let padded = format!("{raw}00");
    DateTime::parse_from_str(&padded, "%Y-%m-%d %H:%M:%S%z")
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp {raw:?}: {e}"))
}

/// Deserialize a service timestamp field into `DateTime<Utc>`.
pub(crate) fn fred_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Deserialize an observation value: a decimal string, or a dot for "no
/// value recorded".
pub(crate) fn observation_value<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == EMPTY_VALUE {
        return Ok(None);
    }
    Decimal::from_str(&raw)
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid observation value {raw:?}: {e}")))
}
