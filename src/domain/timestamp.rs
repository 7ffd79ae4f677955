//! Sortable timestamp format for persisted entries
//!
//! Timestamps are stored as RFC 3339 UTC with exactly three fractional
//! digits and a `Z` suffix, e.g. `2026-10-19T08:15:30.123Z`. With a fixed
//! width, lexicographic order equals chronological order.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Current time truncated to millisecond precision.
pub fn now() -> DateTime<Utc> {
    truncate_millis(Utc::now())
}

/// Drop sub-millisecond precision so values survive a persist round trip.
pub fn truncate_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

/// Smallest representable step between two persisted timestamps.
pub fn tick() -> Duration {
    Duration::milliseconds(1)
}

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

/// Accepts any RFC 3339 timestamp, not only the millisecond form.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| truncate_millis(ts.with_timezone(&Utc)))
        .map_err(serde::de::Error::custom)
}
