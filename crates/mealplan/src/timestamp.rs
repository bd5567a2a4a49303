//! Serde adapter between the in-memory `NaiveDate` and the persisted
//! ISO-8601 timestamp string. Only the local calendar date carries meaning;
//! the time-of-day portion is local midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let midnight = date.and_time(NaiveTime::MIN);
    let rendered = match Local.from_local_datetime(&midnight).earliest() {
        Some(instant) => instant.to_rfc3339(),
        // local midnight falls in a DST gap: keep the naive rendering
        None => format!("{date}T00:00:00"),
    };
    serializer.serialize_str(&rendered)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    // Full timestamp with offset ("2025-08-24T00:00:00-07:00", trailing "Z"),
    // taken as the local calendar date of that instant.
    if let Ok(instant) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(instant.with_timezone(&Local).date_naive());
    }
    // Offset-less timestamp or a bare date, read as already-local.
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive.date());
    }
    raw.parse::<NaiveDate>().map_err(serde::de::Error::custom)
}
