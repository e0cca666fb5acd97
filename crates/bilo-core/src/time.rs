//! UTC timestamp handling.
//!
//! Every timestamp the services store or emit is rendered as RFC 3339 UTC
//! with microsecond precision and a `Z` suffix, so lexical order of the
//! rendered strings matches chronological order.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Serializer;

use crate::error::{BiloError, Result};

/// Naive layouts accepted on input; interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Render in canonical form.
pub fn canonical(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse an ISO-8601 timestamp. Offsets are normalized to UTC; naive
/// values are taken as UTC.
pub fn parse(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(BiloError::Validation(format!(
        "invalid timestamp '{s}': expected ISO-8601 (e.g. 2024-05-01T12:00:00Z)"
    )))
}

/// Resolve an optional submitted timestamp, defaulting to `now`.
pub fn resolve(submitted: Option<&str>, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    match submitted {
        Some(s) => parse(s),
        None => Ok(now),
    }
}

/// `serialize_with` adapter for canonical output.
pub fn serialize_canonical<S>(ts: &DateTime<Utc>, ser: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    ser.serialize_str(&canonical(ts))
}
