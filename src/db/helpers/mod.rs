use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Timelike};
use rusqlite::types::ValueRef;

/// Format a local wall-clock time the way the capture pipeline writes its
/// `timestamp` column: seconds precision, with microseconds only when non-zero.
pub fn format_iso(value: &NaiveDateTime) -> String {
    if value.nanosecond() / 1_000 == 0 {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Convert a stored `unix_timestamp` into a local ISO-8601 string.
pub fn unix_to_iso(seconds: f64) -> Result<String> {
    let whole = seconds.floor();
    let micros = ((seconds - whole) * 1_000_000.0).round() as i64;
    let base = DateTime::from_timestamp(whole as i64, 0)
        .ok_or_else(|| anyhow!("unix timestamp {seconds} is out of range"))?;
    let utc = base + Duration::microseconds(micros);
    Ok(format_iso(&Local.from_utc_datetime(&utc.naive_utc()).naive_local()))
}

pub fn now_iso() -> String {
    format_iso(&Local::now().naive_local())
}

/// Parse a request timestamp into local wall-clock time. Accepts the capture
/// format (optionally without seconds or with a space separator) and RFC 3339
/// strings carrying an offset.
pub fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Read a metric cell as a number. NULL and non-numeric cells are missing.
pub fn value_as_f64(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Integer(v) => Some(v as f64),
        ValueRef::Real(v) => Some(v),
        ValueRef::Text(raw) => std::str::from_utf8(raw)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

pub fn value_as_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(raw) => Some(String::from_utf8_lossy(raw).into_owned()),
        ValueRef::Integer(v) => Some(v.to_string()),
        ValueRef::Real(v) => Some(v.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}
