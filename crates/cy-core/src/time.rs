//! Rendering of server timestamps in the local timezone.

use chrono::{DateTime, Local, TimeZone};

use crate::errors::CoreError;

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z (%z)";

/// Convert an ISO-8601 / RFC 3339 timestamp to the local timezone and render
/// it as `YYYY-MM-DD HH:MM:SS <zone> (<offset>)`.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the input is not an RFC 3339 timestamp.
pub fn to_local_time(iso: &str) -> Result<String, CoreError> {
    to_time_zone(iso, &Local)
}

/// Same as [`to_local_time`] with an explicit target timezone.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the input is not an RFC 3339 timestamp.
pub fn to_time_zone<Tz>(iso: &str, tz: &Tz) -> Result<String, CoreError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let parsed = DateTime::parse_from_rfc3339(iso.trim())
        .map_err(|e| CoreError::Validation(format!("invalid timestamp '{iso}': {e}")))?;
    Ok(parsed.with_timezone(tz).format(LOCAL_FORMAT).to_string())
}
