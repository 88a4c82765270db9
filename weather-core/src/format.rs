//! Rendering of the forecast service's observation time.
//!
//! The service reports location-local wall time without a zone. It is read
//! as UTC and rendered in the viewer's zone, so the displayed clock depends
//! on the host, not on the forecast location.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

use crate::error::WeatherError;

const DISPLAY_FORMAT: &str = "%a, %B %-d, %Y, %H:%M:%S";

/// Parse a `YYYY-MM-DDTHH:MM` timestamp as UTC.
pub fn parse_observed_at(iso: &str) -> Result<DateTime<Utc>, WeatherError> {
    let with_zone = format!("{}:00Z", iso.trim());

    DateTime::parse_from_rfc3339(&with_zone)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WeatherError::InvalidTimestamp(format!("{iso}: {e}")))
}

/// Render `iso` in the given zone.
pub fn format_in<Tz>(iso: &str, tz: &Tz) -> Result<String, WeatherError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let utc = parse_observed_at(iso)?;
    Ok(utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
}

/// Render `iso` in the host's local zone.
pub fn format_local(iso: &str) -> Result<String, WeatherError> {
    format_in(iso, &Local)
}
