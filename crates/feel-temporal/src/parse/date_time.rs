//! Date and time literals (`YYYY-MM-DDTHH:MM:SS[.f][Z|±HH:MM]`).

use chrono::{DateTime, NaiveDateTime};
use feel_core::error::{CoreError, CoreResult};

use crate::value::DateTimeValue;

const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// ## Summary
/// Parses a date and time literal, with or without a UTC offset.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the literal is not a valid date and time.
pub fn parse_date_time(s: &str) -> CoreResult<DateTimeValue> {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
        return Ok(DateTimeValue::new(zoned.naive_local(), Some(*zoned.offset())));
    }

    NaiveDateTime::parse_from_str(s, LOCAL_DATE_TIME_FORMAT)
        .map(|local| DateTimeValue::new(local, None))
        .map_err(|e| CoreError::ParseError(format!("invalid date and time {s:?}: {e}")))
}
