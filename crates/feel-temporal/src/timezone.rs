//! Timezone resolution and wall-clock localization.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use std::str::FromStr;

/// Error during timezone conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Non-existent time during DST gap.
    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),
}

/// ## Summary
/// Resolves an IANA timezone identifier to a `chrono_tz::Tz`.
///
/// ## Errors
/// Returns `ConversionError::UnknownTimezone` if the identifier is not in the
/// IANA database.
pub fn resolve_zone(tzid: &str) -> Result<Tz, ConversionError> {
    Tz::from_str(tzid).map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))
}

/// ## Summary
/// Places a wall-clock date-time in `zone`.
///
/// A time that occurs twice (DST fold) resolves to the first occurrence.
///
/// ## Errors
/// Returns `ConversionError::NonExistentTime` if the wall-clock time falls in
/// a DST gap of `zone`.
pub fn localize<Z: TimeZone>(
    local: &NaiveDateTime,
    zone: &Z,
) -> Result<DateTime<Z>, ConversionError> {
    match zone.from_local_datetime(local) {
        LocalResult::None => Err(ConversionError::NonExistentTime(local.to_string())),
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _latest) => Ok(earliest),
    }
}
