//! Property attachment for produced temporal values.

use chrono::DateTime;
use chrono_tz::Tz;
use feel_core::types::{TemporalProperty, ValueKind};

use crate::value::{DurationValue, TimeValue};

/// The value of a read-only property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Number(u32),
    Duration(DurationValue),
    Text(String),
    Kind(ValueKind),
}

/// ## Summary
/// Wraps a normalized instant into a [`TimeValue`] exposing `properties`.
#[must_use]
pub fn attach_properties(
    instant: DateTime<Tz>,
    properties: &'static [TemporalProperty],
) -> TimeValue {
    TimeValue::new(instant, properties)
}
