use chrono::{DateTime, Offset, Timelike};
use chrono_tz::Tz;
use feel_core::types::{TemporalProperty, ValueKind};
use std::fmt;

use super::{DurationValue, WallClock};
use crate::properties::PropertyValue;

/// A FEEL time: a time of day anchored on the reference date and expressed in
/// the default timezone.
///
/// Built by [`crate::attach_properties`]; only the registered properties are
/// visible through [`TimeValue::property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValue {
    instant: DateTime<Tz>,
    properties: &'static [TemporalProperty],
}

impl TimeValue {
    pub(crate) fn new(instant: DateTime<Tz>, properties: &'static [TemporalProperty]) -> Self {
        Self {
            instant,
            properties,
        }
    }

    #[must_use]
    pub const fn instant(&self) -> &DateTime<Tz> {
        &self.instant
    }

    /// UTC offset in effect for this value.
    #[must_use]
    pub fn time_offset(&self) -> DurationValue {
        DurationValue::from_seconds(self.instant.offset().fix().local_minus_utc())
    }

    /// IANA identifier of the zone this value is expressed in.
    #[must_use]
    pub fn timezone(&self) -> &'static str {
        self.instant.timezone().name()
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        ValueKind::Time
    }

    #[must_use]
    pub const fn is_time(&self) -> bool {
        true
    }

    #[must_use]
    pub const fn properties(&self) -> &'static [TemporalProperty] {
        self.properties
    }

    /// ## Summary
    /// Reads a property by its expression name, e.g. `hour` or `time offset`.
    ///
    /// Returns `None` for names that are not attached to this value.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        TemporalProperty::parse(name).and_then(|property| self.get(property))
    }

    /// ## Summary
    /// Reads an attached property.
    #[must_use]
    pub fn get(&self, property: TemporalProperty) -> Option<PropertyValue> {
        if !self.properties.contains(&property) {
            return None;
        }

        Some(match property {
            TemporalProperty::Hour => PropertyValue::Number(self.hour()),
            TemporalProperty::Minute => PropertyValue::Number(self.minute()),
            TemporalProperty::Second => PropertyValue::Number(self.second()),
            TemporalProperty::TimeOffset => PropertyValue::Duration(self.time_offset()),
            TemporalProperty::Timezone => PropertyValue::Text(self.timezone().to_string()),
            TemporalProperty::Type => PropertyValue::Kind(self.kind()),
        })
    }
}

impl WallClock for TimeValue {
    fn hour(&self) -> u32 {
        self.instant.hour()
    }

    fn minute(&self) -> u32 {
        self.instant.minute()
    }

    fn second(&self) -> u32 {
        self.instant.second()
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}",
            self.instant.format("%H:%M:%S%.f"),
            self.timezone()
        )
    }
}

impl serde::Serialize for TimeValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
