/// FEEL temporal value kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Date,
    DateTime,
    Time,
    Duration,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateTime => "date and time",
            Self::Time => "time",
            Self::Duration => "duration",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only properties a temporal value can expose to path expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalProperty {
    Hour,
    Minute,
    Second,
    TimeOffset,
    Timezone,
    Type,
}

impl TemporalProperty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::TimeOffset => "time offset",
            Self::Timezone => "timezone",
            Self::Type => "type",
        }
    }

    /// ## Summary
    /// Resolves a property name as written in an expression.
    ///
    /// Accepts both `time offset` and the metadata spelling `time_offset`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "hour" => Some(Self::Hour),
            "minute" => Some(Self::Minute),
            "second" => Some(Self::Second),
            "time offset" | "time_offset" => Some(Self::TimeOffset),
            "timezone" => Some(Self::Timezone),
            "type" => Some(Self::Type),
            _ => None,
        }
    }
}

impl std::fmt::Display for TemporalProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties attached to every value produced by `time(...)`.
pub const TIME_PROPERTIES: &[TemporalProperty] = &[
    TemporalProperty::Hour,
    TemporalProperty::Minute,
    TemporalProperty::Second,
    TemporalProperty::TimeOffset,
    TemporalProperty::Timezone,
    TemporalProperty::Type,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_names_round_trip() {
        for property in TIME_PROPERTIES {
            assert_eq!(TemporalProperty::parse(property.as_str()), Some(*property));
        }
    }

    #[test]
    fn test_property_metadata_spelling() {
        assert_eq!(
            TemporalProperty::parse("time_offset"),
            Some(TemporalProperty::TimeOffset)
        );
        assert_eq!(TemporalProperty::parse("year"), None);
    }

    #[test]
    fn test_value_kind_display() {
        assert_eq!(ValueKind::DateTime.to_string(), "date and time");
        assert_eq!(ValueKind::Time.as_str(), "time");
    }
}
