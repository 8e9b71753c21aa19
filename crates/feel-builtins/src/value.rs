use feel_core::types::ValueKind;
use feel_temporal::{DateTimeValue, DurationValue, PropertyValue, TimeValue};
use rust_decimal::Decimal;

/// A dynamically typed FEEL value as passed to built-in functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeelValue {
    Null,
    Boolean(bool),
    Number(Decimal),
    String(String),
    DateTime(DateTimeValue),
    Time(TimeValue),
    Duration(DurationValue),
}

impl FeelValue {
    /// FEEL type name, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::DateTime(_) => ValueKind::DateTime.as_str(),
            Self::Time(_) => ValueKind::Time.as_str(),
            Self::Duration(_) => ValueKind::Duration.as_str(),
        }
    }

    #[must_use]
    pub const fn as_time(&self) -> Option<&TimeValue> {
        match self {
            Self::Time(time) => Some(time),
            _ => None,
        }
    }
}

impl From<&str> for FeelValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FeelValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FeelValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for FeelValue {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<Decimal> for FeelValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<DateTimeValue> for FeelValue {
    fn from(value: DateTimeValue) -> Self {
        Self::DateTime(value)
    }
}

impl From<TimeValue> for FeelValue {
    fn from(value: TimeValue) -> Self {
        Self::Time(value)
    }
}

impl From<DurationValue> for FeelValue {
    fn from(value: DurationValue) -> Self {
        Self::Duration(value)
    }
}

impl From<PropertyValue> for FeelValue {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Number(n) => Self::Number(Decimal::from(n)),
            PropertyValue::Duration(d) => Self::Duration(d),
            PropertyValue::Text(s) => Self::String(s),
            PropertyValue::Kind(kind) => Self::String(kind.as_str().to_string()),
        }
    }
}
