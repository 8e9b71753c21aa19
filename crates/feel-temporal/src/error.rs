use feel_core::error::CoreError;
use thiserror::Error;

/// Accepted string shapes, quoted in format errors.
const TIME_STRING_SHAPES: &str =
    r#"an ISO-8601 time such as "23:59:00z" or an IANA-qualified time such as "00:01:00@Etc/UTC""#;

/// Errors raised while constructing temporal values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error(
        "Invalid arguments for \"time\": got {found}. Expected one of:\n- time(\"23:59:00z\") or time(\"00:01:00@Etc/UTC\")\n- time(date and time)\n- time(hour, minute, second[, offset])"
    )]
    InvalidArguments { found: String },

    #[error(
        "Invalid time format {input:?}: {reason}. Expected {expected}",
        expected = TIME_STRING_SHAPES
    )]
    InvalidTimeFormat { input: String, reason: String },

    #[error(
        "Malformed IANA time {input:?}: one or more parts are missing ({})",
        .missing.join(", ")
    )]
    MalformedIanaInput {
        input: String,
        missing: Vec<&'static str>,
    },

    #[error("Invalid IANA time {input:?}: {reason}")]
    InvalidIanaTime { input: String, reason: String },

    #[error("Cannot extract a time from date and time: {reason}")]
    ExtractionError { reason: String },

    #[error(
        "Type mismatch: the fourth argument of \"time\" must be a duration or null, got {found}"
    )]
    TypeMismatch { found: &'static str },

    #[error("Invalid time components: {reason}")]
    InvalidTimeComponents { reason: String },

    #[error("Invalid default timezone {default_tz:?} in configuration: {reason}")]
    ConfigurationError { default_tz: String, reason: String },

    #[error("Unknown built-in function: {0}")]
    UnknownFunction(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type TemporalResult<T> = std::result::Result<T, TemporalError>;
