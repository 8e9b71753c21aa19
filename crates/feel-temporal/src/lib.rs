//! Temporal values, literal grammars and parsers backing the FEEL `time`
//! built-in.

pub mod context;
pub mod error;
pub mod parse;
pub mod properties;
pub mod timezone;
pub mod value;

pub use context::TemporalContext;
pub use error::{TemporalError, TemporalResult};
pub use properties::{PropertyValue, attach_properties};
pub use value::{DateTimeValue, DurationValue, Instant, TimeValue, WallClock};
