//! Literal grammars and parsers for FEEL temporal values.

pub mod date_time;
pub mod duration;
pub mod grammar;
pub mod time;

pub use date_time::parse_date_time;
pub use duration::parse_duration;
pub use grammar::{IanaCaptures, IanaTimeParts, IsoTimeParts, TimeGrammar};
pub use time::{parse_iana_time, parse_time};
