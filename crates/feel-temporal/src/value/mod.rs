//! FEEL temporal value types.

mod date_time;
mod duration;
mod time;

pub use date_time::DateTimeValue;
pub use duration::DurationValue;
pub use time::TimeValue;

use chrono::{DateTime, FixedOffset};

/// A timezone-aware point in time used before normalization.
pub type Instant = DateTime<FixedOffset>;

/// A value that reads as a wall-clock time of day.
pub trait WallClock {
    fn hour(&self) -> u32;
    fn minute(&self) -> u32;
    fn second(&self) -> u32;
}
