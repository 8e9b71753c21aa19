use chrono::{FixedOffset, NaiveDateTime, Timelike};
use feel_core::error::CoreError;
use feel_core::types::ValueKind;
use std::str::FromStr;

use super::WallClock;

/// A FEEL date and time: a local date-time with an optional UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeValue {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl DateTimeValue {
    #[must_use]
    pub const fn new(local: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self { local, offset }
    }

    #[must_use]
    pub const fn local(&self) -> NaiveDateTime {
        self.local
    }

    #[must_use]
    pub const fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        ValueKind::DateTime
    }

    #[must_use]
    pub const fn is_date_time(&self) -> bool {
        true
    }
}

impl WallClock for DateTimeValue {
    fn hour(&self) -> u32 {
        self.local.hour()
    }

    fn minute(&self) -> u32 {
        self.local.minute()
    }

    fn second(&self) -> u32 {
        self.local.second()
    }
}

impl FromStr for DateTimeValue {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_date_time(s)
    }
}
