use feel_core::error::CoreError;
use feel_core::types::ValueKind;
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3600;
const SECONDS_PER_DAY: u32 = 86_400;

/// A FEEL days-and-time duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DurationValue {
    pub negative: bool,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationValue {
    /// Creates a zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// ## Summary
    /// Splits a signed number of seconds into days, hours, minutes and seconds.
    #[must_use]
    pub const fn from_seconds(total: i32) -> Self {
        let magnitude = total.unsigned_abs();
        Self {
            negative: total < 0,
            days: magnitude / SECONDS_PER_DAY,
            hours: magnitude % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: magnitude % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: magnitude % SECONDS_PER_MINUTE,
        }
    }

    /// Signed length in seconds.
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        let magnitude = i64::from(self.days) * i64::from(SECONDS_PER_DAY)
            + i64::from(self.hours) * i64::from(SECONDS_PER_HOUR)
            + i64::from(self.minutes) * i64::from(SECONDS_PER_MINUTE)
            + i64::from(self.seconds);
        if self.negative { -magnitude } else { magnitude }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        ValueKind::Duration
    }

    #[must_use]
    pub const fn is_duration(&self) -> bool {
        true
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

impl FromStr for DurationValue {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_duration(s)
    }
}

impl serde::Serialize for DurationValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seconds_splits_components() {
        let duration = DurationValue::from_seconds(-(5 * 3600 + 30 * 60));

        assert!(duration.negative);
        assert_eq!((duration.days, duration.hours, duration.minutes), (0, 5, 30));
        assert_eq!(duration.total_seconds(), -19_800);
    }

    #[test]
    fn test_display() {
        assert_eq!(DurationValue::zero().to_string(), "PT0S");
        assert_eq!(DurationValue::from_seconds(93_784).to_string(), "P1DT2H3M4S");
        assert_eq!(DurationValue::from_seconds(-3600).to_string(), "-PT1H");
    }
}
