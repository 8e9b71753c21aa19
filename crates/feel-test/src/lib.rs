//! FEEL built-ins - integration test support.
//!
//! Re-exports the workspace crates and provides fixtures shared by the tests
//! under `tests/`.

#![expect(clippy::expect_used, reason = "Fixtures panic on invalid test literals")]

pub mod component {
    pub use feel_builtins::*;
    pub use feel_core::config;
    pub use feel_core::types;
    pub use feel_temporal::{
        DateTimeValue, DurationValue, TemporalContext, TemporalError, TimeValue, WallClock,
    };
}

use chrono::NaiveDate;
use component::config::TemporalConfig;
use component::{DateTimeValue, DurationValue, FeelValue, TemporalContext};

/// ## Summary
/// Builds a context with the default patterns in `default_tz`.
///
/// ## Panics
/// Panics if the default patterns fail to compile.
#[must_use]
pub fn context_in(default_tz: &str) -> TemporalContext {
    TemporalContext::from_config(&TemporalConfig::default().with_default_tz(default_tz))
        .expect("default patterns compile")
}

/// ## Summary
/// Builds a context in `default_tz` pinned to `reference_date`.
///
/// ## Panics
/// Panics if the default patterns fail to compile.
#[must_use]
pub fn context_on(default_tz: &str, reference_date: NaiveDate) -> TemporalContext {
    let config = TemporalConfig::default()
        .with_default_tz(default_tz)
        .with_reference_date(reference_date);
    TemporalContext::from_config(&config).expect("default patterns compile")
}

/// ## Summary
/// Builds a context with the shipped defaults (`Etc/UTC`).
#[must_use]
pub fn utc_context() -> TemporalContext {
    context_in(feel_core::constants::DEFAULT_TZ)
}

#[must_use]
pub fn number(n: i64) -> FeelValue {
    FeelValue::from(n)
}

/// ## Panics
/// Panics if `literal` is not a days-and-time duration.
#[must_use]
pub fn duration(literal: &str) -> FeelValue {
    let value: DurationValue = literal.parse().expect("valid duration literal");
    FeelValue::Duration(value)
}

/// ## Panics
/// Panics if `literal` is not a date and time.
#[must_use]
pub fn date_and_time(literal: &str) -> FeelValue {
    let value: DateTimeValue = literal.parse().expect("valid date and time literal");
    FeelValue::DateTime(value)
}
