//! Read-only evaluation context for temporal built-ins.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use feel_core::config::TemporalConfig;
use feel_core::error::CoreResult;
use feel_core::types::TIME_PROPERTIES;

use crate::error::{TemporalError, TemporalResult};
use crate::parse::TimeGrammar;
use crate::properties::attach_properties;
use crate::timezone::resolve_zone;
use crate::value::{Instant, TimeValue};

/// Configuration compiled once at startup and shared by every call.
///
/// The default timezone is kept as configured and only resolved when a value
/// is normalized, so a bad identifier surfaces as
/// [`TemporalError::ConfigurationError`] on use. Without a configured
/// reference date, times are anchored on the current UTC date.
#[derive(Debug, Clone)]
pub struct TemporalContext {
    default_tz: String,
    reference_date: Option<NaiveDate>,
    grammar: TimeGrammar,
}

impl TemporalContext {
    /// ## Summary
    /// Builds a context from the temporal metadata.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if a grammar pattern is invalid.
    pub fn from_config(config: &TemporalConfig) -> CoreResult<Self> {
        let grammar = TimeGrammar::new(&config.time_iso_8601, &config.time_iana_tz)?;
        tracing::debug!(
            default_tz = %config.default_tz,
            reference_date = ?config.reference_date,
            "Temporal context initialized"
        );

        Ok(Self {
            default_tz: config.default_tz.clone(),
            reference_date: config.reference_date,
            grammar,
        })
    }

    #[must_use]
    pub fn default_tz(&self) -> &str {
        &self.default_tz
    }

    /// ## Summary
    /// Returns the configured reference date, or today's UTC date if none is
    /// configured.
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    #[must_use]
    pub fn grammar(&self) -> &TimeGrammar {
        &self.grammar
    }

    /// ## Summary
    /// Places a time of day on the reference date.
    #[must_use]
    pub fn anchor(&self, time: NaiveTime) -> NaiveDateTime {
        self.reference_date().and_time(time)
    }

    /// ## Summary
    /// Resolves the configured default timezone.
    ///
    /// ## Errors
    /// Returns `TemporalError::ConfigurationError` naming the configured value
    /// if it is not an IANA zone.
    pub fn default_zone(&self) -> TemporalResult<Tz> {
        resolve_zone(&self.default_tz).map_err(|e| TemporalError::ConfigurationError {
            default_tz: self.default_tz.clone(),
            reason: e.to_string(),
        })
    }

    /// ## Summary
    /// Re-expresses an instant in the default timezone and attaches the time
    /// properties.
    ///
    /// ## Errors
    /// Returns `TemporalError::ConfigurationError` if the default timezone does
    /// not resolve.
    pub fn normalize(&self, instant: &Instant) -> TemporalResult<TimeValue> {
        let zone = self.default_zone()?;
        Ok(attach_properties(instant.with_timezone(&zone), TIME_PROPERTIES))
    }
}
