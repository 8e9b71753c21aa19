use anyhow::Result;
use chrono::NaiveDate;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_TZ, TIME_IANA_TZ_PATTERN, TIME_ISO_8601_PATTERN};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub temporal: TemporalConfig,
}

/// Metadata consumed by the temporal built-ins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemporalConfig {
    /// IANA zone every produced time value is expressed in.
    pub default_tz: String,
    /// Calendar date time-of-day instants are anchored on. `None` anchors on
    /// the current UTC date, so zone rules in force today apply.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Pattern for ISO-8601 time literals. Must define the named groups
    /// `hour` and `minute`; `second`, `fraction` and `offset` are optional.
    pub time_iso_8601: String,
    /// Pattern for IANA-qualified time literals with exactly four groups:
    /// hour, minute, second, zone id.
    pub time_iana_tz: String,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            default_tz: DEFAULT_TZ.to_string(),
            reference_date: None,
            time_iso_8601: TIME_ISO_8601_PATTERN.to_string(),
            time_iana_tz: TIME_IANA_TZ_PATTERN.to_string(),
        }
    }
}

impl TemporalConfig {
    /// ## Summary
    /// Returns a copy of this configuration with a different default timezone.
    #[must_use]
    pub fn with_default_tz(mut self, default_tz: impl Into<String>) -> Self {
        self.default_tz = default_tz.into();
        self
    }

    /// ## Summary
    /// Returns a copy of this configuration pinned to a fixed reference date.
    #[must_use]
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = Some(reference_date);
        self
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `feel.toml` file and
    /// `FEEL_`-prefixed environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("temporal.default_tz", DEFAULT_TZ)?
            .set_default("temporal.time_iso_8601", TIME_ISO_8601_PATTERN)?
            .set_default("temporal.time_iana_tz", TIME_IANA_TZ_PATTERN)?
            // TOML file
            .add_source(config::File::with_name("feel.toml").required(false))
            // Env, e.g. FEEL_TEMPORAL__DEFAULT_TZ
            .add_source(
                config::Environment::with_prefix("FEEL")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        default_tz = %settings.temporal.default_tz,
        reference_date = ?settings.temporal.reference_date,
        "Temporal configuration loaded"
    );

    Ok(settings)
}
