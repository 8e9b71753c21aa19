//! Pattern matchers for the two accepted time literal shapes.
//!
//! Matchers only recognize shape. Range checks and zone lookups belong to the
//! parsers in [`super::time`].

use feel_core::constants::IANA_CAPTURE_GROUPS;
use feel_core::error::{CoreError, CoreResult};
use regex_lite::Regex;

/// Named groups an ISO-8601 time pattern must define.
const REQUIRED_ISO_GROUPS: [&str; 2] = ["hour", "minute"];

/// Compiled time literal grammars.
#[derive(Debug, Clone)]
pub struct TimeGrammar {
    iso_8601: Regex,
    iana_tz: Regex,
}

/// Pieces of a literal matched by the ISO-8601 grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoTimeParts<'t> {
    pub hour: &'t str,
    pub minute: &'t str,
    pub second: Option<&'t str>,
    pub fraction: Option<&'t str>,
    /// `Z`, `z` or `±HH[:]MM`; absent for a local time.
    pub offset: Option<&'t str>,
}

/// Groups captured by the IANA grammar. Empty groups are reported as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IanaCaptures<'t> {
    pub hour: Option<&'t str>,
    pub minute: Option<&'t str>,
    pub second: Option<&'t str>,
    pub zone: Option<&'t str>,
}

/// An IANA-qualified literal with every group present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IanaTimeParts<'t> {
    pub hour: &'t str,
    pub minute: &'t str,
    pub second: &'t str,
    pub zone: &'t str,
}

impl TimeGrammar {
    /// ## Summary
    /// Compiles both grammars and checks their group layout.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if a pattern does not compile,
    /// the ISO-8601 pattern lacks the `hour` or `minute` group, or the IANA
    /// pattern does not have exactly four capture groups.
    pub fn new(iso_8601: &str, iana_tz: &str) -> CoreResult<Self> {
        let iso_8601 = compile("time_iso_8601", iso_8601)?;
        for group in REQUIRED_ISO_GROUPS {
            if !iso_8601.capture_names().flatten().any(|name| name == group) {
                return Err(CoreError::InvalidConfiguration(format!(
                    "time_iso_8601 pattern has no `{group}` group"
                )));
            }
        }

        let iana_tz = compile("time_iana_tz", iana_tz)?;
        // Group 0 is the whole match.
        let groups = iana_tz.captures_len() - 1;
        if groups != IANA_CAPTURE_GROUPS {
            return Err(CoreError::InvalidConfiguration(format!(
                "time_iana_tz pattern must have {IANA_CAPTURE_GROUPS} capture groups, found {groups}"
            )));
        }

        Ok(Self { iso_8601, iana_tz })
    }

    /// ## Summary
    /// Matches `text` against the ISO-8601 time grammar.
    ///
    /// Returns `None` when the literal does not have the ISO-8601 shape.
    #[must_use]
    pub fn match_iso<'t>(&self, text: &'t str) -> Option<IsoTimeParts<'t>> {
        let caps = self.iso_8601.captures(text)?;
        let group = |name: &str| caps.name(name).map(|m| m.as_str());

        let parts = IsoTimeParts {
            hour: group("hour")?,
            minute: group("minute")?,
            second: group("second"),
            fraction: group("fraction"),
            offset: group("offset"),
        };
        tracing::trace!(?parts, "ISO-8601 time matched");
        Some(parts)
    }

    /// ## Summary
    /// Matches `text` against the IANA-qualified time grammar.
    ///
    /// Returns `None` when the literal does not have the IANA shape. A literal
    /// with the right shape but empty groups still matches; check
    /// [`IanaCaptures::complete`].
    #[must_use]
    pub fn match_iana<'t>(&self, text: &'t str) -> Option<IanaCaptures<'t>> {
        let caps = self.iana_tz.captures(text)?;
        let group = |index: usize| {
            caps.get(index)
                .map(|m| m.as_str())
                .filter(|value| !value.is_empty())
        };

        let captures = IanaCaptures {
            hour: group(1),
            minute: group(2),
            second: group(3),
            zone: group(4),
        };
        tracing::trace!(?captures, "IANA time matched");
        Some(captures)
    }
}

impl<'t> IanaCaptures<'t> {
    /// ## Summary
    /// Returns the parts if every group was captured.
    ///
    /// ## Errors
    /// Returns the names of the missing groups, in literal order.
    pub fn complete(self) -> Result<IanaTimeParts<'t>, Vec<&'static str>> {
        match (self.hour, self.minute, self.second, self.zone) {
            (Some(hour), Some(minute), Some(second), Some(zone)) => Ok(IanaTimeParts {
                hour,
                minute,
                second,
                zone,
            }),
            _ => Err([
                ("hour", self.hour),
                ("minute", self.minute),
                ("second", self.second),
                ("timezone", self.zone),
            ]
            .into_iter()
            .filter_map(|(name, value)| value.is_none().then_some(name))
            .collect()),
        }
    }
}

fn compile(key: &str, pattern: &str) -> CoreResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        CoreError::InvalidConfiguration(format!("{key} pattern {pattern:?} does not compile: {e}"))
    })
}
