//! Parsers for ISO-8601 and IANA-qualified time literals.

use chrono::{FixedOffset, NaiveTime};
use feel_core::constants::MAX_LITERAL_OFFSET_SECONDS;

use super::grammar::IsoTimeParts;
use crate::context::TemporalContext;
use crate::error::{TemporalError, TemporalResult};
use crate::timezone::{localize, resolve_zone};
use crate::value::Instant;

/// Digits of nanosecond precision.
const NANO_DIGITS: usize = 9;

/// ## Summary
/// Parses an ISO-8601 time literal into an instant on the reference date.
///
/// The instant carries the literal's own offset: UTC for `Z`, the explicit
/// `±HH:MM`, or the default timezone's offset for a bare local time.
/// Hours run from `00` to `23`; the end-of-day form `24:00:00` is rejected
/// rather than rolled over to midnight of the next day.
///
/// ## Errors
/// Returns `TemporalError::InvalidTimeFormat` if the literal does not have the
/// ISO-8601 shape or a field is out of range, and
/// `TemporalError::ConfigurationError` if a local time needs the default
/// timezone and it does not resolve.
#[tracing::instrument(skip(ctx))]
pub fn parse_time(ctx: &TemporalContext, text: &str) -> TemporalResult<Instant> {
    let parts = ctx
        .grammar()
        .match_iso(text)
        .ok_or_else(|| invalid_format(text, "matches neither accepted shape"))?;

    let time = iso_wall_clock(&parts)
        .ok_or_else(|| invalid_format(text, "hour, minute or second is out of range"))?;
    let local = ctx.anchor(time);

    if let Some(offset) = parts.offset {
        let offset = parse_offset(offset)
            .ok_or_else(|| invalid_format(text, "UTC offset is out of range"))?;
        localize(&local, &offset).map_err(|e| invalid_format(text, &e.to_string()))
    } else {
        let zone = ctx.default_zone()?;
        let zoned = localize(&local, &zone).map_err(|e| invalid_format(text, &e.to_string()))?;
        Ok(zoned.fixed_offset())
    }
}

/// ## Summary
/// Parses an IANA-qualified literal such as `11:00:00@Europe/Paris` into an
/// instant for that wall-clock time in the named zone on the reference date.
///
/// Returns `Ok(None)` when the literal does not have the IANA shape, so the
/// caller can fall back to another grammar. A wall-clock time repeated by a
/// daylight-saving fold resolves to the earlier instant.
///
/// ## Errors
/// Returns `TemporalError::MalformedIanaInput` if the shape matches but a
/// group is empty, and `TemporalError::InvalidIanaTime` if the zone is unknown
/// or the wall-clock time is invalid in it.
#[tracing::instrument(skip(ctx))]
pub fn parse_iana_time(ctx: &TemporalContext, text: &str) -> TemporalResult<Option<Instant>> {
    let Some(captures) = ctx.grammar().match_iana(text) else {
        return Ok(None);
    };

    let parts = captures
        .complete()
        .map_err(|missing| TemporalError::MalformedIanaInput {
            input: text.to_string(),
            missing,
        })?;

    let zone = resolve_zone(parts.zone).map_err(|e| invalid_iana(text, e.to_string()))?;
    let time = wall_clock(parts.hour, parts.minute, parts.second, 0)
        .ok_or_else(|| invalid_iana(text, "hour, minute or second is out of range".to_string()))?;
    let zoned =
        localize(&ctx.anchor(time), &zone).map_err(|e| invalid_iana(text, e.to_string()))?;

    Ok(Some(zoned.fixed_offset()))
}

fn iso_wall_clock(parts: &IsoTimeParts<'_>) -> Option<NaiveTime> {
    let nanos = parts.fraction.map_or(Some(0), fraction_nanos)?;
    wall_clock(parts.hour, parts.minute, parts.second.unwrap_or("0"), nanos)
}

fn wall_clock(hour: &str, minute: &str, second: &str, nanos: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_nano_opt(
        hour.parse().ok()?,
        minute.parse().ok()?,
        second.parse().ok()?,
        nanos,
    )
}

/// Converts fractional-second digits to nanoseconds, truncating past 9 digits.
fn fraction_nanos(fraction: &str) -> Option<u32> {
    let digits = fraction.get(..NANO_DIGITS).unwrap_or(fraction);
    format!("{digits:0<NANO_DIGITS$}").parse().ok()
}

/// Parses `Z`, `z`, `±HH:MM` or `±HHMM`.
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    if offset.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = if let Some(rest) = offset.strip_prefix('+') {
        (1, rest)
    } else {
        (-1, offset.strip_prefix('-')?)
    };
    let digits = rest.replacen(':', "", 1);
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits.get(0..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    if minutes > 59 {
        return None;
    }

    let seconds = hours * 3600 + minutes * 60;
    if seconds > MAX_LITERAL_OFFSET_SECONDS {
        return None;
    }
    FixedOffset::east_opt(sign * seconds)
}

fn invalid_format(text: &str, reason: &str) -> TemporalError {
    TemporalError::InvalidTimeFormat {
        input: text.to_string(),
        reason: reason.to_string(),
    }
}

fn invalid_iana(text: &str, reason: String) -> TemporalError {
    TemporalError::InvalidIanaTime {
        input: text.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Timelike};
    use chrono::NaiveDate;
    use feel_core::config::TemporalConfig;

    fn context() -> TemporalContext {
        TemporalContext::from_config(&TemporalConfig::default()).expect("default config")
    }

    fn context_in(default_tz: &str) -> TemporalContext {
        TemporalContext::from_config(&TemporalConfig::default().with_default_tz(default_tz))
            .expect("valid patterns")
    }

    fn context_on(year: i32, month: u32, day: u32) -> TemporalContext {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        TemporalContext::from_config(&TemporalConfig::default().with_reference_date(date))
            .expect("valid patterns")
    }

    #[test]
    fn test_parse_utc_literal() {
        let instant = parse_time(&context(), "23:59:00z").expect("should parse");

        assert_eq!((instant.hour(), instant.minute(), instant.second()), (23, 59, 0));
        assert_eq!(instant.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_explicit_offset() {
        let instant = parse_time(&context(), "10:30:00-05:00").expect("should parse");

        assert_eq!(instant.hour(), 10);
        assert_eq!(instant.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_parse_compact_offset_and_fraction() {
        let instant = parse_time(&context(), "T01:02:03.5+0130").expect("should parse");

        assert_eq!(instant.nanosecond(), 500_000_000);
        assert_eq!(instant.offset().local_minus_utc(), 5400);
    }

    #[test]
    fn test_parse_local_time_uses_default_zone() {
        let instant = parse_time(&context_in("Asia/Tokyo"), "09:00:00").expect("should parse");

        assert_eq!(instant.hour(), 9);
        assert_eq!(instant.offset().fix().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_parse_anchors_on_reference_date() {
        let ctx = context();
        let instant = parse_time(&ctx, "12:00:00Z").expect("should parse");
        assert_eq!(instant.date_naive(), ctx.reference_date());
    }

    #[test]
    fn test_parse_rejects_out_of_range_hour() {
        let err = parse_time(&context(), "25:00:00Z").expect_err("hour 25 is invalid");
        assert!(matches!(err, TemporalError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_end_of_day_hour() {
        let err = parse_time(&context(), "24:00:00Z").expect_err("hour 24 is not accepted");
        assert!(matches!(err, TemporalError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_large_offset() {
        let err = parse_time(&context(), "10:00:00+15:00").expect_err("offset too large");
        assert!(matches!(err, TemporalError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_time(&context(), "half past ten").expect_err("not a time");
        match err {
            TemporalError::InvalidTimeFormat { input, .. } => assert_eq!(input, "half past ten"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test_log::test]
    fn test_parse_iana_literal() {
        let instant = parse_iana_time(&context(), "11:00:00@Asia/Kolkata")
            .expect("should parse")
            .expect("should match");

        assert_eq!(instant.hour(), 11);
        assert_eq!(instant.offset().local_minus_utc(), 5 * 3600 + 1800);
    }

    #[test]
    fn test_parse_iana_non_match_is_none() {
        let parsed = parse_iana_time(&context(), "11:00:00Z").expect("no error on non-match");
        assert!(parsed.is_none());
    }

    #[test]
    fn test_parse_iana_malformed() {
        let err = parse_iana_time(&context(), "@Etc/UTC").expect_err("groups missing");
        assert_eq!(
            err,
            TemporalError::MalformedIanaInput {
                input: "@Etc/UTC".to_string(),
                missing: vec!["hour", "minute", "second"],
            }
        );
    }

    #[test]
    fn test_parse_iana_unknown_zone() {
        let err = parse_iana_time(&context(), "11:00:00@Nowhere/Special")
            .expect_err("zone is unknown");
        assert!(matches!(err, TemporalError::InvalidIanaTime { .. }));
    }

    #[test]
    fn test_parse_iana_out_of_range() {
        let err = parse_iana_time(&context(), "24:00:00@Etc/UTC").expect_err("hour 24");
        assert!(matches!(err, TemporalError::InvalidIanaTime { .. }));
    }

    #[test]
    fn test_parse_iana_in_dst_gap() {
        let err = parse_iana_time(&context_on(2026, 3, 8), "02:30:00@America/New_York")
            .expect_err("02:30 is skipped on this date");

        match err {
            TemporalError::InvalidIanaTime { input, .. } => {
                assert_eq!(input, "02:30:00@America/New_York");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_iana_in_dst_fold_takes_earlier_instant() {
        let instant = parse_iana_time(&context_on(2026, 11, 1), "01:30:00@America/New_York")
            .expect("should parse")
            .expect("should match");

        assert_eq!(instant.hour(), 1);
        assert_eq!(instant.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_parse_iana_uses_zone_rules_of_reference_date() {
        let winter = parse_iana_time(&context_on(2026, 1, 15), "12:00:00@Europe/London")
            .expect("should parse")
            .expect("should match");
        let summer = parse_iana_time(&context_on(2026, 7, 15), "12:00:00@Europe/London")
            .expect("should parse")
            .expect("should match");

        assert_eq!(winter.offset().local_minus_utc(), 0);
        assert_eq!(summer.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_fraction_nanos_truncates() {
        assert_eq!(fraction_nanos("5"), Some(500_000_000));
        assert_eq!(fraction_nanos("1234567891"), Some(123_456_789));
    }

    #[test]
    fn test_parse_offset_forms() {
        assert_eq!(parse_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset("-0330"), FixedOffset::west_opt(3 * 3600 + 1800));
        assert_eq!(parse_offset("+14:00"), FixedOffset::east_opt(14 * 3600));
        assert_eq!(parse_offset("+05:60"), None);
        assert_eq!(parse_offset("05:00"), None);
    }
}
