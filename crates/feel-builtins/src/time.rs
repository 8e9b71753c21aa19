//! The FEEL `time(...)` constructor.
//!
//! Accepted call shapes:
//! - `time("23:59:00z")` or `time("00:01:00@Etc/UTC")`
//! - `time(date and time)`, keeping only the time of day
//! - `time(hour, minute, second[, offset])` where `offset` is a duration or null

use chrono::{FixedOffset, NaiveTime};
use feel_temporal::parse::{parse_iana_time, parse_time};
use feel_temporal::timezone::localize;
use feel_temporal::{
    DateTimeValue, DurationValue, Instant, TemporalContext, TemporalError, TemporalResult,
    TimeValue, WallClock,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::value::FeelValue;

/// Arguments of `time`, classified once at the call boundary.
#[derive(Debug)]
enum TimeArgs<'a> {
    Text(&'a str),
    DateTime(&'a DateTimeValue),
    Components {
        hour: &'a Decimal,
        minute: &'a Decimal,
        second: &'a Decimal,
        offset: Option<&'a DurationValue>,
    },
}

impl<'a> TimeArgs<'a> {
    fn resolve(args: &'a [FeelValue]) -> TemporalResult<Self> {
        match args {
            [FeelValue::String(text)] => Ok(Self::Text(text)),
            [FeelValue::DateTime(value)] => Ok(Self::DateTime(value)),
            [
                FeelValue::Number(hour),
                FeelValue::Number(minute),
                FeelValue::Number(second),
                rest @ ..,
            ] => {
                let offset = match rest {
                    [] | [FeelValue::Null, ..] => None,
                    [FeelValue::Duration(offset), ..] => Some(offset),
                    [other, ..] => {
                        return Err(TemporalError::TypeMismatch {
                            found: other.type_name(),
                        });
                    }
                };
                if rest.len() > 1 {
                    tracing::warn!(
                        ignored = rest.len() - 1,
                        "Ignoring arguments after the offset"
                    );
                }

                Ok(Self::Components {
                    hour,
                    minute,
                    second,
                    offset,
                })
            }
            _ => Err(TemporalError::InvalidArguments {
                found: describe(args),
            }),
        }
    }
}

/// ## Summary
/// Constructs a FEEL time from a literal, a date and time, or components.
///
/// The result is always expressed in the context's default timezone.
///
/// ## Errors
/// - `InvalidArguments` if `args` matches none of the accepted call shapes.
/// - `InvalidTimeFormat`, `MalformedIanaInput` or `InvalidIanaTime` if a
///   string literal cannot be parsed.
/// - `ExtractionError` if a date and time does not give a valid time of day.
/// - `TypeMismatch` if a fourth argument is given that is not a duration.
/// - `InvalidTimeComponents` if the components are not a valid time of day.
/// - `ConfigurationError` if the default timezone does not resolve.
#[tracing::instrument(skip(ctx, args), fields(arity = args.len()))]
pub fn time(ctx: &TemporalContext, args: &[FeelValue]) -> TemporalResult<TimeValue> {
    let instant = match TimeArgs::resolve(args)? {
        TimeArgs::Text(text) => {
            tracing::debug!(text, "Constructing time from string");
            from_text(ctx, text)?
        }
        TimeArgs::DateTime(value) => {
            tracing::debug!("Constructing time from date and time");
            from_wall_clock(ctx, value)?
        }
        TimeArgs::Components {
            hour,
            minute,
            second,
            offset,
        } => {
            tracing::debug!(%hour, %minute, %second, ?offset, "Constructing time from components");
            from_components(ctx, [hour, minute, second], offset)?
        }
    };

    let value = ctx.normalize(&instant)?;
    tracing::debug!(%value, "Time constructed");
    Ok(value)
}

/// IANA-qualified literals take precedence; anything else must be ISO-8601.
fn from_text(ctx: &TemporalContext, text: &str) -> TemporalResult<Instant> {
    parse_iana_time(ctx, text)?.map_or_else(|| parse_time(ctx, text), Ok)
}

/// Takes the time of day of `clock` as a wall-clock time in the default zone.
fn from_wall_clock(ctx: &TemporalContext, clock: &impl WallClock) -> TemporalResult<Instant> {
    let time = NaiveTime::from_hms_opt(clock.hour(), clock.minute(), clock.second()).ok_or_else(
        || TemporalError::ExtractionError {
            reason: format!(
                "{}:{}:{} is not a valid time of day",
                clock.hour(),
                clock.minute(),
                clock.second()
            ),
        },
    )?;

    let zone = ctx.default_zone()?;
    let zoned = localize(&ctx.anchor(time), &zone).map_err(|e| TemporalError::ExtractionError {
        reason: e.to_string(),
    })?;
    Ok(zoned.fixed_offset())
}

/// Builds the wall-clock time at `offset`, or in the default zone without one.
fn from_components(
    ctx: &TemporalContext,
    [hour, minute, second]: [&Decimal; 3],
    offset: Option<&DurationValue>,
) -> TemporalResult<Instant> {
    let hour = component("hour", hour, 23)?;
    let minute = component("minute", minute, 59)?;
    let second = component("second", second, 59)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        invalid_components(format!("{hour}:{minute}:{second} is not a valid time of day"))
    })?;
    let local = ctx.anchor(time);

    if let Some(offset) = offset {
        let zone = i32::try_from(offset.total_seconds())
            .ok()
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                invalid_components(format!("offset {offset} is not a valid UTC offset"))
            })?;
        localize(&local, &zone).map_err(|e| invalid_components(e.to_string()))
    } else {
        let zone = ctx.default_zone()?;
        let zoned = localize(&local, &zone).map_err(|e| invalid_components(e.to_string()))?;
        Ok(zoned.fixed_offset())
    }
}

/// Checks that a numeric component is a whole number in `0..=max`.
fn component(name: &str, value: &Decimal, max: u32) -> TemporalResult<u32> {
    let whole = if value.fract().is_zero() {
        value.to_u32()
    } else {
        None
    };
    whole.filter(|whole| *whole <= max).ok_or_else(|| {
        invalid_components(format!(
            "{name} must be a whole number between 0 and {max}, got {value}"
        ))
    })
}

fn invalid_components(reason: String) -> TemporalError {
    TemporalError::InvalidTimeComponents { reason }
}

fn describe(args: &[FeelValue]) -> String {
    if args.is_empty() {
        return "no arguments".to_string();
    }
    let types: Vec<&str> = args.iter().map(FeelValue::type_name).collect();
    format!("({})", types.join(", "))
}
