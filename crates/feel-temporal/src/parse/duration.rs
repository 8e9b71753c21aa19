//! Days-and-time duration literals (`[-]P[nD][T[nH][nM][nS]]`).

use feel_core::error::{CoreError, CoreResult};

use crate::value::DurationValue;

/// ## Summary
/// Parses a days-and-time duration such as `PT0H`, `-PT5H30M` or `P1DT2H`.
///
/// Year-month durations and fractional seconds are not accepted.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the literal is not a valid
/// days-and-time duration.
pub fn parse_duration(s: &str) -> CoreResult<DurationValue> {
    let invalid = || CoreError::ParseError(format!("invalid days and time duration {s:?}"));

    let (negative, unsigned) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };
    let body = unsigned.strip_prefix('P').ok_or_else(invalid)?;

    let mut dur = DurationValue {
        negative,
        ..DurationValue::zero()
    };
    let mut in_time = false;
    let mut digits = String::new();
    // Designators must appear in D, H, M, S order, each at most once.
    let mut last_rank = None;
    let mut time_components = 0;

    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if c == 'T' {
            if in_time || !digits.is_empty() {
                return Err(invalid());
            }
            in_time = true;
            continue;
        }

        let num: u32 = digits.parse().map_err(|_e| invalid())?;
        digits.clear();

        let rank = match (c, in_time) {
            ('D', false) => {
                dur.days = num;
                0
            }
            ('H', true) => {
                dur.hours = num;
                1
            }
            ('M', true) => {
                dur.minutes = num;
                2
            }
            ('S', true) => {
                dur.seconds = num;
                3
            }
            _ => return Err(invalid()),
        };
        if last_rank.is_some_and(|last| rank <= last) {
            return Err(invalid());
        }
        last_rank = Some(rank);
        if in_time {
            time_components += 1;
        }
    }

    if !digits.is_empty() || last_rank.is_none() || (in_time && time_components == 0) {
        return Err(invalid());
    }
    Ok(dur)
}
