//! End-to-end behaviour of the `time` built-in.

use chrono::{NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use feel_test::component::{FeelValue, TemporalError, TimeValue, WallClock, property_of, time};
use feel_test::{context_in, context_on, date_and_time, duration, number, utc_context};
use rust_decimal::Decimal;

fn hms(value: &TimeValue) -> (u32, u32, u32) {
    (value.hour(), value.minute(), value.second())
}

#[test]
fn test_iso_literals_keep_wall_clock_in_utc() {
    let ctx = utc_context();

    for (literal, expected) in [
        ("23:59:00z", (23, 59, 0)),
        ("T23:59:00Z", (23, 59, 0)),
        ("00:00:00Z", (0, 0, 0)),
        ("12:34:56.789Z", (12, 34, 56)),
        ("08:15", (8, 15, 0)),
        ("18:30:00", (18, 30, 0)),
    ] {
        let value = time(&ctx, &[literal.into()]).expect(literal);
        assert_eq!(hms(&value), expected, "{literal}");
    }
}

#[test]
fn test_iso_literal_with_offset_is_normalized() {
    let value = time(&utc_context(), &["10:00:00+02:00".into()]).expect("should construct");
    assert_eq!(hms(&value), (8, 0, 0));
}

#[test]
fn test_iana_literals() {
    let ctx = utc_context();

    let value = time(&ctx, &["11:00:00@Etc/UTC".into()]).expect("should construct");
    assert_eq!(hms(&value), (11, 0, 0));

    let winter = context_on("Etc/UTC", NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"));
    let value =
        time(&winter, &["00:01:00@America/Los_Angeles".into()]).expect("should construct");
    assert_eq!(hms(&value), (8, 1, 0));
}

#[test_log::test]
fn test_iana_shape_with_missing_groups() {
    let err = time(&utc_context(), &["@Etc/UTC".into()]).expect_err("should fail");

    match err {
        TemporalError::MalformedIanaInput { missing, .. } => {
            assert_eq!(missing, vec!["hour", "minute", "second"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_date_time_and_literal_agree() {
    let ctx = utc_context();

    let from_date_time =
        time(&ctx, &[date_and_time("2012-12-25T11:00:00Z")]).expect("should construct");
    let from_literal = time(&ctx, &["11:00:00Z".into()]).expect("should construct");

    assert_eq!(hms(&from_date_time), hms(&from_literal));
    assert_eq!(from_date_time, from_literal);
}

#[test]
fn test_components_with_zero_offset() {
    let value = time(
        &utc_context(),
        &[number(23), number(59), number(0), duration("PT0H")],
    )
    .expect("should construct");

    assert_eq!(hms(&value), (23, 59, 0));
    assert_eq!(value.time_offset().total_seconds(), 0);
    assert_eq!(
        value,
        time(&utc_context(), &["T23:59:00z".into()]).expect("should construct")
    );
}

#[test]
fn test_components_with_non_duration_offset() {
    let err = time(
        &utc_context(),
        &[number(23), number(59), number(0), "not-a-duration".into()],
    )
    .expect_err("should fail");

    assert!(matches!(err, TemporalError::TypeMismatch { .. }));
}

#[test]
fn test_rejected_call_shapes() {
    let ctx = utc_context();

    for args in [
        vec![],
        vec![number(1), number(2)],
        vec![FeelValue::Null],
        vec!["10:00:00Z".into(), "11:00:00Z".into()],
    ] {
        let err = time(&ctx, &args).expect_err("should fail");
        assert!(
            matches!(err, TemporalError::InvalidArguments { .. }),
            "{args:?} gave {err:?}"
        );
    }
}

#[test]
fn test_round_trip_through_date_and_time() {
    let ctx = utc_context();
    let first = time(&ctx, &["16:45:12Z".into()]).expect("should construct");

    let literal = format!(
        "2020-06-01T{:02}:{:02}:{:02}Z",
        first.hour(),
        first.minute(),
        first.second()
    );
    let second = time(&ctx, &[date_and_time(&literal)]).expect("should construct");

    assert_eq!(first, second);
}

#[test]
fn test_timezone_is_always_the_default() {
    let ctx = context_in("Australia/Sydney");

    let inputs = [
        vec!["10:00:00Z".into()],
        vec!["10:00:00@Europe/Paris".into()],
        vec!["10:00:00".into()],
        vec![date_and_time("2012-12-25T10:00:00-05:00")],
        vec![number(10), number(0), number(0)],
        vec![number(10), number(0), number(0), duration("-PT3H")],
    ];
    for args in inputs {
        let value = time(&ctx, &args).expect("should construct");
        assert_eq!(value.timezone(), "Australia/Sydney", "{args:?}");
        assert_eq!(
            property_of(&FeelValue::Time(value), "timezone"),
            Some(FeelValue::String("Australia/Sydney".to_string()))
        );
    }
}

#[test]
fn test_results_serialize_as_iana_literals() {
    let value = time(&utc_context(), &["07:05:00Z".into()]).expect("should construct");
    assert_eq!(
        serde_json::to_value(&value).expect("should serialize"),
        serde_json::json!("07:05:00@Etc/UTC")
    );
}

#[test]
fn test_literals_follow_todays_zone_rules() {
    let noon = Utc::now()
        .date_naive()
        .and_hms_opt(12, 0, 0)
        .expect("valid time");
    let london = Tz::Europe__London
        .offset_from_utc_datetime(&noon)
        .fix()
        .local_minus_utc();

    let value =
        time(&context_in("Europe/London"), &["12:00:00Z".into()]).expect("should construct");
    assert_eq!(value.time_offset().total_seconds(), i64::from(london));
    assert_eq!(i64::from(value.hour()), 12 + i64::from(london) / 3600);

    let value =
        time(&utc_context(), &["10:00:00@Asia/Singapore".into()]).expect("should construct");
    assert_eq!(hms(&value), (2, 0, 0));
}

#[test]
fn test_pinned_winter_date_has_no_daylight_saving() {
    let ctx = context_on(
        "Europe/London",
        NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
    );

    let value = time(&ctx, &["12:00:00Z".into()]).expect("should construct");
    assert_eq!(hms(&value), (12, 0, 0));
    assert!(value.time_offset().is_zero());
}

#[test]
fn test_decimal_components() {
    let ctx = utc_context();

    let value = time(
        &ctx,
        &[Decimal::new(120, 1).into(), number(30), Decimal::new(0, 2).into()],
    )
    .expect("whole decimals are accepted");
    assert_eq!(hms(&value), (12, 30, 0));

    let err = time(&ctx, &[Decimal::new(105, 1).into(), number(0), number(0)])
        .expect_err("10.5 is not a whole hour");
    assert!(matches!(err, TemporalError::InvalidTimeComponents { .. }));
}
