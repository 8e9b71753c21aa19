use crate::value::FeelValue;

/// ## Summary
/// Resolves a path expression `value.name` against a built-in value.
///
/// Returns `None` if the value has no property with that name.
#[must_use]
pub fn property_of(value: &FeelValue, name: &str) -> Option<FeelValue> {
    value
        .as_time()
        .and_then(|time| time.property(name))
        .map(FeelValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::time;
    use feel_core::config::TemporalConfig;
    use feel_temporal::{DurationValue, TemporalContext};
    use rust_decimal::Decimal;

    #[test]
    fn test_time_properties() {
        let config = TemporalConfig::default().with_default_tz("Asia/Tokyo");
        let ctx = TemporalContext::from_config(&config).expect("valid config");
        let value = FeelValue::Time(time(&ctx, &["01:30:15Z".into()]).expect("should construct"));

        assert_eq!(
            property_of(&value, "hour"),
            Some(FeelValue::Number(Decimal::from(10)))
        );
        assert_eq!(
            property_of(&value, "second"),
            Some(FeelValue::Number(Decimal::from(15)))
        );
        assert_eq!(
            property_of(&value, "time offset"),
            Some(FeelValue::Duration(DurationValue::from_seconds(9 * 3600)))
        );
        assert_eq!(
            property_of(&value, "timezone"),
            Some(FeelValue::String("Asia/Tokyo".to_string()))
        );
        assert_eq!(
            property_of(&value, "type"),
            Some(FeelValue::String("time".to_string()))
        );
        assert_eq!(property_of(&value, "day"), None);
    }

    #[test]
    fn test_non_time_values_have_no_properties() {
        assert_eq!(property_of(&FeelValue::from("12:00:00"), "hour"), None);
        assert_eq!(property_of(&FeelValue::Null, "hour"), None);
    }
}
