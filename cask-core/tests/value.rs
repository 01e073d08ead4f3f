#[cfg(test)]
mod tests {
    use cask_core::Value;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(Value::from(true), Value::Boolean(Some(true)));
        assert_eq!(Value::from(42), Value::Int32(Some(42)));
        assert_eq!(Value::from(42i64), Value::Int64(Some(42)));
        assert_eq!(Value::from(1.5), Value::Float64(Some(1.5)));
        assert_eq!(Value::from("abc"), Value::Varchar(Some("abc".into())));
        assert_eq!(
            Value::from("abc".to_owned()),
            Value::Varchar(Some("abc".into()))
        );
        assert_eq!(
            Value::from(vec![0xCA_u8, 0xFE]),
            Value::Blob(Some(vec![0xCA, 0xFE].into_boxed_slice()))
        );
        assert_eq!(
            Value::from(date!(2014 - 5 - 9)),
            Value::Date(Some(date!(2014 - 5 - 9)))
        );
    }

    #[test]
    fn option_conversions_keep_the_type_on_none() {
        assert_eq!(Value::from(Some(7)), Value::Int32(Some(7)));
        assert_eq!(Value::from(None::<i32>), Value::Int32(None));
        assert_eq!(Value::from(None::<&str>), Value::Varchar(None));
    }

    #[test]
    fn null_detection_covers_typed_nulls() {
        assert!(Value::Null.is_null());
        assert!(Value::Int32(None).is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(!Value::Int32(Some(0)).is_null());
        assert!(!Value::Varchar(Some(String::new())).is_null());
    }

    #[test]
    fn display_is_log_friendly() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Varchar(None).to_string(), "NULL");
        assert_eq!(Value::Boolean(Some(true)).to_string(), "TRUE");
        assert_eq!(Value::Int32(Some(-7)).to_string(), "-7");
        assert_eq!(Value::Int64(Some(1 << 40)).to_string(), "1099511627776");
        assert_eq!(Value::Float64(Some(0.25)).to_string(), "0.25");
        assert_eq!(
            Value::Decimal(Some(Decimal::from_str("12.3456").unwrap())).to_string(),
            "12.3456"
        );
        assert_eq!(Value::from(date!(2014 - 5 - 9)).to_string(), "'2014-05-09'");
        assert_eq!(Value::from(time!(8:13:59)).to_string(), "'08:13:59.0'");
        assert_eq!(
            Value::from(datetime!(2014 - 5 - 9 8:13:59)).to_string(),
            "'2014-05-09T08:13:59.0'"
        );
    }

    #[test]
    fn display_escapes_quotes_and_bytes() {
        assert_eq!(
            Value::from("it's a name").to_string(),
            "'it''s a name'"
        );
        assert_eq!(
            Value::from(vec![0xDE_u8, 0xAD]).to_string(),
            "x'dead'"
        );
    }

    #[test]
    fn uuid_displays_quoted() {
        let id = Uuid::from_u128(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEF);
        assert_eq!(
            Value::from(id).to_string(),
            "'01234567-89ab-cdef-0123-456789abcdef'"
        );
    }
}
