use oticket::normalize::{format_millis, to_millis};
use serde_json::json;

// ─── Numbers ────────────────────────────────────────────────────────────────

#[test]
fn integer_numbers_pass_through_as_milliseconds() {
    assert_eq!(to_millis(&json!(1754000220000i64)), Some(1754000220000));
    assert_eq!(to_millis(&json!(0)), Some(0));
}

#[test]
fn float_numbers_truncate() {
    assert_eq!(to_millis(&json!(1234.9)), Some(1234));
}

// ─── Strings ────────────────────────────────────────────────────────────────

#[test]
fn digit_only_strings_parse_as_milliseconds() {
    assert_eq!(to_millis(&json!("1754000220000")), Some(1754000220000));
    assert_eq!(to_millis(&json!("  42  ")), Some(42));
}

#[test]
fn datetime_strings_round_trip_through_format_millis() {
    for text in ["2025-08-01 08:30:00", "1999-12-31 23:59:59"] {
        let ms = to_millis(&json!(text)).expect("parse");
        assert_eq!(format_millis(ms).as_deref(), Some(text));
    }
}

#[test]
fn slash_and_dash_datetime_forms_agree() {
    assert_eq!(
        to_millis(&json!("2025/08/01 08:30:00")),
        to_millis(&json!("2025-08-01 08:30:00"))
    );
}

#[test]
fn date_only_strings_mean_local_midnight() {
    let midnight = to_millis(&json!("2025-08-01 00:00:00"));
    assert!(midnight.is_some());
    assert_eq!(to_millis(&json!("2025-08-01")), midnight);
    assert_eq!(to_millis(&json!("2025/08/01")), midnight);
}

// ─── Absence ────────────────────────────────────────────────────────────────

#[test]
fn unsupported_inputs_normalize_to_absent() {
    for value in [
        json!(null),
        json!(""),
        json!("   "),
        json!("not a timestamp"),
        json!("2025-13-45"),
        json!("01-08-2025 08:30:00"),
        json!(true),
        json!(["2025-08-01"]),
        json!({"at": "2025-08-01"}),
    ] {
        assert_eq!(to_millis(&value), None, "input: {value}");
    }
}

#[test]
fn overflowing_digit_strings_are_absent_not_a_panic() {
    assert_eq!(to_millis(&json!("99999999999999999999999999")), None);
}
