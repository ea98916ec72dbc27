//! Timestamp normalization.
//!
//! Coerces any supported raw timestamp representation into a single internal
//! millisecond-since-epoch integer. Absence is the only failure signal:
//! unparseable inputs normalize to `None` and are reported separately as
//! missing fields by the time-logic rule, never as errors from here.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

/// Text formats attempted for non-numeric strings, in fixed order.
/// Date-only forms are taken as local midnight.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Normalize a raw field value to epoch milliseconds.
///
/// Numbers are truncated to integer milliseconds (unit consistency is the
/// caller's responsibility — all numeric timestamps are assumed to already be
/// milliseconds). Digit-only strings parse as milliseconds. Other strings try
/// each supported date/datetime format in local time, first match wins.
pub fn to_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => text_to_millis(s),
        _ => None,
    }
}

fn text_to_millis(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<i64>().ok();
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return local_millis(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return local_millis(date.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

fn local_millis(dt: NaiveDateTime) -> Option<i64> {
    // `earliest` resolves DST-fold ambiguity deterministically.
    Local
        .from_local_datetime(&dt)
        .earliest()
        .map(|t| t.timestamp_millis())
}

/// Render epoch milliseconds as a canonical `YYYY-MM-DD HH:MM:SS` local-time
/// string. Out-of-range values yield `None`.
pub fn format_millis(millis: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(millis)
        .earliest()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}
