use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Category of a reported violation. The taxonomy is flat and always carried
/// as data; rule evaluators never raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    OrderingViolation,
    Conflict,
    UnboundPlan,
    DisallowedPlan,
    EmptyContent,
    MalformedStepCount,
}

/// A single reported violation, carrying a fixed projection of the source
/// ticket alongside the message.
///
/// Declaration order here is the serialization order. `error_info` is
/// deliberately the **last** field so that structured log/print consumers see
/// the message after the data context. The five time fields are re-formatted
/// to canonical `YYYY-MM-DD HH:MM:SS` strings; personnel fields are echoed
/// verbatim. The plan echo fields appear only on disallowed-plan errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub serial_no_start: Option<Value>,
    pub serial_no_end: Option<Value>,
    pub function_location_name: Option<Value>,
    pub take_order_time: Option<String>,
    pub generate_date: Option<String>,
    pub operation_start_time: Option<String>,
    pub operation_end_time: Option<String>,
    pub report_time: Option<String>,
    pub operator_unames: Option<Value>,
    pub guardian_unames: Option<Value>,
    pub watch_uname: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_plan_ids: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_plan_nos: Option<Value>,
    pub error_kind: ErrorKind,
    pub error_info: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_info)
    }
}

impl std::error::Error for ValidationError {}

/// Result of running all three rules over one batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub time_errors: Vec<ValidationError>,
    pub plan_errors: Vec<ValidationError>,
    pub content_errors: Vec<ValidationError>,
    pub total_tickets: usize,
}

impl ValidationReport {
    /// True when no rule reported any violation.
    pub fn is_valid(&self) -> bool {
        self.time_errors.is_empty()
            && self.plan_errors.is_empty()
            && self.content_errors.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_tickets: self.total_tickets,
            time_errors: self.time_errors.len(),
            plan_errors: self.plan_errors.len(),
            content_errors: self.content_errors.len(),
        }
    }
}

/// Per-rule error counts for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_tickets: usize,
    pub time_errors: usize,
    pub plan_errors: usize,
    pub content_errors: usize,
}

/// Produced by `parse_batch` when a batch fails to decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}
