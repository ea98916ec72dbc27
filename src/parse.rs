//! Batch decoding.
//!
//! The upstream query collaborator resolves pagination and hands back one
//! JSON array of ticket objects per call; this module turns that text into
//! the dynamic records the rules consume.

use crate::error::ParseError;
use crate::types::Ticket;
use serde_json::Value;

/// Decode a JSON array of ticket objects into a batch.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not valid JSON (with line and
/// column), not an array, or contains a non-object element.
pub fn parse_batch(input: &str) -> Result<Vec<Ticket>, ParseError> {
    let value: Value = serde_json::from_str(input).map_err(|e| ParseError {
        message: e.to_string(),
        line: Some(e.line()),
        column: Some(e.column()),
    })?;

    let Value::Array(items) = value else {
        return Err(ParseError {
            message: "ticket batch must be a JSON array".to_string(),
            line: None,
            column: None,
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(ParseError {
                message: format!("ticket at index {i} must be a JSON object"),
                line: None,
                column: None,
            }),
        })
        .collect()
}
