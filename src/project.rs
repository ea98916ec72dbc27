//! Field projection and record identification over raw tickets.
//!
//! Tickets arrive with inconsistent field naming across pagination sources,
//! so every semantic lookup goes through an ordered alias list: the first
//! alias present with a usable value wins.

use crate::error::{ErrorKind, ValidationError};
use crate::normalize::{format_millis, to_millis};
use crate::types::{PersonnelRole, Ticket, TimeRole};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// ─── Alias tables ───────────────────────────────────────────────────────────

pub(crate) const START_SERIAL_ALIASES: [&str; 3] =
    ["serialNoStart", "startTicketNumber", "startTicketNo"];
pub(crate) const END_SERIAL_ALIASES: [&str; 3] =
    ["serialNoEnd", "endTicketNumber", "endTicketNo"];
pub(crate) const LOCATION_ALIASES: [&str; 4] =
    ["functionLocationName", "workLocation", "location", "workPlace"];
pub(crate) const ID_ALIASES: [&str; 3] = ["id", "ticketId", "ticketNo"];
pub(crate) const PLAN_ID_ALIASES: [&str; 2] = ["workPlanIds", "workPlanId"];
pub(crate) const PLAN_NO_ALIASES: [&str; 2] = ["workPlanNos", "workPlanNo"];

/// Comma or full-width comma between personnel names. Whitespace is trimmed
/// from each part, never treated as a delimiter: names carry interior spaces.
static NAME_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,，]+").unwrap());

// ─── Time-role resolution ───────────────────────────────────────────────────

/// Resolve a canonical time role through its alias list.
///
/// An alias that is present but unparseable is skipped, not treated as
/// terminal; the first alias whose raw value normalizes wins.
pub fn resolve_time(ticket: &Ticket, role: TimeRole) -> Option<i64> {
    role.aliases()
        .iter()
        .find_map(|key| ticket.get(*key).and_then(to_millis))
}

// ─── Record identification ──────────────────────────────────────────────────

/// First alias whose value is present and usable (non-null, and non-blank
/// when textual).
pub(crate) fn first_present<'a>(ticket: &'a Ticket, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| ticket.get(*key)).find(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    })
}

fn display(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Stable, human-readable label for a ticket, built from ticket-number range
/// and work-location fields. The trailing `(id=...)` carries the first
/// present explicit id, falling back to the positional index.
pub fn ticket_label(ticket: &Ticket, index: usize) -> String {
    let start = display(first_present(ticket, &START_SERIAL_ALIASES));
    let end = display(first_present(ticket, &END_SERIAL_ALIASES));
    let location = display(first_present(ticket, &LOCATION_ALIASES));
    let fallback = match first_present(ticket, &ID_ALIASES) {
        Some(v) => display(Some(v)),
        None => format!("#{index}"),
    };
    format!("start ticket: {start}, end ticket: {end}, location: {location} (id={fallback})")
}

/// [`ticket_label`] with the `(id=...)` suffix stripped. This is the form
/// embedded in error messages, standalone and cross-record alike.
pub fn short_label(ticket: &Ticket, index: usize) -> String {
    let label = ticket_label(ticket, index);
    match label.rfind(" (id=") {
        Some(pos) => label[..pos].to_string(),
        None => label,
    }
}

// ─── Personnel names ────────────────────────────────────────────────────────

/// Split a personnel field into individual names on comma or full-width
/// comma, trimming surrounding whitespace from each name. Non-string values
/// yield no names.
pub fn split_names(value: Option<&Value>) -> Vec<String> {
    let Some(Value::String(raw)) = value else {
        return Vec::new();
    };
    NAME_DELIMITERS
        .split(raw)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

// ─── Error payload assembly ─────────────────────────────────────────────────

/// Assemble the common error payload for `ticket` and attach the message.
/// This projection is the prefix of every reported error.
pub(crate) fn error_for(ticket: &Ticket, kind: ErrorKind, message: String) -> ValidationError {
    let formatted = |role: TimeRole| resolve_time(ticket, role).and_then(format_millis);
    ValidationError {
        serial_no_start: ticket.get("serialNoStart").cloned(),
        serial_no_end: ticket.get("serialNoEnd").cloned(),
        function_location_name: ticket.get("functionLocationName").cloned(),
        take_order_time: formatted(TimeRole::Receive),
        generate_date: formatted(TimeRole::Fill),
        operation_start_time: formatted(TimeRole::Start),
        operation_end_time: formatted(TimeRole::End),
        report_time: formatted(TimeRole::Report),
        operator_unames: ticket.get(PersonnelRole::Operator.field()).cloned(),
        guardian_unames: ticket.get(PersonnelRole::Guardian.field()).cloned(),
        watch_uname: ticket.get(PersonnelRole::Watch.field()).cloned(),
        work_plan_ids: None,
        work_plan_nos: None,
        error_kind: kind,
        error_info: message,
    }
}
