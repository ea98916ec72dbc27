//! The three rule evaluators: time logic, plan binding, content.
//!
//! Each rule consumes the full batch and returns **all** violations as an
//! ordered list, not just the first. Rules never mutate their input, hold no
//! state between calls, and never fail on a malformed record — a bad field
//! degrades to an error entry for that ticket and evaluation continues.

use crate::error::{ErrorKind, ValidationError, ValidationReport};
use crate::normalize::format_millis;
use crate::project::{
    PLAN_ID_ALIASES, PLAN_NO_ALIASES, error_for, first_present, resolve_time, short_label,
    split_names,
};
use crate::types::{PersonnelRole, Ticket, TimeRole};
use std::collections::{HashMap, HashSet};

fn fmt_ms(millis: i64) -> String {
    format_millis(millis).unwrap_or_else(|| millis.to_string())
}

// ─── Time-logic rule ────────────────────────────────────────────────────────

/// Check the time logic of a ticket batch: per-ticket checkpoint ordering,
/// then cross-ticket scheduling conflicts per person and role.
///
/// Emission order is all single-ticket errors in input order, followed by
/// conflict errors in group/pair discovery order.
pub fn validate_time(tickets: &[Ticket]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Single-ticket pass: missing checkpoints and adjacent-pair ordering.
    for (idx, ticket) in tickets.iter().enumerate() {
        let label = short_label(ticket, idx);
        let resolved: Vec<(TimeRole, Option<i64>)> = TimeRole::SEQUENCE
            .iter()
            .map(|&role| (role, resolve_time(ticket, role)))
            .collect();

        let missing: Vec<&str> = resolved
            .iter()
            .filter(|(_, ms)| ms.is_none())
            .map(|(role, _)| role.label())
            .collect();
        if !missing.is_empty() {
            // One combined entry per ticket, naming every missing role.
            errors.push(error_for(
                ticket,
                ErrorKind::MissingField,
                format!(
                    "operation ticket ({label}) is missing time fields: {}",
                    missing.join(", ")
                ),
            ));
        }

        // A missing endpoint silently skips the pair, already covered above.
        for pair in resolved.windows(2) {
            let (earlier_role, earlier) = pair[0];
            let (later_role, later) = pair[1];
            if let (Some(earlier_ms), Some(later_ms)) = (earlier, later)
                && earlier_ms > later_ms
            {
                errors.push(error_for(
                    ticket,
                    ErrorKind::OrderingViolation,
                    format!(
                        "operation ticket ({label}) violates time ordering: {} ({}) is later than {} ({})",
                        earlier_role.label(),
                        fmt_ms(earlier_ms),
                        later_role.label(),
                        fmt_ms(later_ms)
                    ),
                ));
            }
        }
    }

    // Conflict pass: group resolved operation windows by (role, person).
    // The grouping map lives only for this call; `order` preserves discovery
    // order since HashMap iteration is unordered.
    let mut order: Vec<(PersonnelRole, String)> = Vec::new();
    let mut groups: HashMap<(PersonnelRole, String), Vec<(usize, i64, i64)>> = HashMap::new();
    for (idx, ticket) in tickets.iter().enumerate() {
        let (Some(start), Some(end)) = (
            resolve_time(ticket, TimeRole::Start),
            resolve_time(ticket, TimeRole::End),
        ) else {
            continue;
        };
        for role in PersonnelRole::ALL {
            for person in split_names(ticket.get(role.field())) {
                let key = (role, person);
                if !groups.contains_key(&key) {
                    order.push(key.clone());
                }
                groups.entry(key).or_default().push((idx, start, end));
            }
        }
    }

    for key in &order {
        let entries = &groups[key];
        if entries.len() < 2 {
            continue;
        }
        let (role, person) = key;
        for i in 0..entries.len() {
            for j in i + 1..entries.len() {
                let (idx_a, start_a, end_a) = entries[i];
                let (idx_b, start_b, end_b) = entries[j];
                // Closed-open intervals: touching endpoints do not conflict.
                if end_a <= start_b || end_b <= start_a {
                    continue;
                }
                let range_a = format!("{}~{}", fmt_ms(start_a), fmt_ms(end_a));
                let range_b = format!("{}~{}", fmt_ms(start_b), fmt_ms(end_b));
                let label_a = short_label(&tickets[idx_a], idx_a);
                let label_b = short_label(&tickets[idx_b], idx_b);
                // One entry anchored to each ticket of the pair.
                errors.push(error_for(
                    &tickets[idx_a],
                    ErrorKind::Conflict,
                    format!(
                        "{} {} holds multiple operation tickets at once; operation window overlaps {}: {} overlaps {}",
                        role.label(),
                        person,
                        label_b,
                        range_a,
                        range_b
                    ),
                ));
                errors.push(error_for(
                    &tickets[idx_b],
                    ErrorKind::Conflict,
                    format!(
                        "{} {} holds multiple operation tickets at once; operation window overlaps {}: {} overlaps {}",
                        role.label(),
                        person,
                        label_a,
                        range_b,
                        range_a
                    ),
                ));
            }
        }
    }

    errors
}

// ─── Plan-binding rule ──────────────────────────────────────────────────────

/// Check that each ticket is bound to a maintenance plan.
///
/// With `allowed_plans` supplied, a bound ticket is valid only if its plan id
/// or plan number (stringified) is a member of the set; without it, presence
/// alone satisfies the rule.
pub fn validate_plan_binding(
    tickets: &[Ticket],
    allowed_plans: Option<&[String]>,
) -> Vec<ValidationError> {
    let allowed: Option<HashSet<&str>> =
        allowed_plans.map(|plans| plans.iter().map(String::as_str).collect());
    let mut errors = Vec::new();

    for ticket in tickets {
        let plan_ids = plan_values(ticket, &PLAN_ID_ALIASES);
        let plan_nos = plan_values(ticket, &PLAN_NO_ALIASES);

        if plan_ids.is_none() && plan_nos.is_none() {
            errors.push(error_for(
                ticket,
                ErrorKind::UnboundPlan,
                "not bound to a maintenance plan (missing workPlanIds/workPlanNos)".to_string(),
            ));
            continue;
        }

        if let Some(allowed) = &allowed {
            let member = |values: &Option<Vec<String>>| {
                values
                    .as_ref()
                    .is_some_and(|vs| vs.iter().any(|v| allowed.contains(v.as_str())))
            };
            if !member(&plan_ids) && !member(&plan_nos) {
                let mut error = error_for(
                    ticket,
                    ErrorKind::DisallowedPlan,
                    "bound maintenance plan is not in the allowed list".to_string(),
                );
                // Echo the raw plan values so the offending binding is visible.
                error.work_plan_ids = first_present(ticket, &PLAN_ID_ALIASES).cloned();
                error.work_plan_nos = first_present(ticket, &PLAN_NO_ALIASES).cloned();
                errors.push(error);
            }
        }
    }

    errors
}

/// Stringified non-blank plan values from the first alias carrying any.
/// A scalar yields one value; a loose collection yields its usable elements.
fn plan_values(ticket: &Ticket, aliases: &[&str]) -> Option<Vec<String>> {
    use serde_json::Value;
    for key in aliases {
        let Some(value) = ticket.get(*key) else {
            continue;
        };
        let values: Vec<String> = match value {
            Value::Array(items) => items.iter().filter_map(scalar_string).collect(),
            other => scalar_string(other).into_iter().collect(),
        };
        if !values.is_empty() {
            return Some(values);
        }
    }
    None
}

fn scalar_string(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ─── Content rule ───────────────────────────────────────────────────────────

/// Required content fields: field name and message label.
const REQUIRED_CONTENT: [(&str, &str); 4] = [
    ("operationTask", "operation task"),
    ("functionLocationName", "work location"),
    ("operatorUnames", "operator"),
    ("guardianUnames", "guardian"),
];

/// Check content completeness. Each failing condition on a ticket produces
/// its own entry.
pub fn validate_content(tickets: &[Ticket]) -> Vec<ValidationError> {
    use serde_json::Value;
    let mut errors = Vec::new();

    for ticket in tickets {
        for (field, label) in REQUIRED_CONTENT {
            let blank = match ticket.get(field) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            };
            if blank {
                errors.push(error_for(
                    ticket,
                    ErrorKind::EmptyContent,
                    format!("{label} ({field}) is empty"),
                ));
            }
        }

        // Step-count constraint applies only when both counts are present.
        let step = ticket.get("stepCount").filter(|v| !v.is_null());
        let main = ticket.get("mainStepCount").filter(|v| !v.is_null());
        if let (Some(step), Some(main)) = (step, main) {
            match (coerce_int(step), coerce_int(main)) {
                (Some(total), Some(primary)) => {
                    if total <= 0 || primary <= 0 || primary > total {
                        errors.push(error_for(
                            ticket,
                            ErrorKind::MalformedStepCount,
                            format!(
                                "invalid step counts: stepCount={total}, mainStepCount={primary}"
                            ),
                        ));
                    }
                }
                _ => errors.push(error_for(
                    ticket,
                    ErrorKind::MalformedStepCount,
                    "step count fields are malformed".to_string(),
                )),
            }
        }
    }

    errors
}

fn coerce_int(value: &serde_json::Value) -> Option<i64> {
    use serde_json::Value;
    match value {
        // Fractional counts truncate toward zero rather than failing.
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

// ─── Aggregate entry point ──────────────────────────────────────────────────

/// Run all three rules over one batch.
///
/// Thin aggregator over the granular rule functions: the report is valid
/// exactly when no rule produced an error.
pub fn validate_all(tickets: &[Ticket], allowed_plans: Option<&[String]>) -> ValidationReport {
    ValidationReport {
        time_errors: validate_time(tickets),
        plan_errors: validate_plan_binding(tickets, allowed_plans),
        content_errors: validate_content(tickets),
        total_tickets: tickets.len(),
    }
}
