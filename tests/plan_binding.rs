use oticket::error::ErrorKind;
use oticket::types::Ticket;
use oticket::validate::validate_plan_binding;
use serde_json::json;

fn ticket(value: serde_json::Value) -> Ticket {
    serde_json::from_value(value).expect("ticket object")
}

fn whitelist(plans: &[&str]) -> Vec<String> {
    plans.iter().map(|p| p.to_string()).collect()
}

// ─── Presence (no whitelist) ────────────────────────────────────────────────

#[test]
fn any_nonblank_plan_field_satisfies_presence() {
    let tickets = vec![
        ticket(json!({"workPlanIds": "5c78e23da25a45f4bdb0c9e85c3fcc42"})),
        ticket(json!({"workPlanNos": "SCWH0401250623001803"})),
        ticket(json!({"workPlanNo": 20250801})),
    ];
    assert!(validate_plan_binding(&tickets, None).is_empty());
}

#[test]
fn both_fields_absent_is_reported_as_unbound() {
    let tickets = vec![ticket(json!({"serialNoStart": 5}))];
    let errors = validate_plan_binding(&tickets, None);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_kind, ErrorKind::UnboundPlan);
    assert!(errors[0].error_info.contains("not bound"));
}

#[test]
fn blank_strings_count_as_absent() {
    let tickets = vec![ticket(json!({"workPlanIds": "   ", "workPlanNos": ""}))];
    let errors = validate_plan_binding(&tickets, None);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_kind, ErrorKind::UnboundPlan);
}

#[test]
fn secondary_alias_satisfies_presence() {
    let tickets = vec![ticket(json!({"workPlanId": "abc123"}))];
    assert!(validate_plan_binding(&tickets, None).is_empty());
}

// ─── Whitelist membership ───────────────────────────────────────────────────

#[test]
fn whitelisted_plan_id_passes() {
    let tickets = vec![ticket(json!({"workPlanIds": "PLAN-OK"}))];
    let errors = validate_plan_binding(&tickets, Some(&whitelist(&["PLAN-OK"])));
    assert!(errors.is_empty());
}

#[test]
fn disallowed_plan_echoes_raw_values() {
    let tickets = vec![ticket(json!({"workPlanIds": "PLAN-BAD"}))];
    let errors = validate_plan_binding(&tickets, Some(&whitelist(&["PLAN-OK"])));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_kind, ErrorKind::DisallowedPlan);
    assert_eq!(errors[0].work_plan_ids, Some(json!("PLAN-BAD")));
    assert_eq!(errors[0].work_plan_nos, None);
}

#[test]
fn plan_number_membership_alone_is_sufficient() {
    let tickets = vec![ticket(json!({
        "workPlanIds": "PLAN-BAD",
        "workPlanNos": "PLAN-OK",
    }))];
    let errors = validate_plan_binding(&tickets, Some(&whitelist(&["PLAN-OK"])));
    assert!(errors.is_empty());
}

#[test]
fn numeric_plan_numbers_are_stringified_for_membership() {
    let tickets = vec![ticket(json!({"workPlanNos": 1803}))];
    let errors = validate_plan_binding(&tickets, Some(&whitelist(&["1803"])));
    assert!(errors.is_empty());
}

#[test]
fn plan_collections_are_checked_elementwise() {
    let bound = ticket(json!({"workPlanIds": ["", "PLAN-OK"]}));
    let unbound = ticket(json!({"workPlanIds": ["", "   "]}));
    let errors = validate_plan_binding(&[bound, unbound], Some(&whitelist(&["PLAN-OK"])));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_kind, ErrorKind::UnboundPlan);
}

#[test]
fn presence_without_whitelist_never_checks_membership() {
    let tickets = vec![ticket(json!({"workPlanIds": "PLAN-BAD"}))];
    assert!(validate_plan_binding(&tickets, None).is_empty());
}

#[test]
fn repeated_calls_yield_identical_output() {
    let tickets = vec![
        ticket(json!({"workPlanIds": "PLAN-BAD"})),
        ticket(json!({"serialNoStart": 2})),
    ];
    let plans = whitelist(&["PLAN-OK"]);
    assert_eq!(
        validate_plan_binding(&tickets, Some(&plans)),
        validate_plan_binding(&tickets, Some(&plans))
    );
}
