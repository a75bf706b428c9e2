use factory_guard_core::factory::strict::parse_numeric_text;
use factory_guard_core::{construct_v3, inspect, Employee, FieldState, InvalidDataError};
use proptest::prelude::*;
use serde_json::{json, Value};

fn bob(id: Value) -> Value {
    json!({
        "id": id,
        "name": "Bob",
        "email": "bob@company.com",
        "department": "IT"
    })
}

#[test]
fn numeric_string_id_is_coerced_to_number() {
    let employee = construct_v3(&bob(json!("456"))).expect("numeric string id");
    assert_eq!(employee.id().get(), 456.0);

    let wire = serde_json::to_value(&employee).expect("serialize employee");
    assert_eq!(wire["id"], json!(456));
    assert!(wire["id"].is_number());
}

#[test]
fn garbage_object_is_rejected_with_full_snapshot() {
    let input = json!({ "foo": "bar", "baz": 999 });
    let err = construct_v3(&input).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Invalid Employee data: {"foo":"bar","baz":999}"#
    );
}

#[test]
fn numeric_department_is_invalid() {
    let input = json!({ "foo": "bar", "department": 123 });
    let report = inspect(&input).expect("object input");
    assert_eq!(report.department, FieldState::Invalid);
    assert!(matches!(
        construct_v3(&input),
        Err(InvalidDataError::Rejected { .. })
    ));
}

#[test]
fn email_only_needs_an_at_sign() {
    let mut input = bob(json!(1));
    input["email"] = json!("bob.company.com");
    assert!(construct_v3(&input).is_err());

    for odd in ["@", "@@", "no domain@", "@no-user", "spaces @ everywhere"] {
        input["email"] = json!(odd);
        let employee = construct_v3(&input).expect("any text with @ is accepted");
        assert_eq!(employee.email(), odd);
    }
}

#[test]
fn blank_name_or_department_is_rejected() {
    for field in ["name", "department"] {
        let mut input = bob(json!(1));
        input[field] = json!(" \t\n");
        assert!(construct_v3(&input).is_err(), "blank {field} must fail");
    }
}

#[test]
fn null_and_non_numeric_ids_are_rejected() {
    for id in [json!(null), json!("abc"), json!(""), json!(true), json!([1]), json!({})] {
        let err = construct_v3(&bob(id.clone())).unwrap_err();
        assert!(
            err.snapshot().is_some(),
            "id {id} should be rejected with a snapshot"
        );
    }
}

#[test]
fn extra_keys_are_ignored() {
    let mut input = bob(json!(9));
    input["salary"] = json!("100");
    input["nested"] = json!({ "deep": [1, 2, 3] });
    let employee = construct_v3(&input).expect("extra keys are fine");
    assert_eq!(employee.id().as_integer(), Some(9));
}

#[test]
fn not_an_object_message() {
    let err = construct_v3(&json!("Alice")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid Employee data: not an object");
}

#[test]
fn try_from_value_matches_construct_v3() {
    let input = bob(json!("0x10"));
    let via_try_from = Employee::try_from(&input).expect("hex id");
    assert_eq!(via_try_from, construct_v3(&input).expect("hex id"));
    assert_eq!(via_try_from.id().as_integer(), Some(16));
}

proptest! {
    #[test]
    fn integer_text_parses_to_same_number(n in -1_000_000_000i64..1_000_000_000) {
        prop_assert_eq!(parse_numeric_text(&n.to_string()), Some(n as f64));
        prop_assert_eq!(parse_numeric_text(&format!("  {n}\t")), Some(n as f64));
    }

    #[test]
    fn trailing_letters_never_parse(n in 0u32..10_000, suffix in "[g-wyzG-WYZ]{1,4}") {
        prop_assert_eq!(parse_numeric_text(&format!("{n}{suffix}")), None);
    }
}
