use factory_guard_core::{
    fixture, fixtures, Construction, FactoryError, FactoryService, FactoryVersion,
    InvalidDataError,
};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Validated,
    Unchecked,
    Shape,
    Falsy,
    NotAnObject,
    Rejected,
}

fn outcome(result: &Result<Construction, FactoryError>) -> Outcome {
    match result {
        Ok(Construction::Validated(_)) => Outcome::Validated,
        Ok(Construction::Unchecked(_)) => Outcome::Unchecked,
        Err(FactoryError::Shape { .. }) => Outcome::Shape,
        Err(FactoryError::InvalidData(InvalidDataError::Falsy)) => Outcome::Falsy,
        Err(FactoryError::InvalidData(InvalidDataError::NotAnObject)) => Outcome::NotAnObject,
        Err(FactoryError::InvalidData(InvalidDataError::Rejected { .. })) => Outcome::Rejected,
    }
}

fn run_fixture(version: FactoryVersion, name: &str) -> Result<Construction, FactoryError> {
    let case = fixture(name).expect("fixture exists");
    FactoryService::new(version).run(&case.input)
}

#[test]
fn fixture_matrix_matches_documented_behaviour() {
    use FactoryVersion::{Raw, V1, V2, V3};
    use Outcome::*;

    let expected = [
        ("valid", [Validated, Validated, Validated, Unchecked]),
        ("string_id", [Shape, Shape, Validated, Unchecked]),
        ("garbage", [Falsy, Falsy, Rejected, Unchecked]),
        ("missing", [Falsy, Falsy, Rejected, Unchecked]),
        ("null_id", [Falsy, Falsy, Rejected, Unchecked]),
        ("corrupt_nulls", [Falsy, Falsy, Rejected, Unchecked]),
        ("corrupt_missing_fields", [Shape, Shape, Rejected, Unchecked]),
    ];

    assert_eq!(expected.len(), fixtures().len());
    for (name, outcomes) in expected {
        for (version, want) in [V1, V2, V3, Raw].into_iter().zip(outcomes) {
            let got = outcome(&run_fixture(version, name));
            assert_eq!(got, want, "fixture `{name}` with factory {version}");
        }
    }
}

#[test]
fn default_service_uses_strict_factory() {
    let service = FactoryService::default();
    assert_eq!(service.version(), FactoryVersion::V3);

    let construction = run_fixture(service.version(), "string_id").expect("v3 accepts");
    let employee = construction.into_employee().expect("validated employee");
    assert_eq!(employee.id().as_integer(), Some(456));
}

#[test]
fn select_switches_active_factory() {
    let mut service = FactoryService::default();
    service.select(FactoryVersion::Raw);
    assert_eq!(service.version(), FactoryVersion::Raw);

    let construction = service.run(&json!(null)).expect("raw never fails");
    assert!(construction.employee().is_none());
}

#[test]
fn strict_rejection_surfaces_unchanged() {
    let err = FactoryService::new(FactoryVersion::V3)
        .run(&json!(42))
        .unwrap_err();
    assert_eq!(err.invalid_data(), Some(&InvalidDataError::NotAnObject));
    assert_eq!(err.to_string(), "Invalid Employee data: not an object");
}

#[test]
fn shape_mismatch_names_the_factory() {
    let err = run_fixture(FactoryVersion::V2, "string_id").unwrap_err();
    assert!(err.invalid_data().is_none());
    assert!(
        err.to_string().contains("v2 factory input shape"),
        "unexpected error: {err}"
    );
}

#[test]
fn unchecked_construction_serializes_raw_values() {
    let construction = run_fixture(FactoryVersion::Raw, "corrupt_missing_fields")
        .expect("raw never fails");
    let wire = serde_json::to_value(&construction).expect("serialize construction");
    assert_eq!(wire, json!({ "department": 123 }));
}
