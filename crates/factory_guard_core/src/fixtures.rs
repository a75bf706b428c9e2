//! Canned inputs for exercising the factories.
//!
//! Each fixture is a realistic payload a caller might receive from an
//! untyped boundary. The harness runs them against every factory to show
//! where the strategies disagree.

use serde_json::{json, Value};

/// One named input case.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Stable lookup name, e.g. `string_id`.
    pub name: &'static str,
    /// One-line summary shown by the harness.
    pub description: &'static str,
    pub input: Value,
}

/// Returns every fixture in presentation order.
pub fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "valid",
            description: "Valid employee",
            input: json!({
                "id": 123,
                "name": "Alice",
                "email": "alice@company.com",
                "department": "Finance"
            }),
        },
        Fixture {
            name: "string_id",
            description: "Numeric id sent as a string",
            input: json!({
                "id": "456",
                "name": "Bob",
                "email": "bob@company.com",
                "department": "IT"
            }),
        },
        Fixture {
            name: "garbage",
            description: "Object with none of the expected keys",
            input: json!({ "foo": "bar", "baz": 999 }),
        },
        Fixture {
            name: "missing",
            description: "Department missing",
            input: json!({
                "id": 789,
                "name": "Charlie",
                "email": "charlie@company.com"
            }),
        },
        Fixture {
            name: "null_id",
            description: "Explicit null id",
            input: json!({
                "id": null,
                "name": "Eve",
                "email": "eve@company.com",
                "department": "Legal"
            }),
        },
        Fixture {
            name: "corrupt_nulls",
            description: "Nulls, empty strings and an email without @",
            input: json!({
                "id": null,
                "name": "",
                "email": "notanemail",
                "department": ""
            }),
        },
        Fixture {
            name: "corrupt_missing_fields",
            description: "Unknown key plus a numeric department",
            input: json!({ "foo": "bar", "department": 123 }),
        },
    ]
}

/// Looks up one fixture by name.
pub fn fixture(name: &str) -> Option<Fixture> {
    let name = name.trim();
    fixtures().into_iter().find(|fixture| fixture.name == name)
}
