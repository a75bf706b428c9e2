//! Unchecked pass-through baseline.
//!
//! Copies the four employee keys verbatim. It never fails, so missing or
//! wrong-typed values flow straight through to whoever reads the result.
//! Kept only as the point of comparison for the validating factories.

use serde_json::Value;

use crate::model::employee::UncheckedEmployee;

/// Copies `id`, `name`, `email` and `department` without any check.
///
/// Non-object input yields a record with every field absent.
pub fn literal_assign(data: &Value) -> UncheckedEmployee {
    let field = |key: &str| data.get(key).cloned();
    UncheckedEmployee {
        id: field("id"),
        name: field("name"),
        email: field("email"),
        department: field("department"),
    }
}
