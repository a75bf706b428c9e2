//! Permissive factories that only test field falsiness.
//!
//! Both factories trust that present fields already carry the right type and
//! reject anything "falsy": a missing field, a zero or NaN id, or an empty
//! string. A legitimate id of `0` is therefore rejected, and a
//! whitespace-only name is accepted.

use crate::error::InvalidDataError;
use crate::model::employee::{Employee, EmployeeId, LooseEmployee, PartialEmployee};

/// Builds an `Employee` from a pre-typed partial record.
///
/// # Errors
/// - `InvalidDataError::Falsy` when any field is missing, zero, or empty.
pub fn construct_v1(data: &PartialEmployee) -> Result<Employee, InvalidDataError> {
    assemble(
        data.id,
        data.name.as_deref(),
        data.email.as_deref(),
        data.department.as_deref(),
    )
}

/// Builds an `Employee` from a loosely typed object.
///
/// Same checks as `construct_v1`; the looser input contract buys nothing.
///
/// # Errors
/// - `InvalidDataError::Falsy` when any field is missing, zero, or empty.
pub fn construct_v2(data: &LooseEmployee) -> Result<Employee, InvalidDataError> {
    assemble(
        data.id,
        data.name.as_deref(),
        data.email.as_deref(),
        data.department.as_deref(),
    )
}

fn assemble(
    id: Option<f64>,
    name: Option<&str>,
    email: Option<&str>,
    department: Option<&str>,
) -> Result<Employee, InvalidDataError> {
    let id = truthy_id(id).ok_or(InvalidDataError::Falsy)?;
    let name = truthy_text(name).ok_or(InvalidDataError::Falsy)?;
    let email = truthy_text(email).ok_or(InvalidDataError::Falsy)?;
    let department = truthy_text(department).ok_or(InvalidDataError::Falsy)?;

    Ok(Employee::from_validated(
        id,
        name.to_string(),
        email.to_string(),
        department.to_string(),
    ))
}

// Infinite ids are truthy but unrepresentable in `EmployeeId`, so they fail too.
fn truthy_id(id: Option<f64>) -> Option<EmployeeId> {
    id.filter(|value| *value != 0.0 && !value.is_nan())
        .and_then(EmployeeId::new)
}

fn truthy_text(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
