//! Employee domain model.
//!
//! # Responsibility
//! - Define the validated `Employee` record shared by every factory.
//! - Define the input shapes the permissive factories accept and the
//!   output shape of the unchecked pass-through.
//!
//! # Invariants
//! - `EmployeeId` is always finite (never NaN or infinite).
//! - An `Employee` only exists once a factory accepted all four fields.
//! - Deserializing an `Employee` runs the strict factory.
//!
//! # See also
//! - crate::factory

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{Display, Formatter};

use crate::error::InvalidDataError;
use crate::factory::strict::construct_v3;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Numeric employee identifier.
///
/// Stored as `f64` to keep the numeric range of untyped wire payloads, but
/// restricted to finite values so it has a total equality and always
/// serializes to a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EmployeeId(f64);

impl EmployeeId {
    /// Wraps a numeric id, returning `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// Returns the raw numeric value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the value as `i64` when it is an exactly representable integer.
    pub fn as_integer(self) -> Option<i64> {
        if self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

// NaN is unrepresentable, so equality is reflexive.
impl Eq for EmployeeId {}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.as_integer() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for EmployeeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).ok_or_else(|| {
            serde::de::Error::custom(format!("employee id must be finite, got {raw}"))
        })
    }
}

/// Validated employee record.
///
/// Fields are private to construction: the only ways to obtain one are the
/// factories in `crate::factory` (or deserialization, which runs the strict
/// factory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: String,
    department: String,
}

impl Employee {
    /// Assembles a record from fields a factory has already accepted.
    pub(crate) fn from_validated(
        id: EmployeeId,
        name: String,
        email: String,
        department: String,
    ) -> Self {
        Self {
            id,
            name,
            email,
            department,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }
}

impl TryFrom<&Value> for Employee {
    type Error = InvalidDataError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        construct_v3(value)
    }
}

impl TryFrom<Value> for Employee {
    type Error = InvalidDataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        construct_v3(&value)
    }
}

/// Pre-typed partial record accepted by the shape-typed factory.
///
/// Every field is optional, but a present field is already the right type.
/// Unknown keys are ignored when decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialEmployee {
    pub id: Option<f64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl From<&Employee> for PartialEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id.get()),
            name: Some(employee.name.clone()),
            email: Some(employee.email.clone()),
            department: Some(employee.department.clone()),
        }
    }
}

/// Loosely typed object accepted by the second permissive factory.
///
/// Same structure as `PartialEmployee`: `id: None` stands for both a
/// missing key and an explicit `null`. The looser contract adds no runtime
/// checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LooseEmployee {
    pub id: Option<f64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl From<&Employee> for LooseEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id.get()),
            name: Some(employee.name.clone()),
            email: Some(employee.email.clone()),
            department: Some(employee.department.clone()),
        }
    }
}

/// Output of the unchecked pass-through.
///
/// Each field holds whatever the input carried under that key, untouched.
/// `None` marks a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UncheckedEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Value>,
}

impl UncheckedEmployee {
    /// Returns the names of fields that never arrived.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("email", &self.email),
            ("department", &self.department),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

impl PartialEq<Employee> for UncheckedEmployee {
    /// Equal when every raw value carries the record's value unchanged.
    ///
    /// Ids compare numerically, so `123` and `123.0` match.
    fn eq(&self, other: &Employee) -> bool {
        let same_text = |raw: &Option<Value>, text: &str| {
            raw.as_ref().and_then(Value::as_str) == Some(text)
        };
        let same_id = self
            .id
            .as_ref()
            .and_then(Value::as_f64)
            .is_some_and(|id| id == other.id.get());

        same_id
            && same_text(&self.name, &other.name)
            && same_text(&self.email, &other.email)
            && same_text(&self.department, &other.department)
    }
}
