//! Strict factory for values of unknown shape.
//!
//! # Responsibility
//! - Narrow an untyped `serde_json::Value` field by field.
//! - Coerce numeric text ids into numbers.
//! - Reject the whole input when any field is absent or unusable.
//!
//! # Invariants
//! - Presence is tracked explicitly, so an id of `0` is valid here.
//! - Extra keys are ignored, never rejected.
//! - Stored text is the original value; trimming only decides validity.
//! - Rejections carry the full input as compact JSON, never per-field detail.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::InvalidDataError;
use crate::model::employee::{Employee, EmployeeId};

static DECIMAL_LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("valid decimal literal regex")
});
static RADIX_LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0([xXoObB])([0-9a-fA-F]+)$").expect("valid radix literal regex")
});

/// Outcome of narrowing one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState<T> {
    /// Key present and value usable.
    Valid(T),
    /// Key present but value has the wrong type or fails a semantic check.
    Invalid,
    /// Key missing from the input.
    Absent,
}

impl<T> FieldState<T> {
    fn narrow(raw: Option<&Value>, decode: impl FnOnce(&Value) -> Option<T>) -> Self {
        match raw {
            None => Self::Absent,
            Some(value) => decode(value).map_or(Self::Invalid, Self::Valid),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid | Self::Absent => None,
        }
    }
}

/// Per-field narrowing result for one input.
///
/// Used for diagnostics; the strict factory itself only reports whether the
/// whole input was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFieldReport {
    pub id: FieldState<EmployeeId>,
    pub name: FieldState<String>,
    pub email: FieldState<String>,
    pub department: FieldState<String>,
}

impl EmployeeFieldReport {
    /// Names of fields that are absent or invalid, in declaration order.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("id", self.id.is_valid()),
            ("name", self.name.is_valid()),
            ("email", self.email.is_valid()),
            ("department", self.department.is_valid()),
        ]
        .into_iter()
        .filter(|(_, valid)| !valid)
        .map(|(name, _)| name)
        .collect()
    }

    /// Assembles the record when all four fields are valid.
    pub fn into_employee(self) -> Option<Employee> {
        Some(Employee::from_validated(
            self.id.into_option()?,
            self.name.into_option()?,
            self.email.into_option()?,
            self.department.into_option()?,
        ))
    }
}

/// Builds an `Employee` from a value of unknown shape.
///
/// # Errors
/// - `InvalidDataError::NotAnObject` for `null`, booleans, numbers and strings.
/// - `InvalidDataError::Rejected` when any field is absent or invalid.
pub fn construct_v3(data: &Value) -> Result<Employee, InvalidDataError> {
    inspect(data)?
        .into_employee()
        .ok_or_else(|| InvalidDataError::Rejected {
            snapshot: data.to_string(),
        })
}

/// Narrows every field of `data` without deciding acceptance.
///
/// Arrays count as object-like: they pass the shape check and every field
/// resolves to `FieldState::Absent`.
///
/// # Errors
/// - `InvalidDataError::NotAnObject` for `null` and other primitives.
pub fn inspect(data: &Value) -> Result<EmployeeFieldReport, InvalidDataError> {
    if !matches!(data, Value::Object(_) | Value::Array(_)) {
        return Err(InvalidDataError::NotAnObject);
    }

    Ok(EmployeeFieldReport {
        id: FieldState::narrow(field(data, "id"), decode_id),
        name: FieldState::narrow(field(data, "name"), decode_non_blank),
        email: FieldState::narrow(field(data, "email"), decode_email),
        department: FieldState::narrow(field(data, "department"), decode_non_blank),
    })
}

fn field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.as_object()?.get(key)
}

fn decode_id(value: &Value) -> Option<EmployeeId> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => parse_numeric_text(text)?,
        _ => return None,
    };
    EmployeeId::new(number)
}

fn decode_non_blank(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|text| !trim_js_whitespace(text).is_empty())
        .map(str::to_string)
}

fn decode_email(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|text| text.contains('@'))
        .map(str::to_string)
}

// ECMAScript WhiteSpace and LineTerminator. Differs from `char::is_whitespace`:
// U+FEFF is included, U+0085 is not.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_js_whitespace(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

/// Parses text that is entirely one finite numeric literal.
///
/// Accepts decimal literals with optional sign, fraction and exponent, and
/// unsigned `0x`/`0o`/`0b` integers, after trimming surrounding whitespace.
/// Blank text, `Infinity`, `NaN` and trailing garbage are rejected.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = trim_js_whitespace(text);
    if trimmed.is_empty() {
        return None;
    }

    let value = if DECIMAL_LITERAL_RE.is_match(trimmed) {
        trimmed.parse::<f64>().ok()?
    } else if let Some(captures) = RADIX_LITERAL_RE.captures(trimmed) {
        let radix = match &captures[1] {
            "x" | "X" => 16,
            "o" | "O" => 8,
            _ => 2,
        };
        captures[2].chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc * f64::from(radix) + f64::from(digit))
        })?
    } else {
        return None;
    };

    value.is_finite().then_some(value)
}
