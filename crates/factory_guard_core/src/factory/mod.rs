//! Employee factories.
//!
//! # Responsibility
//! - Turn caller input into a validated `Employee` or an `InvalidDataError`.
//! - Keep each factory a pure function of its argument.
//!
//! # Invariants
//! - No factory mutates its input or keeps a reference to it.
//! - A successful call always returns a fully populated record.
//! - Only `literal_assign` skips validation, and its output is not an
//!   `Employee`.
//!
//! | Factory | Input | Checks |
//! |---|---|---|
//! | `construct_v1` | `PartialEmployee` | falsiness |
//! | `construct_v2` | `LooseEmployee` | falsiness |
//! | `construct_v3` | `serde_json::Value` | narrowing, coercion, semantics |
//! | `literal_assign` | `serde_json::Value` | none |

pub mod falsy;
pub mod strict;
pub mod unchecked;

pub use falsy::{construct_v1, construct_v2};
pub use strict::{construct_v3, inspect, EmployeeFieldReport, FieldState};
pub use unchecked::literal_assign;
