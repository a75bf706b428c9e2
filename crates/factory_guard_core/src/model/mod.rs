//! Domain model for validated employee records.
//!
//! # Responsibility
//! - Define the single flat record every factory produces.
//! - Keep the trusted record type separate from untrusted input shapes.
//!
//! # Invariants
//! - `Employee` has no public field setters; it is immutable once built.

pub mod employee;
