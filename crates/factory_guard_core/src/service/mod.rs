//! Core use-case services.
//!
//! # Responsibility
//! - Select and run employee factories for callers such as the CLI harness.
//! - Keep logging out of the pure factory functions.

pub mod factory_service;
