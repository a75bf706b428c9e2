//! Runtime validation of untrusted employee payloads.
//! This crate owns the record invariants and every construction strategy.

pub mod error;
pub mod factory;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod service;

pub use error::{InvalidDataError, INVALID_DATA_MESSAGE};
pub use factory::{
    construct_v1, construct_v2, construct_v3, inspect, literal_assign, EmployeeFieldReport,
    FieldState,
};
pub use fixtures::{fixture, fixtures, Fixture};
pub use logging::{
    default_log_level, init_logging, logging_status, parse_log_level, LogLevel, LogTarget,
    LoggingConfig, LoggingError,
};
pub use model::employee::{Employee, EmployeeId, LooseEmployee, PartialEmployee, UncheckedEmployee};
pub use service::factory_service::{
    parse_factory_version, supported_factory_versions, Construction, FactoryError,
    FactoryResult, FactoryService, FactoryVersion, FactoryVersionError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
