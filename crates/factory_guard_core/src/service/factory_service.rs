//! Factory selection and dispatch.
//!
//! # Responsibility
//! - Map a factory version string to one construction strategy.
//! - Run the selected strategy against an untyped value.
//! - Emit one metadata-only log event per run.
//!
//! # Invariants
//! - Input payloads are never written to logs.
//! - Strategy failures are returned unchanged inside `FactoryError`.

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::error::InvalidDataError;
use crate::factory::{construct_v1, construct_v2, construct_v3, inspect, literal_assign};
use crate::model::employee::{Employee, LooseEmployee, PartialEmployee, UncheckedEmployee};

/// Version string for the shape-typed factory.
pub const FACTORY_V1: &str = "v1";
/// Version string for the loosely typed factory.
pub const FACTORY_V2: &str = "v2";
/// Version string for the strict factory.
pub const FACTORY_V3: &str = "v3";
/// Version string for the unchecked pass-through.
pub const FACTORY_RAW: &str = "raw";

const SUPPORTED_FACTORY_VERSIONS: &[&str] = &[FACTORY_V1, FACTORY_V2, FACTORY_V3, FACTORY_RAW];

/// Returns supported factory version strings.
pub fn supported_factory_versions() -> &'static [&'static str] {
    SUPPORTED_FACTORY_VERSIONS
}

/// Construction strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FactoryVersion {
    V1,
    V2,
    #[default]
    V3,
    Raw,
}

impl FactoryVersion {
    /// Every version, in display order.
    pub const ALL: [FactoryVersion; 4] = [Self::V1, Self::V2, Self::V3, Self::Raw];

    /// Stable string id used by callers and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1 => FACTORY_V1,
            Self::V2 => FACTORY_V2,
            Self::V3 => FACTORY_V3,
            Self::Raw => FACTORY_RAW,
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::V1 => "Partial record; falsiness checks only.",
            Self::V2 => "Loosely typed object; falsiness checks only.",
            Self::V3 => "Unknown value; narrowing, coercion and semantic checks.",
            Self::Raw => "No factory; fields copied without any check.",
        }
    }

    /// Whether a successful run guarantees a validated `Employee`.
    pub fn validates(self) -> bool {
        !matches!(self, Self::Raw)
    }
}

impl Display for FactoryVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FactoryVersion {
    type Err = FactoryVersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_factory_version(value)
    }
}

/// Parses one factory version from its string id (case-insensitive).
pub fn parse_factory_version(value: &str) -> Result<FactoryVersion, FactoryVersionError> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(FactoryVersionError::Empty);
    }

    match normalized.as_str() {
        FACTORY_V1 => Ok(FactoryVersion::V1),
        FACTORY_V2 => Ok(FactoryVersion::V2),
        FACTORY_V3 => Ok(FactoryVersion::V3),
        FACTORY_RAW => Ok(FactoryVersion::Raw),
        _ => Err(FactoryVersionError::Unsupported(value.trim().to_string())),
    }
}

/// Factory version parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryVersionError {
    Empty,
    Unsupported(String),
}

impl Display for FactoryVersionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "factory version must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "factory version is unsupported: {value}; expected {}",
                SUPPORTED_FACTORY_VERSIONS.join("|")
            ),
        }
    }
}

impl Error for FactoryVersionError {}

/// Result of one successful factory run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Construction {
    /// Output of a validating factory.
    Validated(Employee),
    /// Output of the pass-through; nothing about it was checked.
    Unchecked(UncheckedEmployee),
}

impl Construction {
    pub fn employee(&self) -> Option<&Employee> {
        match self {
            Self::Validated(employee) => Some(employee),
            Self::Unchecked(_) => None,
        }
    }

    pub fn into_employee(self) -> Option<Employee> {
        match self {
            Self::Validated(employee) => Some(employee),
            Self::Unchecked(_) => None,
        }
    }
}

/// Factory dispatch errors.
#[derive(Debug)]
pub enum FactoryError {
    /// The value does not fit the static input shape of a permissive factory.
    Shape {
        version: FactoryVersion,
        source: serde_json::Error,
    },
    /// The selected factory rejected the value.
    InvalidData(InvalidDataError),
}

impl FactoryError {
    /// Returns the strategy error when the factory itself rejected the input.
    pub fn invalid_data(&self) -> Option<&InvalidDataError> {
        match self {
            Self::InvalidData(err) => Some(err),
            Self::Shape { .. } => None,
        }
    }
}

impl Display for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape { version, source } => write!(
                f,
                "input does not match the {version} factory input shape: {source}"
            ),
            Self::InvalidData(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FactoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shape { source, .. } => Some(source),
            Self::InvalidData(err) => Some(err),
        }
    }
}

impl From<InvalidDataError> for FactoryError {
    fn from(err: InvalidDataError) -> Self {
        Self::InvalidData(err)
    }
}

pub type FactoryResult<T> = Result<T, FactoryError>;

/// Use-case wrapper that runs one selected factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryService {
    version: FactoryVersion,
}

impl FactoryService {
    pub fn new(version: FactoryVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> FactoryVersion {
        self.version
    }

    /// Switches the active factory.
    pub fn select(&mut self, version: FactoryVersion) {
        debug!(
            "event=factory_select module=factory from={} to={}",
            self.version, version
        );
        self.version = version;
    }

    /// Runs the active factory against `input`.
    ///
    /// # Contract
    /// - `v1`/`v2` decode `input` into their static shape first; a type
    ///   mismatch there is `FactoryError::Shape`.
    /// - `v3` receives `input` as-is.
    /// - `raw` never fails.
    pub fn run(&self, input: &Value) -> FactoryResult<Construction> {
        let result = dispatch(self.version, input);
        log_outcome(self.version, input, &result);
        result
    }
}

fn dispatch(version: FactoryVersion, input: &Value) -> FactoryResult<Construction> {
    let employee = match version {
        FactoryVersion::V1 => construct_v1(&decode_shape::<PartialEmployee>(version, input)?)?,
        FactoryVersion::V2 => construct_v2(&decode_shape::<LooseEmployee>(version, input)?)?,
        FactoryVersion::V3 => construct_v3(input)?,
        FactoryVersion::Raw => return Ok(Construction::Unchecked(literal_assign(input))),
    };
    Ok(Construction::Validated(employee))
}

fn decode_shape<T: serde::de::DeserializeOwned>(
    version: FactoryVersion,
    input: &Value,
) -> FactoryResult<T> {
    T::deserialize(input).map_err(|source| FactoryError::Shape { version, source })
}

fn log_outcome(version: FactoryVersion, input: &Value, result: &FactoryResult<Construction>) {
    match result {
        Ok(Construction::Validated(_)) => {
            info!("event=employee_construct module=factory version={version} status=ok");
        }
        Ok(Construction::Unchecked(unchecked)) => {
            let missing = unchecked.missing_fields();
            if missing.is_empty() {
                info!("event=employee_construct module=factory version={version} status=unchecked");
            } else {
                warn!(
                    "event=employee_construct module=factory version={version} status=unchecked missing_fields={}",
                    missing.join(",")
                );
            }
        }
        Err(FactoryError::Shape { .. }) => {
            warn!("event=employee_construct module=factory version={version} status=shape_mismatch");
        }
        Err(FactoryError::InvalidData(_)) => {
            // Field names only; values may be user data.
            let invalid_fields = inspect(input)
                .map(|report| report.invalid_fields().join(","))
                .unwrap_or_else(|_| "<not_an_object>".to_string());
            warn!(
                "event=employee_construct module=factory version={version} status=rejected invalid_fields={invalid_fields}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_factory_version, supported_factory_versions, FactoryVersion, FactoryVersionError,
    };

    #[test]
    fn parses_all_supported_versions() {
        for version in FactoryVersion::ALL {
            assert_eq!(
                parse_factory_version(version.as_str()).expect("supported version"),
                version
            );
        }
        assert_eq!(supported_factory_versions().len(), FactoryVersion::ALL.len());
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(
            parse_factory_version(" RAW ").expect("raw parse"),
            FactoryVersion::Raw
        );
    }

    #[test]
    fn rejects_empty_and_unknown_versions() {
        assert_eq!(
            parse_factory_version("  ").unwrap_err(),
            FactoryVersionError::Empty
        );
        assert_eq!(
            parse_factory_version("v4").unwrap_err(),
            FactoryVersionError::Unsupported("v4".to_string())
        );
    }

    #[test]
    fn default_version_is_strict() {
        assert_eq!(FactoryVersion::default(), FactoryVersion::V3);
        assert!(FactoryVersion::V3.validates());
        assert!(!FactoryVersion::Raw.validates());
    }
}
