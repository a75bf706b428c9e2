//! Construction error shared by every employee factory.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prefix shared by every rejection message.
pub const INVALID_DATA_MESSAGE: &str = "Invalid Employee data";

/// Raised when an input cannot become an `Employee`.
///
/// Variants record where construction stopped, never which field failed.
/// Callers that need field-level detail must re-inspect the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDataError {
    /// A permissive factory found a falsy field.
    Falsy,
    /// The strict factory received a primitive or `null`.
    NotAnObject,
    /// The strict factory rejected an object; carries its compact JSON.
    Rejected { snapshot: String },
}

impl InvalidDataError {
    /// Returns the serialized input for strict rejections.
    pub fn snapshot(&self) -> Option<&str> {
        match self {
            Self::Rejected { snapshot } => Some(snapshot.as_str()),
            Self::Falsy | Self::NotAnObject => None,
        }
    }
}

impl Display for InvalidDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Falsy => write!(f, "{INVALID_DATA_MESSAGE}"),
            Self::NotAnObject => write!(f, "{INVALID_DATA_MESSAGE}: not an object"),
            Self::Rejected { snapshot } => write!(f, "{INVALID_DATA_MESSAGE}: {snapshot}"),
        }
    }
}

impl Error for InvalidDataError {}

#[cfg(test)]
mod tests {
    use super::InvalidDataError;

    #[test]
    fn messages_match_each_stop_point() {
        assert_eq!(InvalidDataError::Falsy.to_string(), "Invalid Employee data");
        assert_eq!(
            InvalidDataError::NotAnObject.to_string(),
            "Invalid Employee data: not an object"
        );
        let rejected = InvalidDataError::Rejected {
            snapshot: r#"{"foo":"bar"}"#.to_string(),
        };
        assert_eq!(rejected.to_string(), r#"Invalid Employee data: {"foo":"bar"}"#);
        assert_eq!(rejected.snapshot(), Some(r#"{"foo":"bar"}"#));
    }
}
