
use std::fmt;

pub mod testing;

/// Main error type for schema analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormError {
    // ============ Dependency Construction ============
    /// Functional dependency built with an empty determinant (left side)
    EmptyDeterminant {
        dependent: String,
    },

    /// Functional dependency built with an empty dependent (right side)
    EmptyDependent {
        determinant: String,
    },

    // ============ Identifier Validation ============
    /// Attribute name rejected by the identifier rules
    InvalidAttributeName {
        name: String,
        reason: String,
    },

    // ============ Serialization ============
    /// Report serialization failed
    SerializationError {
        message: String,
    },
}

impl NormError {
    /// Get the stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        use NormError::*;
        match self {
            EmptyDeterminant { .. } => "empty-determinant",
            EmptyDependent { .. } => "empty-dependent",
            InvalidAttributeName { .. } => "invalid-attribute-name",
            SerializationError { .. } => "serialization-error",
        }
    }
}

impl fmt::Display for NormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use NormError::*;
        match self {
            EmptyDeterminant { dependent } => {
                write!(
                    f,
                    "dependency determining {} has an empty determinant",
                    dependent
                )
            }
            EmptyDependent { determinant } => {
                write!(
                    f,
                    "dependency with determinant {} has an empty dependent",
                    determinant
                )
            }
            InvalidAttributeName { name, reason } => {
                write!(f, "invalid attribute name '{}': {}", name, reason)
            }
            SerializationError { message } => {
                write!(f, "serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for NormError {}

/// Result type for schema analysis operations
pub type NormResult<T> = Result<T, NormError>;

/// Convert serde_json::Error to NormError
impl From<serde_json::Error> for NormError {
    fn from(e: serde_json::Error) -> Self {
        NormError::SerializationError {
            message: format!("JSON serialization error: {}", e),
        }
    }
}
