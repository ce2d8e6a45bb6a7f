//! Error types for file handling, rendering and enrichment
//!
//! Pattern analysis itself never fails; every variant here belongs to an
//! I/O edge of the crate.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible kolam operations
#[derive(Debug)]
pub enum KolamError {
    /// Failed to read an input file
    InputRead {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input file content is not valid pattern JSON
    InputParse {
        /// Path to the input file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Input data doesn't describe anything the tool can work with
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to serialize a result
    Serialization {
        /// What was being serialized
        operation: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Remote enrichment is unavailable or its backend failed
    Enrichment {
        /// Name of the configured vision service
        service: String,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRead { path, source } => {
                write!(f, "Failed to read input '{}': {source}", path.display())
            }
            Self::InputParse { path, source } => {
                write!(f, "Failed to parse input '{}': {source}", path.display())
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { operation, source } => {
                write!(f, "Serialization error in {operation}: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Enrichment { service, reason } => {
                write!(f, "Enrichment via {service} failed: {reason}")
            }
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::InputParse { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for kolam results
pub type Result<T> = std::result::Result<T, KolamError>;

impl From<image::ImageError> for KolamError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for KolamError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for KolamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> KolamError {
    KolamError::InvalidInput {
        reason: reason.to_string(),
    }
}
