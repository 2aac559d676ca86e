/*!
 * Error Handling for the Test-Vector Extraction Engine
 *
 * Parsing never fails: unrecognised lines are dropped where they are read.
 * The errors below cover the only fatal classes, which are obtaining the
 * source documents, committing fixtures to disk and validating fixtures
 * that were read back.
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for fixture generation and loading
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("Source document unavailable: {} - {cause}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        cause: String,
        error_code: u32,
    },

    #[error("Fixture output failed: {operation} on {} - {cause}", .path.display())]
    OutputError {
        operation: String,
        path: PathBuf,
        cause: String,
        error_code: u32,
    },

    #[error("Invalid fixture {fixture}: vector {vector_id} - {details}")]
    InvalidFixture {
        fixture: String,
        vector_id: u32,
        details: String,
        error_code: u32,
    },

    #[error("Repository root not found from {}", .start.display())]
    RootNotFound { start: PathBuf, error_code: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Error code constants for different error categories
pub mod error_codes {
    // Input errors: 1000-1999
    pub const SOURCE_NOT_FOUND: u32 = 1001;
    pub const SOURCE_UNREADABLE: u32 = 1002;
    pub const SOURCE_NOT_UTF8: u32 = 1003;
    pub const ROOT_NOT_FOUND: u32 = 1004;

    // Output errors: 2000-2999
    pub const OUTPUT_DIRECTORY_FAILED: u32 = 2001;
    pub const OUTPUT_WRITE_FAILED: u32 = 2002;
    pub const OUTPUT_COMMIT_FAILED: u32 = 2003;

    // Fixture errors: 3000-3999
    pub const FIXTURE_BAD_HEX: u32 = 3001;
    pub const FIXTURE_LENGTH_MISMATCH: u32 = 3002;

    // Generic errors: 9000-9999
    pub const SERIALIZATION_FAILED: u32 = 9001;
    pub const IO_FAILED: u32 = 9002;
}

impl VectorError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            VectorError::SourceUnavailable { error_code, .. } => *error_code,
            VectorError::OutputError { error_code, .. } => *error_code,
            VectorError::InvalidFixture { error_code, .. } => *error_code,
            VectorError::RootNotFound { error_code, .. } => *error_code,
            VectorError::SerializationError(_) => error_codes::SERIALIZATION_FAILED,
            VectorError::IoError(_) => error_codes::IO_FAILED,
        }
    }

    /// Get a short name for the error category
    pub fn error_type(&self) -> &'static str {
        match self {
            VectorError::SourceUnavailable { .. } => "source_unavailable",
            VectorError::OutputError { .. } => "output",
            VectorError::InvalidFixture { .. } => "invalid_fixture",
            VectorError::RootNotFound { .. } => "root_not_found",
            VectorError::SerializationError(_) => "serialization",
            VectorError::IoError(_) => "io",
        }
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            VectorError::SourceUnavailable { path, .. } => format!(
                "Could not read specification extract '{}'. No fixtures were written.",
                path.display()
            ),
            VectorError::OutputError { path, .. } => format!(
                "Could not write fixture '{}'. Existing fixtures were left untouched.",
                path.display()
            ),
            VectorError::InvalidFixture { fixture, vector_id, .. } => format!(
                "Fixture '{}' holds an inconsistent entry for test set {}.",
                fixture, vector_id
            ),
            VectorError::RootNotFound { .. } => {
                "Could not locate the reference/ directory holding the specification extracts."
                    .to_string()
            }
            VectorError::SerializationError(_) => {
                "Fixture serialization failed. Data format may be corrupted.".to_string()
            }
            VectorError::IoError(_) => {
                "Input/output operation failed. Check file permissions and disk space.".to_string()
            }
        }
    }

    /// Get technical details for debugging
    pub fn technical_details(&self) -> HashMap<String, String> {
        let mut details = HashMap::new();

        details.insert("error_code".to_string(), self.error_code().to_string());
        details.insert("error_type".to_string(), self.error_type().to_string());

        match self {
            VectorError::SourceUnavailable { path, cause, .. } => {
                details.insert("path".to_string(), path.display().to_string());
                details.insert("cause".to_string(), cause.clone());
            }
            VectorError::OutputError {
                operation,
                path,
                cause,
                ..
            } => {
                details.insert("operation".to_string(), operation.clone());
                details.insert("path".to_string(), path.display().to_string());
                details.insert("cause".to_string(), cause.clone());
            }
            VectorError::InvalidFixture {
                fixture,
                vector_id,
                details: fixture_details,
                ..
            } => {
                details.insert("fixture".to_string(), fixture.clone());
                details.insert("vector_id".to_string(), vector_id.to_string());
                details.insert("details".to_string(), fixture_details.clone());
            }
            _ => {
                details.insert("details".to_string(), format!("{:?}", self));
            }
        }

        details
    }

    /// Get suggested remediation steps
    pub fn suggested_remediation(&self) -> Option<String> {
        match self {
            VectorError::SourceUnavailable { error_code, .. } => match *error_code {
                error_codes::SOURCE_NOT_UTF8 => Some(
                    "Re-export the specification chapter as UTF-8 text.".to_string(),
                ),
                _ => Some(
                    "Place the text extracts of TS 35.232 and TS 35.233 under reference/."
                        .to_string(),
                ),
            },
            VectorError::OutputError { .. } => Some(
                "Check that the testdata/ directory is writable and the disk is not full."
                    .to_string(),
            ),
            VectorError::InvalidFixture { .. } => Some(
                "Regenerate the fixtures from the reference extracts.".to_string(),
            ),
            VectorError::RootNotFound { .. } => Some(
                "Run from inside the repository or pass its root as the first argument."
                    .to_string(),
            ),
            _ => None,
        }
    }

    // Helper constructors

    pub fn source_unavailable(path: &Path, err: &std::io::Error) -> Self {
        let error_code = match err.kind() {
            std::io::ErrorKind::NotFound => error_codes::SOURCE_NOT_FOUND,
            std::io::ErrorKind::InvalidData => error_codes::SOURCE_NOT_UTF8,
            _ => error_codes::SOURCE_UNREADABLE,
        };

        VectorError::SourceUnavailable {
            path: path.to_path_buf(),
            cause: err.to_string(),
            error_code,
        }
    }

    pub fn output_error(operation: &str, path: &Path, cause: &str, error_code: u32) -> Self {
        VectorError::OutputError {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            cause: cause.to_string(),
            error_code,
        }
    }

    pub fn invalid_fixture(fixture: &str, vector_id: u32, details: &str, error_code: u32) -> Self {
        VectorError::InvalidFixture {
            fixture: fixture.to_string(),
            vector_id,
            details: details.to_string(),
            error_code,
        }
    }

    pub fn root_not_found(start: &Path) -> Self {
        VectorError::RootNotFound {
            start: start.to_path_buf(),
            error_code: error_codes::ROOT_NOT_FOUND,
        }
    }
}

// From implementations for automatic error conversion
impl From<std::io::Error> for VectorError {
    fn from(err: std::io::Error) -> Self {
        VectorError::IoError(format!("IO operation failed: {}", err))
    }
}

impl From<serde_json::Error> for VectorError {
    fn from(err: serde_json::Error) -> Self {
        VectorError::SerializationError(err.to_string())
    }
}

/// Result type alias for fixture operations
pub type VectorResult<T> = Result<T, VectorError>;
