//! Error handling for the apigen CLI.
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`) carry hints for the user
//! - **Library errors** from `apigen-docs` convert automatically via `#[from]`
//!
//! # Example
//!
//! ```rust,no_run
//! use apigen_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_source(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Indexing, model building or rendering errors
    #[error(transparent)]
    Docs(#[from] apigen_docs::DocsError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more documents could not be written
    #[error("{failed} of {total} documents could not be written")]
    WriteFailed {
        /// Number of failed documents
        failed: usize,
        /// Number of documents in the batch
        total: usize,
    },
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the expected location
    #[error("Config file not found: {}\n\nHint: Run 'apigen init' or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Config file already exists and would be overwritten
    #[error("Config file already exists: {}\n\nHint: Pass --force to overwrite it", .0.display())]
    AlreadyExists(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_docs::DocsError;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("apigen.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("apigen.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::AlreadyExists(PathBuf::from("apigen.config.json"));
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_docs_error() {
        let docs_err = DocsError::ClassNotFound {
            name: "UserService".to_string(),
        };
        let cli_err: CliError = docs_err.into();
        assert!(matches!(cli_err, CliError::Docs(_)));
        assert_eq!(
            cli_err.to_string(),
            "type 'UserService' not found in indexed sources"
        );
    }

    #[test]
    fn test_write_failed_message() {
        let err = CliError::WriteFailed { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 documents could not be written");
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/Path.java").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
