use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for indexing, model building and document output.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to read, create or persist a file.
    #[error("I/O failure on '{path}': {error}")]
    Io {
        /// Path of the file or directory that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The Java front end could not produce a syntax tree.
    #[error("failed to parse source '{path}': {message}")]
    Parse {
        /// Path to the source file.
        path: PathBuf,
        /// Aggregated parser error message.
        message: String,
    },

    /// The requested type is not declared in any indexed source.
    #[error("type '{name}' not found in indexed sources")]
    ClassNotFound {
        /// Simple name that was looked up.
        name: String,
    },

    /// The requested method is not declared on the type.
    #[error("method '{method}' not found on type '{class}'")]
    MethodNotFound {
        /// Declaring type that was searched.
        class: String,
        /// Method name that was looked up.
        method: String,
    },

    /// Generic error variant.
    #[error("{message}")]
    Other {
        /// Human-readable error message.
        message: String,
    },
}

impl DocsError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}
