//! Error types for YAML parsing.

use thiserror::Error;

/// Result type alias for keyline-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during YAML parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner
    #[error("{message} at line {line}, column {column}")]
    Syntax {
        message: String,
        /// Line as reported by the scanner (1-based)
        line: usize,
        /// Column (1-based)
        column: usize,
    },

    /// The event stream did not describe a well-formed tree
    #[error("invalid YAML structure: {0}")]
    InvalidStructure(String),
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        let marker = err.marker();
        Error::Syntax {
            message: err.info().to_string(),
            line: marker.line(),
            column: marker.col() + 1,
        }
    }
}
