//! Error types for the CLI.

use thiserror::Error;

use rslkit_engine::EngineError;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine-level failure (e.g. an unknown license archetype).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The validated document contains error-severity findings.
    #[error("Document is invalid: {0} error finding(s)")]
    InvalidDocument(usize),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
