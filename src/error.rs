//! Top-level error types for the packager CLI.
//!
//! This module defines the error surface of the binary: CLI argument errors,
//! IO errors, and packaging errors, all of which map to a non-zero exit.

use thiserror::Error;

/// Result type alias for CLI-level operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging pipeline errors
    #[error("Packaging error: {0}")]
    Packaging(#[from] crate::packager::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Conflicting arguments
    #[error("Conflicting arguments: {arguments:?}")]
    ConflictingArguments {
        /// Arguments that conflict
        arguments: Vec<String>,
    },
}
