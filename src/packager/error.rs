//! Error types for packaging operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the packaging pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive errors
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Directory traversal errors
    #[error("Directory walk error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Relative path computation errors
    #[error("Path error: {0}")]
    PathError(#[from] std::path::StripPrefixError),

    /// A staging rule marked required had no source asset
    #[error("Required source asset missing: {path}")]
    MissingRequired {
        /// The source path that was expected to exist
        path: PathBuf,
    },

    /// Generic errors
    #[error("{0}")]
    GenericError(String),
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::Error::GenericError(format!($($arg)*)).into())
    };
}

/// Extension trait attaching operation and path context to IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with the failing operation and the path involved.
    fn fs_context(self, op: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, op: &str, path: &Path) -> Result<T> {
        self.map_err(|e| {
            Error::GenericError(format!("{} failed at {}: {}", op, path.display(), e))
        })
    }
}
