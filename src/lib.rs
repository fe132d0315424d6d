//! Browser extension packaging library.
//!
//! This library turns an extension source working directory into a
//! deployable ZIP archive in a single forward pass:
//!
//! 1. Clean the output directory
//! 2. Stage the manifest and source directories
//! 3. Backfill missing required icons with placeholders
//! 4. Compress the staged tree at maximum deflate level
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
pub use packager::{PackageReport, Packager, Settings, SettingsBuilder};
