//! Command line interface for the extension packager.
//!
//! This module wires argument parsing, the packaging pipeline, and colored
//! user feedback together into the binary's entry point.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};
use crate::packager::{Packager, SettingsBuilder};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    if args.quiet && args.verbose {
        return Err(CliError::ConflictingArguments {
            arguments: vec!["--quiet".to_string(), "--verbose".to_string()],
        }
        .into());
    }
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let config = RuntimeConfig::from(&args);
    let settings = SettingsBuilder::new()
        .source_root(&args.source)
        .output_dir(&args.output)
        .build()?;

    config.section("Building extension...")?;
    config.verbose_println(&format!("Source: {}", args.source.display()))?;

    let report = Packager::new(settings).package().await?;

    for path in &report.staged {
        config.progress(&format!("Copied {}", path.display()))?;
    }
    for size in &report.placeholder_icons {
        config.progress(&format!("Created icons/icon{}.png", size))?;
    }
    config.progress(&format!("Archive created: {} bytes", report.archive_size))?;

    config.success("Build completed successfully!")?;
    config.indent(&format!("Extension files in {}", args.output.display()))?;
    config.indent(&format!(
        "Extension ZIP in {}",
        report.archive_path.display()
    ))?;

    Ok(0)
}

/// Validate arguments without executing (for testing)
#[allow(dead_code)] // Public API - preserved for external consumers
pub fn validate_args(args: &Args) -> std::result::Result<(), String> {
    args.validate()
}
