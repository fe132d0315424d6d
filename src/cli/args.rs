//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Browser extension packager
#[derive(Parser, Debug)]
#[command(
    name = "extpack",
    version,
    about = "Packages a browser extension source tree into a distributable ZIP",
    long_about = "Stages the manifest, script and icon directories into a clean output
directory, backfills missing required icons (16, 48, 128) with placeholders,
and compresses the result into <output>/extension.zip.

Usage:
  extpack
  extpack --source ./my-extension --output dist
  extpack --quiet

Exit code 0 = archive guaranteed to exist inside the output directory."
)]
pub struct Args {
    /// Source working directory containing manifest.json, src/ and icons/
    #[arg(short = 's', long, value_name = "DIR", default_value = ".")]
    pub source: PathBuf,

    /// Output directory; deleted and recreated on every run
    #[arg(short = 'o', long, value_name = "DIR", default_value = "dist")]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print extra progress detail
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.source.exists() {
            return Err(format!(
                "Source directory does not exist: {}",
                self.source.display()
            ));
        }
        if !self.source.is_dir() {
            return Err(format!(
                "Source is not a directory: {}",
                self.source.display()
            ));
        }
        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_source() {
        let args = Args {
            source: PathBuf::from("definitely/not/here"),
            output: PathBuf::from("dist"),
            quiet: false,
            verbose: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let args = Args {
            source: PathBuf::from("."),
            output: PathBuf::from("dist"),
            quiet: false,
            verbose: false,
        };
        assert!(args.validate().is_ok());
    }
}
