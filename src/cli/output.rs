//! Colored terminal output for CLI feedback.
//!
//! Progress reporting is routed through [`OutputManager`] so the packaging
//! core never writes to stdout directly.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Manages colored terminal output with verbosity control.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn colored(&self, color: Color, prefix: &str, message: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stdout, "{}", prefix)?;
        stdout.reset()?;
        writeln!(stdout, "{}", message)
    }

    /// Prints a progress step.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.colored(Color::Cyan, "→ ", message)
    }

    /// Prints a success message.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.colored(Color::Green, "✓ ", message)
    }

    /// Prints a warning message.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.colored(Color::Yellow, "⚠ ", message)
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "{}", title)?;
        stdout.reset()
    }

    /// Prints an indented detail line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout, "  {}", message)
    }

    /// Prints a message only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout, "{}", message)
    }
}
