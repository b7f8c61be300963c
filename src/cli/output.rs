//! Terminal output with colors and verbosity control.

use crate::bundler::Reporter;
use owo_colors::{OwoColorize, Stream};
use std::io::{self, Write};

/// Writes user-facing messages, honouring `--verbose` and `--quiet`.
///
/// Progress and success go to stdout; warnings and errors go to stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Create an output manager; `quiet` suppresses everything but errors.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        writeln!(
            io::stdout(),
            "{}",
            message.if_supports_color(Stream::Stdout, |t| t.dimmed())
        )
    }

    /// Print a progress step to stdout.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stdout(),
            "{} {}",
            "→".if_supports_color(Stream::Stdout, |t| t.cyan()),
            message
        )
    }

    /// Print a success message to stdout.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stdout(),
            "{} {}",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            message
        )
    }

    /// Print a warning to stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stderr(),
            "{} {}",
            "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
            message
        )
    }

    /// Errors are printed even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        writeln!(
            io::stderr(),
            "{} {}",
            "✗".if_supports_color(Stream::Stderr, |t| t.red()),
            message
        )
    }

    /// Print a bold, underlined section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = io::stdout();
        writeln!(out)?;
        writeln!(out, "{}", title.if_supports_color(Stream::Stdout, |t| t.bold()))?;
        writeln!(out, "{}", "─".repeat(title.chars().count()))
    }

    /// Print a line indented under the previous message.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "   {message}")
    }
}

// Reporter callbacks cannot fail; a closed terminal only loses messages.
impl Reporter for OutputManager {
    fn info(&self, message: &str) {
        let _ = self.progress(message);
    }

    fn warning(&self, message: &str) {
        let _ = self.warn(message);
    }

    fn error(&self, message: &str) {
        let _ = OutputManager::error(self, message);
    }

    fn on_stdout(&self, line: &str) {
        let _ = self.verbose(line);
    }
}
