//! Error types for scaffolding and packaging operations.
//!
//! Every failure is classified by [`ErrorKind`] so callers can tell an
//! environment problem (missing SDK or converter) from a failed subprocess
//! without matching on individual variants.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a bundler failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required external tool could not be located
    Environment,
    /// An external tool ran and failed
    Subprocess,
    /// Caller-supplied data was rejected
    InvalidInput,
    /// Filesystem or pipe error
    Io,
    /// Anything else
    Other,
}

/// Errors produced while generating or packaging a project.
#[derive(Error, Debug)]
pub enum Error {
    /// Required executable is not installed or not on `PATH`
    #[error("{tool} not found. {hint}")]
    ToolNotFound {
        /// Executable that was searched for
        tool: String,
        /// What the user should do about it
        hint: String,
    },

    /// Executable exists but could not be spawned or awaited
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program that was launched
        command: String,
        /// Underlying spawn error
        error: std::io::Error,
    },

    /// Executable ran to completion with a non-zero exit code
    #[error("`{command}` exited with code {code}{}", tail(.diagnostics))]
    NonZeroExit {
        /// Program that was launched
        command: String,
        /// Exit code reported by the OS
        code: i32,
        /// Last lines written to stderr
        diagnostics: String,
    },

    /// Executable was terminated by a signal before reporting an exit code
    #[error("`{command}` was terminated before it exited{}", tail(.diagnostics))]
    Terminated {
        /// Program that was launched
        command: String,
        /// Last lines written to stderr
        diagnostics: String,
    },

    /// Executable exceeded the configured timeout and was killed
    #[error("`{command}` timed out after {seconds}s")]
    TimedOut {
        /// Program that was launched
        command: String,
        /// Timeout that elapsed
        seconds: u64,
    },

    /// Reverse-domain package identifier is malformed
    #[error("invalid package identifier '{0}': expected a form like com.example.Foo")]
    InvalidPackageId(String),

    /// Version string is not usable for a package
    #[error("invalid version '{0}': expected a semantic version or 1-4 dot-separated numbers")]
    InvalidVersion(String),

    /// Target project directory is already present
    #[error("{} already exists", .0.display())]
    ProjectExists(PathBuf),

    /// Packaging metadata is incomplete
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Filesystem error with the operation and path that failed
    #[error("{context} ({}): {error}", .path.display())]
    Fs {
        /// What was being done
        context: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        error: std::io::Error,
    },

    /// Bare IO error
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Catch-all with a message
    #[error("{0}")]
    GenericError(String),
}

fn tail(diagnostics: &str) -> String {
    if diagnostics.is_empty() {
        String::new()
    } else {
        format!("\n{diagnostics}")
    }
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ToolNotFound { .. } => ErrorKind::Environment,
            Self::CommandFailed { .. }
            | Self::NonZeroExit { .. }
            | Self::Terminated { .. }
            | Self::TimedOut { .. } => ErrorKind::Subprocess,
            Self::InvalidPackageId(_)
            | Self::InvalidVersion(_)
            | Self::InvalidMetadata(_)
            | Self::ProjectExists(_) => ErrorKind::InvalidInput,
            Self::Fs { .. } | Self::IoError(_) => ErrorKind::Io,
            Self::Template(_) | Self::GenericError(_) => ErrorKind::Other,
        }
    }

    /// Exit code of the failed subprocess, if it reported one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::NonZeroExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap an IO error with the operation being performed and the path involved.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Attach a message to a missing value or a foreign error.
pub trait Context<T> {
    /// Turn `None` or an error into [`Error::GenericError`] carrying `context`.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: std::error::Error> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Return early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
