//! Application error types.
//!
//! Wraps library errors with CLI-level failures and maps every error to
//! actionable recovery suggestions.

use crate::bundler::ErrorKind;
use thiserror::Error;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for all application operations
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML editing errors
    #[error("TOML error: {0}")]
    TomlEdit(#[from] toml_edit::TomlError),

    /// Scaffolding and packaging errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Project manifest is missing or malformed
    #[error("Invalid project manifest {path}: {reason}")]
    InvalidManifest {
        /// Manifest path
        path: String,
        /// Reason for the error
        reason: String,
    },
}

impl AppError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Bundler(e) => match e.kind() {
                ErrorKind::Environment => vec![
                    "Install the missing tool and make sure it is on PATH".to_string(),
                    "Run with RUST_LOG=debug to see where appshell looked".to_string(),
                ],
                ErrorKind::Subprocess => vec![
                    "Re-run with --verbose to see the tool's full output".to_string(),
                ],
                ErrorKind::InvalidInput => vec![
                    "Check the arguments and appshell.toml".to_string(),
                ],
                ErrorKind::Io | ErrorKind::Other => vec![
                    "Check file permissions and available disk space".to_string(),
                ],
            },
            Self::Cli(CliError::InvalidManifest { .. }) | Self::TomlEdit(_) => {
                vec!["Run appshell from a project created with `appshell create`, or pass --project-dir".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
