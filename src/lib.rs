//! Project scaffolding and packaging for application shells
//!
//! This library provides:
//! - skeleton project generation on top of the Android SDK
//! - Android APK builds through Apache Ant
//! - Windows AppX packaging through the Desktop App Converter
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;
pub mod scaffold;

// Re-export commonly used types
pub use error::{AppError, CliError, Result};
