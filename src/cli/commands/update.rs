//! `appshell update <version>`.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::metadata;

/// Set the project version.
pub fn execute(version: &str, config: &RuntimeConfig) -> Result<i32> {
    let previous = metadata::set_version(config.project_dir(), version)?;
    config.success(&format!("Updated version {previous} → {version}"))?;
    Ok(0)
}
