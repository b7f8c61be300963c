//! External tool detection and availability checking.
//!
//! Detection runs before any generation or packaging work starts, so a
//! missing toolchain is reported as [`Error::ToolNotFound`] without leaving
//! partial output behind.

use crate::bundler::{
    error::{Error, Result},
    settings::{AndroidSettings, WindowsSettings},
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Message shown when the Android SDK cannot be located.
pub const ANDROID_SDK_HINT: &str = "The Android SDK could not be found. \
    Make sure the directory containing the 'android' executable is mentioned \
    in the PATH environment variable.";

/// Message shown when the Desktop App Converter cannot be located.
pub const CONVERTER_HINT: &str = "Install the Desktop App Converter and make sure \
    its directory is mentioned in the PATH environment variable, or pass --converter.";

/// Message shown when Apache Ant cannot be located.
pub const ANT_HINT: &str = "Install Apache Ant and make sure the directory containing \
    the 'ant' executable is mentioned in the PATH environment variable.";

/// Resolve `program` on `PATH`, or check it directly if it contains a path separator.
pub fn locate(program: &Path, hint: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program.display(), path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("{} not found: {}", program.display(), e);
            Err(Error::ToolNotFound {
                tool: program.display().to_string(),
                hint: hint.to_string(),
            })
        }
    }
}

/// Locate the Desktop App Converter.
pub fn locate_converter(settings: &WindowsSettings) -> Result<PathBuf> {
    locate(&settings.converter, CONVERTER_HINT)
}

/// Locate Apache Ant.
pub fn locate_ant(settings: &AndroidSettings) -> Result<PathBuf> {
    locate(&settings.build_tool, ANT_HINT)
}

/// Locate the Android SDK project tool.
///
/// Searches `PATH` first, then the `tools` directories of `$ANDROID_HOME`
/// and `$ANDROID_SDK_ROOT`.
pub fn locate_android_sdk(settings: &AndroidSettings) -> Result<PathBuf> {
    if let Ok(path) = which::which(&settings.sdk_tool) {
        log::debug!("Found Android SDK tool at: {}", path.display());
        return Ok(path);
    }

    let fallback = sdk_search_dirs(
        std::env::var_os("ANDROID_HOME"),
        std::env::var_os("ANDROID_SDK_ROOT"),
    );
    if !fallback.is_empty() {
        let cwd = std::env::current_dir()?;
        if let Ok(joined) = std::env::join_paths(&fallback) {
            if let Ok(path) = which::which_in(&settings.sdk_tool, Some(joined), cwd) {
                log::debug!("Found Android SDK tool at: {}", path.display());
                return Ok(path);
            }
        }
    }

    Err(Error::ToolNotFound {
        tool: settings.sdk_tool.display().to_string(),
        hint: ANDROID_SDK_HINT.to_string(),
    })
}

/// SDK `tools` directories derived from the SDK environment variables.
pub fn sdk_search_dirs(android_home: Option<OsString>, sdk_root: Option<OsString>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for root in [android_home, sdk_root].into_iter().flatten() {
        if root.is_empty() {
            continue;
        }
        let tools = PathBuf::from(root).join("tools");
        if !dirs.contains(&tools) {
            dirs.push(tools);
        }
    }
    dirs
}
