//! Android platform-specific settings.

use std::path::PathBuf;

/// Android SDK tool configuration.
#[derive(Clone, Debug)]
pub struct AndroidSettings {
    /// SDK project generator; a bare name is resolved against `PATH`, then
    /// `$ANDROID_HOME/tools` and `$ANDROID_SDK_ROOT/tools`.
    ///
    /// Default: `android`
    pub sdk_tool: PathBuf,

    /// Build tool run inside the generated project.
    ///
    /// Default: `ant`
    pub build_tool: PathBuf,

    /// SDK target id passed to `android create project --target`.
    ///
    /// Default: `android-21`
    pub target: String,
}

impl Default for AndroidSettings {
    fn default() -> Self {
        Self {
            sdk_tool: PathBuf::from("android"),
            build_tool: PathBuf::from("ant"),
            target: "android-21".to_string(),
        }
    }
}
