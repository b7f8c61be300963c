//! Windows platform-specific settings.

use std::{path::PathBuf, time::Duration};

/// Default converter executable looked up on `PATH`.
pub const DEFAULT_CONVERTER: &str = "DesktopAppConverter.cmd";

/// Arguments handed to the wrapped installer for an unattended run.
pub const DEFAULT_INSTALLER_ARGUMENTS: &str = "/S";

/// Desktop App Converter configuration.
///
/// # Configuration
///
/// Add to `appshell.toml`:
///
/// ```toml
/// [windows]
/// manufacturer = "Example Corp"
/// installer = "dist/Foo-setup.exe"
/// converter = "C:\\DAC\\DesktopAppConverter.cmd"
/// installer_arguments = "/S"
/// ```
#[derive(Clone, Debug)]
pub struct WindowsSettings {
    /// Converter program; a bare name is resolved against `PATH`.
    ///
    /// Default: `DesktopAppConverter.cmd`
    pub converter: PathBuf,

    /// Silent-install arguments for the wrapped installer.
    ///
    /// Default: `/S`
    pub installer_arguments: String,

    /// Kill the converter if it runs longer than this.
    ///
    /// Default: None (wait indefinitely)
    pub timeout: Option<Duration>,
}

impl Default for WindowsSettings {
    fn default() -> Self {
        Self {
            converter: PathBuf::from(DEFAULT_CONVERTER),
            installer_arguments: DEFAULT_INSTALLER_ARGUMENTS.to_string(),
            timeout: None,
        }
    }
}
