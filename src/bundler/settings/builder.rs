//! Builder for constructing Settings.

use super::{AndroidSettings, PackageSettings, Settings, WindowsSettings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use appshell::bundler::{SettingsBuilder, WindowsSettings};
///
/// # fn example() -> appshell::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_directory("com.example.Foo")
///     .windows_settings(WindowsSettings::default())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_directory: Option<PathBuf>,
    project_out_directory: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    windows_settings: WindowsSettings,
    android_settings: AndroidSettings,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// Default: current directory
    pub fn project_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory packaging output is written to.
    ///
    /// Default: the project directory
    pub fn project_out_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_out_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the packaging metadata record.
    ///
    /// Default: empty record (sufficient for Android builds only)
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets converter configuration.
    pub fn windows_settings(mut self, settings: WindowsSettings) -> Self {
        self.windows_settings = settings;
        self
    }

    /// Sets Android SDK configuration.
    pub fn android_settings(mut self, settings: AndroidSettings) -> Self {
        self.android_settings = settings;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the project directory is not given and the
    /// current directory cannot be determined.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let project_directory = match self.project_directory {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let project_out_directory = self
            .project_out_directory
            .unwrap_or_else(|| project_directory.clone());

        Ok(Settings::new(
            self.package_settings.unwrap_or_default(),
            self.windows_settings,
            self.android_settings,
            project_directory,
            project_out_directory,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_directory_defaults_to_project() {
        let settings = SettingsBuilder::new()
            .project_directory("/work/foo")
            .build()
            .expect("settings");
        assert_eq!(settings.project_out_directory(), Path::new("/work/foo"));
        assert_eq!(
            settings.android_project_directory(),
            PathBuf::from("/work/foo/android")
        );
    }

    #[test]
    fn test_defaults() {
        let settings = SettingsBuilder::new()
            .project_directory("p")
            .build()
            .expect("settings");
        assert_eq!(
            settings.windows().converter,
            PathBuf::from("DesktopAppConverter.cmd")
        );
        assert_eq!(settings.windows().installer_arguments, "/S");
        assert!(settings.windows().timeout.is_none());
        assert_eq!(settings.android().target, "android-21");
        assert_eq!(settings.package(), &PackageSettings::default());
    }
}
