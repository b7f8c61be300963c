//! Core Settings struct and implementations.

use super::{AndroidSettings, PackageSettings, WindowsSettings};
use std::path::{Path, PathBuf};

/// Main settings for packaging operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// Contains the packaging metadata record and per-platform tool configuration.
///
/// # Examples
///
/// ```no_run
/// use appshell::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> appshell::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_out_directory("build")
///     .package_settings(PackageSettings {
///         product_name: "Foo".into(),
///         version: "1.0.0.0".into(),
///         manufacturer: "Example Corp".into(),
///         app_name: "Foo".into(),
///         installer: "Foo-setup.exe".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Packaging metadata record.
    package: PackageSettings,

    /// Desktop App Converter configuration.
    windows: WindowsSettings,

    /// Android SDK configuration.
    android: AndroidSettings,

    /// Project root; holds `appshell.toml`, `app/` and `android/`.
    project_directory: PathBuf,

    /// Directory the converter runs in and artifacts land in.
    project_out_directory: PathBuf,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the packaging metadata record.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the packaging metadata record for updating.
    pub fn package_mut(&mut self) -> &mut PackageSettings {
        &mut self.package
    }

    /// Returns the Windows converter settings.
    pub fn windows(&self) -> &WindowsSettings {
        &self.windows
    }

    /// Returns the Android SDK settings.
    pub fn android(&self) -> &AndroidSettings {
        &self.android
    }

    /// Returns the generated Android project directory.
    pub fn android_project_directory(&self) -> PathBuf {
        self.project_directory.join("android")
    }

    /// Returns the project output directory.
    pub fn project_out_directory(&self) -> &Path {
        &self.project_out_directory
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        windows: WindowsSettings,
        android: AndroidSettings,
        project_directory: PathBuf,
        project_out_directory: PathBuf,
    ) -> Self {
        Self {
            package,
            windows,
            android,
            project_directory,
            project_out_directory,
        }
    }
}
