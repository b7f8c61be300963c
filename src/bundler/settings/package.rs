//! Packaging metadata record.

use std::path::PathBuf;

/// Metadata describing one packaging request.
///
/// Built by the caller (usually from a project's `appshell.toml`) before
/// packaging starts. The only field the packager writes is [`appx`], which
/// is filled in with the absolute artifact path after a successful
/// conversion.
///
/// # Examples
///
/// ```no_run
/// use appshell::bundler::PackageSettings;
///
/// let metadata = PackageSettings {
///     product_name: "Foo".into(),
///     version: "1.0.0.0".into(),
///     manufacturer: "Example Corp".into(),
///     app_name: "Foo".into(),
///     installer: "Foo-setup.exe".into(),
///     ..Default::default()
/// };
/// assert_eq!(metadata.basename(), "Foo-1.0.0.0");
/// ```
///
/// [`appx`]: PackageSettings::appx
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSettings {
    /// Product identifier; first half of the basename.
    pub product_name: String,

    /// Version string passed verbatim to the converter.
    ///
    /// Example: "1.0.0.0"
    pub version: String,

    /// Manufacturer, used as publisher (`CN=<manufacturer>`) and publisher display name.
    pub manufacturer: String,

    /// Application display name, used as package name and display name.
    pub app_name: String,

    /// Path to the desktop installer the converter repackages.
    pub installer: PathBuf,

    /// Absolute path of the packaged `.appx`, set on success.
    ///
    /// Default: None
    pub appx: Option<PathBuf>,
}

impl PackageSettings {
    /// `<product>-<version>`, used to name intermediate and output artifacts.
    pub fn basename(&self) -> String {
        format!("{}-{}", self.product_name, self.version)
    }

    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.product_name.is_empty() {
            missing.push("product_name");
        }
        if self.version.is_empty() {
            missing.push("version");
        }
        if self.manufacturer.is_empty() {
            missing.push("manufacturer");
        }
        if self.app_name.is_empty() {
            missing.push("app_name");
        }
        if self.installer.as_os_str().is_empty() {
            missing.push("installer");
        }
        missing
    }
}
