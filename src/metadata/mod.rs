//! Project manifest (`appshell.toml`) loading and editing.
//!
//! The manifest is the source of the packaging metadata record for
//! `appshell build appx` and the file `appshell update` rewrites.

use crate::bundler::{self, PackageSettings, WindowsSettings};
use crate::error::{AppError, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "appshell.toml";

/// Web app manifest written by `create` and kept in sync by `update`.
pub const WEB_MANIFEST_FILE: &str = "app/manifest.json";

static NUMERIC_VERSION: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[0-9]+(\.[0-9]+){0,3}$").expect("static regex")
});

/// Complete manifest data from appshell.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectManifest {
    /// `[app]` section
    pub app: AppSection,

    /// `[windows]` section
    #[serde(default)]
    pub windows: WindowsSection,
}

/// Application identity.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Reverse-domain identifier, e.g. `com.example.Foo`
    pub package_id: String,

    /// Product name; first half of the package basename
    pub name: String,

    /// Application version
    pub version: String,

    /// Name shown to users; defaults to `name`
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Desktop App Converter inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowsSection {
    /// Publisher name
    #[serde(default)]
    pub manufacturer: Option<String>,

    /// Desktop installer to convert, relative to the project directory
    #[serde(default)]
    pub installer: Option<PathBuf>,

    /// Converter program override
    #[serde(default)]
    pub converter: Option<PathBuf>,

    /// Silent-install arguments override
    #[serde(default)]
    pub installer_arguments: Option<String>,
}

impl ProjectManifest {
    /// Build the packaging metadata record.
    ///
    /// A relative installer path is resolved against `project_dir`.
    pub fn package_settings(&self, project_dir: &Path) -> PackageSettings {
        let installer = match &self.windows.installer {
            Some(path) if path.as_os_str().is_empty() => PathBuf::new(),
            Some(path) if path.is_relative() => project_dir.join(path),
            Some(path) => path.clone(),
            None => PathBuf::new(),
        };

        PackageSettings {
            product_name: self.app.name.clone(),
            version: self.app.version.clone(),
            manufacturer: self.windows.manufacturer.clone().unwrap_or_default(),
            app_name: self
                .app
                .display_name
                .clone()
                .unwrap_or_else(|| self.app.name.clone()),
            installer,
            appx: None,
        }
    }

    /// Apply manifest overrides on top of `base`.
    pub fn windows_settings(&self, mut base: WindowsSettings) -> WindowsSettings {
        if let Some(converter) = &self.windows.converter {
            base.converter = converter.clone();
        }
        if let Some(arguments) = &self.windows.installer_arguments {
            base.installer_arguments = arguments.clone();
        }
        base
    }
}

/// Load `appshell.toml` from `project_dir`.
pub fn load_manifest(project_dir: &Path) -> Result<ProjectManifest> {
    let path = project_dir.join(MANIFEST_FILE);

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        AppError::Cli(CliError::InvalidManifest {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let manifest: ProjectManifest = toml::from_str(&contents).map_err(|e| {
        AppError::Cli(CliError::InvalidManifest {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    log::debug!(
        "Loaded manifest for {} {} from {}",
        manifest.app.package_id,
        manifest.app.version,
        path.display()
    );
    Ok(manifest)
}

/// Check that `version` is a semantic version or 1-4 dot-separated numbers.
pub fn validate_version(version: &str) -> bundler::Result<()> {
    if NUMERIC_VERSION.is_match(version) || semver::Version::parse(version).is_ok() {
        Ok(())
    } else {
        Err(bundler::Error::InvalidVersion(version.to_string()))
    }
}

/// Set the application version in `appshell.toml` and `app/manifest.json`.
///
/// `appshell.toml` keeps its formatting and comments. The web manifest is
/// only touched if it exists.
///
/// Returns the previous version.
pub fn set_version(project_dir: &Path, version: &str) -> Result<String> {
    validate_version(version)?;

    let path = project_dir.join(MANIFEST_FILE);
    let contents = std::fs::read_to_string(&path).map_err(|e| {
        AppError::Cli(CliError::InvalidManifest {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let mut document: toml_edit::DocumentMut = contents.parse()?;
    let app = document
        .get_mut("app")
        .and_then(|item| item.as_table_like_mut())
        .ok_or_else(|| {
            AppError::Cli(CliError::InvalidManifest {
                path: path.display().to_string(),
                reason: "missing [app] section".to_string(),
            })
        })?;

    let previous = app
        .get("version")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match app.get_mut("version").and_then(|item| item.as_value_mut()) {
        Some(value) => {
            // Keep any trailing comment on the line
            let decor = value.decor().clone();
            *value = toml_edit::Value::from(version);
            *value.decor_mut() = decor;
        }
        None => {
            app.insert("version", toml_edit::value(version));
        }
    }

    std::fs::write(&path, document.to_string())?;
    log::info!("Updated {} version {} -> {}", path.display(), previous, version);

    let web_manifest = project_dir.join(WEB_MANIFEST_FILE);
    if web_manifest.exists() {
        let raw = std::fs::read_to_string(&web_manifest)?;
        let mut json: serde_json::Value = serde_json::from_str(&raw)?;
        if let Some(object) = json.as_object_mut() {
            object.insert(
                "version".to_string(),
                serde_json::Value::String(version.to_string()),
            );
        }
        std::fs::write(&web_manifest, serde_json::to_string_pretty(&json)? + "\n")?;
        log::info!("Updated {}", web_manifest.display());
    }

    Ok(previous)
}
