//! `appshell build <type>`.

use crate::bundler::{
    AndroidSettings, Bundler, PackageType, SettingsBuilder, WindowsSettings, utils::fs,
};
use crate::cli::{RuntimeConfig, args::BuildArgs};
use crate::error::Result;
use crate::metadata;
use std::time::Duration;

/// Build the requested package from the project in `--project-dir`.
pub async fn execute(args: &BuildArgs, config: &RuntimeConfig) -> Result<i32> {
    // The converter runs with the output directory as its working directory
    let project_dir = &fs::absolute(config.project_dir())?;
    let manifest = metadata::load_manifest(project_dir)?;
    let package_type = PackageType::from(args.kind);

    let mut windows = manifest.windows_settings(WindowsSettings::default());
    if let Some(converter) = &args.converter {
        windows.converter = converter.clone();
    }
    windows.timeout = args.timeout.map(Duration::from_secs);

    let settings = SettingsBuilder::new()
        .project_directory(project_dir)
        .package_settings(manifest.package_settings(project_dir))
        .windows_settings(windows)
        .android_settings(AndroidSettings::default())
        .build()?;

    config.section(&format!("Building {package_type} package for {}", manifest.app.package_id))?;

    let mut bundler = Bundler::new(settings, package_type)?;
    config.output().verbose(&format!("Using {}", bundler.tool().display()))?;

    let artifact = bundler.bundle(config.output()).await?;

    config.success(&format!("Built {package_type} package"))?;
    for path in &artifact.paths {
        config.indent(&format!("Path:   {}", path.display()))?;
    }
    config.indent(&format!("Size:   {} bytes", artifact.size))?;
    if !artifact.checksum.is_empty() {
        config.indent(&format!("SHA256: {}", artifact.checksum))?;
    }
    Ok(0)
}
