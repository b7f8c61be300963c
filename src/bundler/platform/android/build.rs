//! APK builds with Apache Ant.

use crate::{
    bail,
    bundler::{
        PackageType, Reporter,
        error::{Context, Error, Result},
        settings::Settings,
        utils::{fs, process},
    },
};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Ant target for a package type.
pub fn ant_target(package_type: PackageType) -> Result<&'static str> {
    match package_type {
        PackageType::AndroidDebug => Ok("debug"),
        PackageType::AndroidRelease => Ok("release"),
        other => bail!("{other} is not an Android package type"),
    }
}

/// Build the project's Android APK with `ant <debug|release>`.
///
/// Returns the newest matching APK under `android/bin`.
pub async fn bundle_project(
    ant: &Path,
    settings: &Settings,
    package_type: PackageType,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let target = ant_target(package_type)?;
    let project_dir = settings.android_project_directory();

    if !project_dir.join("build.xml").exists() {
        return Err(Error::InvalidMetadata(format!(
            "no Android project found in {} (expected build.xml)",
            project_dir.display()
        )));
    }

    reporter.info(&format!("Running '{} {target}' in {}", ant.display(), project_dir.display()));

    let mut command = Command::new(ant);
    command.arg(target).current_dir(&project_dir);

    let output = process::run_streaming(command, reporter, None).await?;
    if let Some(code) = output.code().filter(|code| *code != 0) {
        reporter.error(&format!("Android build failed with exit code {code}"));
    }
    output.check()?;

    let apk = find_apk(&project_dir.join("bin"), package_type).await?;
    let apk = fs::absolute(&apk)?;
    log::info!("Built APK: {}", apk.display());
    Ok(vec![apk])
}

/// Newest APK in `bin_dir` whose name carries the `-<target>` marker.
async fn find_apk(bin_dir: &Path, package_type: PackageType) -> Result<PathBuf> {
    let target = ant_target(package_type)?;
    let marker = format!("-{target}");
    fs::find_files_with_extension(bin_dir, package_type.extension())
        .await?
        .into_iter()
        .find(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains(&marker))
        })
        .context(format!(
            "build finished but no {target} APK was found in {}",
            bin_dir.display()
        ))
}
