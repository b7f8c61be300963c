//! Android project generation.

use crate::{
    bail,
    bundler::{Reporter, error::Result, settings::AndroidSettings, utils::process},
};
use std::{ffi::OsString, path::Path};
use tokio::process::Command;

/// Activity created as the application entry point.
pub const MAIN_ACTIVITY: &str = "MainActivity";

/// Argument vector for `android create project`.
pub fn create_project_args(
    settings: &AndroidSettings,
    package_id: &str,
    name: &str,
    path: &Path,
) -> Vec<OsString> {
    vec![
        "create".into(),
        "project".into(),
        "--target".into(),
        settings.target.clone().into(),
        "--name".into(),
        name.into(),
        "--path".into(),
        path.as_os_str().to_owned(),
        "--activity".into(),
        MAIN_ACTIVITY.into(),
        "--package".into(),
        package_id.into(),
    ]
}

/// Generate an Android project at `path` with the SDK tool at `sdk_tool`.
///
/// `package_id` must already be validated. The SDK tool creates `path`
/// itself; an existing non-empty directory makes it fail.
pub async fn generate(
    sdk_tool: &Path,
    settings: &AndroidSettings,
    package_id: &str,
    name: &str,
    path: &Path,
    reporter: &dyn Reporter,
) -> Result<()> {
    reporter.info(&format!(
        "Generating Android project {package_id} (target {})",
        settings.target
    ));

    let mut command = Command::new(sdk_tool);
    command.args(create_project_args(settings, package_id, name, path));

    let output = process::run_streaming(command, reporter, None).await?;
    if let Some(code) = output.code().filter(|code| *code != 0) {
        reporter.error(&format!("Android project generation failed with exit code {code}"));
    }
    output.check()?;

    if !path.join("AndroidManifest.xml").exists() {
        bail!(
            "{} finished but produced no AndroidManifest.xml in {}",
            sdk_tool.display(),
            path.display()
        );
    }

    log::info!("Generated Android project in {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_args() {
        let args = create_project_args(
            &AndroidSettings::default(),
            "com.example.Foo",
            "Foo",
            Path::new("/tmp/com.example.Foo/android"),
        );
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "create",
                "project",
                "--target",
                "android-21",
                "--name",
                "Foo",
                "--path",
                "/tmp/com.example.Foo/android",
                "--activity",
                "MainActivity",
                "--package",
                "com.example.Foo",
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_generate_requires_manifest() {
        use crate::bundler::utils::testing::{RecordingReporter, fake_tool};

        let temp = tempfile::tempdir().expect("tempdir");
        let sdk = fake_tool(temp.path(), "android", "exit 0");
        let reporter = RecordingReporter::default();

        let err = generate(
            &sdk,
            &AndroidSettings::default(),
            "com.example.Foo",
            "Foo",
            &temp.path().join("android-project"),
            &reporter,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("produced no AndroidManifest.xml"));
        assert_eq!(err.kind(), crate::bundler::ErrorKind::Other);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_generate_reports_sdk_failure() {
        use crate::bundler::utils::testing::{RecordingReporter, fake_tool};

        let temp = tempfile::tempdir().expect("tempdir");
        let sdk = fake_tool(temp.path(), "android", "echo 'Error: Target id is not valid' >&2; exit 1");
        let reporter = RecordingReporter::default();

        let err = generate(
            &sdk,
            &AndroidSettings::default(),
            "com.example.Foo",
            "Foo",
            &temp.path().join("android-project"),
            &reporter,
        )
        .await
        .unwrap_err();

        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(
            reporter.errors(),
            vec!["Android project generation failed with exit code 1".to_string()]
        );
    }
}
