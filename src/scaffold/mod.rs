//! Skeleton project generation for `appshell create`.
//!
//! A project is a directory named after its package id holding the project
//! manifest, the web app sources under `app/`, and an Android project
//! generated by the SDK under `android/`.

mod package_id;
mod template;

pub use package_id::PackageId;
pub use template::DEFAULT_VERSION;

use crate::bundler::{
    AndroidSettings, Error, Reporter, Result,
    builder::locate_android_sdk,
    error::ErrorExt,
    platform::android,
    utils::fs,
};
use crate::metadata::{MANIFEST_FILE, WEB_MANIFEST_FILE};
use std::path::{Path, PathBuf};

/// Create the skeleton project for `package_id` under `dest_root`.
///
/// The SDK is located before anything is written. If any step fails the
/// partially written project directory is removed.
///
/// # Returns
///
/// Path of the new project directory.
pub async fn create_project(
    package_id: &PackageId,
    dest_root: &Path,
    settings: &AndroidSettings,
    reporter: &dyn Reporter,
) -> Result<PathBuf> {
    let sdk_tool = locate_android_sdk(settings)?;

    let project_dir = fs::absolute(&dest_root.join(package_id.as_str()))?;
    if tokio::fs::try_exists(&project_dir)
        .await
        .fs_context("checking project directory", &project_dir)?
    {
        return Err(Error::ProjectExists(project_dir));
    }

    reporter.info(&format!("Creating {}", project_dir.display()));

    match populate(&sdk_tool, package_id, &project_dir, settings, reporter).await {
        Ok(()) => Ok(project_dir),
        Err(e) => {
            reporter.error("Project creation failed");
            if let Err(cleanup) = fs::remove_dir_all(&project_dir).await {
                log::warn!("Failed to remove {}: {cleanup}", project_dir.display());
            }
            Err(e)
        }
    }
}

async fn populate(
    sdk_tool: &Path,
    package_id: &PackageId,
    project_dir: &Path,
    settings: &AndroidSettings,
    reporter: &dyn Reporter,
) -> Result<()> {
    fs::write_file(
        &project_dir.join(MANIFEST_FILE),
        &template::project_manifest(package_id)?,
    )
    .await?;
    fs::write_file(
        &project_dir.join(WEB_MANIFEST_FILE),
        &template::web_manifest(package_id)?,
    )
    .await?;
    fs::write_file(
        &project_dir.join("app").join("index.html"),
        &template::index_html(package_id)?,
    )
    .await?;

    android::generate(
        sdk_tool,
        settings,
        package_id.as_str(),
        package_id.name(),
        &project_dir.join("android"),
        reporter,
    )
    .await
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::bundler::{
        ErrorKind,
        utils::testing::{RecordingReporter, fake_tool},
    };

    // Writes AndroidManifest.xml into the --path argument like the SDK does
    const FAKE_SDK: &str = r#"while [ $# -gt 0 ]; do
  if [ "$1" = "--path" ]; then shift; mkdir -p "$1" && touch "$1/AndroidManifest.xml"; fi
  shift
done"#;

    fn sdk_settings(tool: PathBuf) -> AndroidSettings {
        AndroidSettings {
            sdk_tool: tool,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_writes_skeleton() {
        let tools = tempfile::tempdir().expect("tempdir");
        let dest = tempfile::tempdir().expect("tempdir");
        let sdk = fake_tool(tools.path(), "android", FAKE_SDK);
        let id = PackageId::parse("com.example.Foo").expect("valid");
        let reporter = RecordingReporter::default();

        let project = create_project(&id, dest.path(), &sdk_settings(sdk), &reporter)
            .await
            .expect("create");

        assert!(project.ends_with("com.example.Foo"));
        assert!(project.join(MANIFEST_FILE).is_file());
        assert!(project.join(WEB_MANIFEST_FILE).is_file());
        assert!(project.join("app/index.html").is_file());
        assert!(project.join("android/AndroidManifest.xml").is_file());
        assert!(reporter.errors().is_empty());
    }

    #[tokio::test]
    async fn test_failed_generation_removes_project() {
        let tools = tempfile::tempdir().expect("tempdir");
        let dest = tempfile::tempdir().expect("tempdir");
        let sdk = fake_tool(tools.path(), "android", "echo 'Error: Target id is not valid' >&2; exit 1");
        let id = PackageId::parse("com.example.Foo").expect("valid");
        let reporter = RecordingReporter::default();

        let err = create_project(&id, dest.path(), &sdk_settings(sdk), &reporter)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Subprocess);
        assert!(!dest.path().join("com.example.Foo").exists());
        assert!(reporter.errors().iter().any(|e| e == "Project creation failed"));
    }

    #[tokio::test]
    async fn test_existing_directory_is_refused() {
        let tools = tempfile::tempdir().expect("tempdir");
        let dest = tempfile::tempdir().expect("tempdir");
        let sdk = fake_tool(tools.path(), "android", FAKE_SDK);
        std::fs::create_dir(dest.path().join("com.example.Foo")).expect("mkdir");
        std::fs::write(dest.path().join("com.example.Foo/keep.txt"), "mine").expect("write");
        let id = PackageId::parse("com.example.Foo").expect("valid");

        let err = create_project(&id, dest.path(), &sdk_settings(sdk), &RecordingReporter::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ProjectExists(_)));
        assert!(dest.path().join("com.example.Foo/keep.txt").exists());
    }

    #[tokio::test]
    async fn test_unreadable_destination_is_not_reported_as_existing() {
        let tools = tempfile::tempdir().expect("tempdir");
        let dest = tempfile::tempdir().expect("tempdir");
        let sdk = fake_tool(tools.path(), "android", FAKE_SDK);
        // A regular file as parent makes the lookup fail with ENOTDIR
        let not_a_dir = dest.path().join("file");
        std::fs::write(&not_a_dir, "x").expect("write");
        let id = PackageId::parse("com.example.Foo").expect("valid");

        let err = create_project(&id, &not_a_dir, &sdk_settings(sdk), &RecordingReporter::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().starts_with("checking project directory"));
    }

    #[tokio::test]
    async fn test_missing_sdk_writes_nothing() {
        let dest = tempfile::tempdir().expect("tempdir");
        let id = PackageId::parse("com.example.Foo").expect("valid");
        let settings = sdk_settings(dest.path().join("no-such-android"));

        let err = create_project(&id, dest.path(), &settings, &RecordingReporter::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Environment);
        assert!(!dest.path().join("com.example.Foo").exists());
    }
}
