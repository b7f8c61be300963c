use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

const MANIFEST: &str = r#"# appshell project manifest
[app]
package_id = "com.example.Foo"
name = "Foo"
version = "1.0.0.0" # release version

[windows]
manufacturer = "Example Corp"
installer = "Foo-setup.exe"
"#;

fn write_project(dir: &Path) {
    fs::write(dir.join("appshell.toml"), MANIFEST).expect("write manifest");
    fs::write(dir.join("Foo-setup.exe"), "installer").expect("write installer");
}

#[test]
fn no_command_prints_help() {
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("create"))
        .stdout(contains("build"));
}

#[test]
fn help_command_prints_help() {
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.arg("help")
        .assert()
        .success()
        .stdout(contains("update"))
        .stdout(contains("version"));
}

#[test]
fn version_command_prints_crate_version() {
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.arg("version")
        .assert()
        .success()
        .stdout(format!("appshell {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn unrecognized_command_runs_nothing() {
    let temp = tempdir().expect("tempdir");
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.current_dir(temp.path())
        .arg("frobnicate")
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("Unrecognized command 'frobnicate'").and(contains("Usage")));

    assert_eq!(fs::read_dir(temp.path()).expect("read_dir").count(), 0);
}

#[test]
fn create_rejects_invalid_package_id() {
    let temp = tempdir().expect("tempdir");
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.current_dir(temp.path())
        .args(["create", "1com.example"])
        .assert()
        .code(1)
        .stderr(contains("invalid package identifier '1com.example'"));

    assert_eq!(fs::read_dir(temp.path()).expect("read_dir").count(), 0);
}

#[test]
fn create_without_sdk_fails_before_writing() {
    let temp = tempdir().expect("tempdir");
    let empty_path = tempdir().expect("tempdir");
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.current_dir(temp.path())
        .env("PATH", empty_path.path())
        .env_remove("ANDROID_HOME")
        .env_remove("ANDROID_SDK_ROOT")
        .args(["create", "com.example.Foo"])
        .assert()
        .code(1)
        .stderr(contains("The Android SDK could not be found"));

    assert!(!temp.path().join("com.example.Foo").exists());
}

#[test]
fn update_rewrites_version_and_keeps_comments() -> Result<()> {
    let temp = tempdir()?;
    write_project(temp.path());

    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.arg("update")
        .arg("1.2.0.0")
        .arg("--project-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(contains("1.0.0.0 → 1.2.0.0"));

    let manifest = fs::read_to_string(temp.path().join("appshell.toml"))?;
    assert!(manifest.starts_with("# appshell project manifest\n"));
    assert!(manifest.contains("version = \"1.2.0.0\" # release version"));
    Ok(())
}

#[test]
fn update_rejects_invalid_version() -> Result<()> {
    let temp = tempdir()?;
    write_project(temp.path());

    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.args(["update", "next"])
        .env("APPSHELL_PROJECT_DIR", temp.path())
        .assert()
        .code(1)
        .stderr(contains("invalid version 'next'"));

    let manifest = fs::read_to_string(temp.path().join("appshell.toml"))?;
    assert_eq!(manifest, MANIFEST);
    Ok(())
}

#[test]
fn build_outside_project_fails() {
    let temp = tempdir().expect("tempdir");
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.current_dir(temp.path())
        .args(["build", "appx"])
        .env_remove("APPSHELL_PROJECT_DIR")
        .assert()
        .code(1)
        .stderr(contains("appshell.toml"));
}

#[test]
fn build_rejects_unknown_type() {
    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.args(["build", "msi"]).assert().code(2);
}

#[test]
fn build_appx_with_missing_converter() {
    let temp = tempdir().expect("tempdir");
    write_project(temp.path());

    let mut cmd = cargo_bin_cmd!("appshell");
    cmd.arg("build")
        .arg("appx")
        .arg("--converter")
        .arg(temp.path().join("no-such-converter.cmd"))
        .arg("--project-dir")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(contains("no-such-converter.cmd not found"));

    assert!(!temp.path().join("Foo-1.0.0.0-appx").exists());
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
        path
    }

    #[test]
    fn build_appx_reports_artifact() {
        let temp = tempdir().expect("tempdir");
        let tools = tempdir().expect("tempdir");
        write_project(temp.path());
        let converter = script(
            tools.path(),
            "converter.sh",
            "mkdir -p Foo-1.0.0.0-appx && echo package > Foo-1.0.0.0-appx/Foo.appx",
        );

        let mut cmd = cargo_bin_cmd!("appshell");
        cmd.arg("build")
            .arg("appx")
            .arg("--converter")
            .arg(&converter)
            .arg("--project-dir")
            .arg(temp.path())
            .assert()
            .success()
            .stdout(contains("Foo-1.0.0.0-appx"))
            .stdout(contains("Foo-1.0.0.0.appx"))
            .stdout(contains("SHA256:"));

        assert!(temp.path().join("Foo-1.0.0.0.appx").is_file());
        assert!(!temp.path().join("Foo-1.0.0.0-appx").exists());
    }

    #[test]
    fn build_appx_with_relative_project_dir() {
        let temp = tempdir().expect("tempdir");
        let tools = tempdir().expect("tempdir");
        let project = temp.path().join("proj");
        fs::create_dir(&project).expect("mkdir");
        write_project(&project);
        // $2 is the -Installer value; the converter runs inside the project
        let converter = script(
            tools.path(),
            "converter.sh",
            "[ -f \"$2\" ] || exit 5; mkdir -p Foo-1.0.0.0-appx && touch Foo-1.0.0.0.appx",
        );

        let mut cmd = cargo_bin_cmd!("appshell");
        cmd.current_dir(temp.path())
            .env_remove("APPSHELL_PROJECT_DIR")
            .arg("build")
            .arg("appx")
            .arg("--converter")
            .arg(&converter)
            .arg("--project-dir")
            .arg("proj")
            .assert()
            .success()
            .stdout(contains("Foo-1.0.0.0.appx"));

        assert!(project.join("Foo-1.0.0.0.appx").is_file());
    }

    #[test]
    fn build_appx_reports_converter_exit_code() {
        let temp = tempdir().expect("tempdir");
        let tools = tempdir().expect("tempdir");
        write_project(temp.path());
        let converter = script(
            tools.path(),
            "converter.sh",
            "echo 'The installer could not be run' >&2; exit 3",
        );

        let mut cmd = cargo_bin_cmd!("appshell");
        cmd.arg("build")
            .arg("appx")
            .arg("--converter")
            .arg(&converter)
            .arg("--project-dir")
            .arg(temp.path())
            .assert()
            .code(1)
            .stderr(contains("Unhandled error 3"))
            .stderr(contains("The installer could not be run"));

        assert!(!temp.path().join("Foo-1.0.0.0.appx").exists());
    }

    #[test]
    fn create_generates_project_with_sdk() {
        let temp = tempdir().expect("tempdir");
        let tools = tempdir().expect("tempdir");
        script(
            tools.path(),
            "android",
            r#"while [ $# -gt 0 ]; do
  if [ "$1" = "--path" ]; then shift; mkdir -p "$1" && touch "$1/AndroidManifest.xml"; fi
  shift
done"#,
        );
        let path = format!(
            "{}:{}",
            tools.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = cargo_bin_cmd!("appshell");
        cmd.current_dir(temp.path())
            .env("PATH", &path)
            .args(["create", "com.example.Foo"])
            .assert()
            .success()
            .stdout(contains("Created project"));

        let project = temp.path().join("com.example.Foo");
        assert!(project.join("appshell.toml").is_file());
        assert!(project.join("app/manifest.json").is_file());
        assert!(project.join("android/AndroidManifest.xml").is_file());

        // A second run must not touch the existing project
        let mut again = cargo_bin_cmd!("appshell");
        again
            .current_dir(temp.path())
            .env("PATH", &path)
            .args(["create", "com.example.Foo"])
            .assert()
            .code(1)
            .stderr(contains("already exists"));
        assert!(project.join("appshell.toml").is_file());
    }
}
