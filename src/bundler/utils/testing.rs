//! Test doubles shared by unit tests.

use crate::bundler::Reporter;
use std::sync::Mutex;

/// Reporter that records every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    info: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    stdout: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn infos(&self) -> Vec<String> {
        self.info.lock().expect("lock").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().expect("lock").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("lock").clone()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lock().expect("lock").clone()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.info.lock().expect("lock").push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.lock().expect("lock").push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().expect("lock").push(message.to_string());
    }

    fn on_stdout(&self, line: &str) {
        self.stdout.lock().expect("lock").push(line.to_string());
    }
}

/// Writes an executable shell script standing in for an external tool.
#[cfg(unix)]
pub fn fake_tool(dir: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake tool");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake tool");
    path
}
