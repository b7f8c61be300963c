//! Desktop App Converter command line construction.
//!
//! The converter is always launched with a discrete argument vector. The
//! quoted rendering from [`ConverterCommand::display`] is only for logs.

use crate::bundler::settings::PackageSettings;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use tokio::process::Command;

/// Flags passed to the converter, in the order they are emitted.
pub const CONVERTER_FLAGS: [&str; 9] = [
    "-Installer",
    "-InstallerArguments",
    "-Destination",
    "-Version",
    "-Publisher",
    "-PackageName",
    "-AppDisplayName",
    "-PackagePublisherDisplayName",
    "-MakeAppx",
];

/// Name of the intermediate directory the converter writes into.
pub fn destination_name(basename: &str) -> String {
    format!("{basename}-appx")
}

/// One converter flag and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterArgument {
    /// Flag name including the leading dash
    pub flag: &'static str,
    /// Value following the flag, if any
    pub value: Option<OsString>,
    /// Whether the converter documentation shows this value quoted
    quoted: bool,
}

impl ConverterArgument {
    fn valued(flag: &'static str, value: impl Into<OsString>, quoted: bool) -> Self {
        Self {
            flag,
            value: Some(value.into()),
            quoted,
        }
    }

    fn switch(flag: &'static str) -> Self {
        Self {
            flag,
            value: None,
            quoted: false,
        }
    }
}

/// A fully specified converter invocation.
#[derive(Debug, Clone)]
pub struct ConverterCommand {
    program: PathBuf,
    arguments: Vec<ConverterArgument>,
}

impl ConverterCommand {
    /// Builds the invocation for `metadata`.
    ///
    /// `installer_arguments` is handed to the wrapped installer for an
    /// unattended install (`/S` for NSIS installers).
    pub fn new(program: &Path, metadata: &PackageSettings, installer_arguments: &str) -> Self {
        let destination = destination_name(&metadata.basename());
        let arguments = vec![
            ConverterArgument::valued("-Installer", metadata.installer.as_os_str(), false),
            ConverterArgument::valued("-InstallerArguments", installer_arguments, true),
            ConverterArgument::valued("-Destination", destination, false),
            ConverterArgument::valued("-Version", &metadata.version, false),
            ConverterArgument::valued(
                "-Publisher",
                format!("CN={}", metadata.manufacturer),
                true,
            ),
            ConverterArgument::valued("-PackageName", &metadata.app_name, true),
            ConverterArgument::valued("-AppDisplayName", &metadata.app_name, true),
            ConverterArgument::valued(
                "-PackagePublisherDisplayName",
                &metadata.manufacturer,
                true,
            ),
            ConverterArgument::switch("-MakeAppx"),
        ];

        Self {
            program: program.to_path_buf(),
            arguments,
        }
    }

    /// Flattened argument vector handed to the OS.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.arguments.len() * 2);
        for argument in &self.arguments {
            args.push(OsString::from(argument.flag));
            if let Some(value) = &argument.value {
                args.push(value.clone());
            }
        }
        args
    }

    /// Human-readable command line with the conventional quoting.
    pub fn display(&self) -> String {
        let mut rendered = self.program.display().to_string();
        for argument in &self.arguments {
            rendered.push(' ');
            rendered.push_str(argument.flag);
            if let Some(value) = &argument.value {
                let value = value.to_string_lossy();
                rendered.push(' ');
                if argument.quoted {
                    rendered.push('"');
                    rendered.push_str(&value);
                    rendered.push('"');
                } else {
                    rendered.push_str(&value);
                }
            }
        }
        rendered
    }

    /// Process builder running the converter inside `working_dir`.
    pub fn to_command(&self, working_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args()).current_dir(working_dir);
        command
    }
}
