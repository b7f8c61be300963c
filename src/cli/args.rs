//! Command line argument parsing.
//!
//! `help` and `version` are ordinary subcommands; anything that is not a
//! known subcommand is captured as [`Command::Unrecognized`] so it can be
//! reported without running a handler.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::bundler::PackageType;

/// Scaffold and package application shells with the Android SDK and the
/// Windows Desktop App Converter
#[derive(Parser, Debug)]
#[command(
    name = "appshell",
    version,
    disable_help_subcommand = true,
    about = "Scaffold and package application shells",
    long_about = "Scaffold and package application shells with the Android SDK \
and the Windows Desktop App Converter.

Usage:
  appshell create com.example.Foo
  appshell update 1.2.0.0
  appshell build debug
  appshell build appx --converter C:\\DAC\\DesktopAppConverter.cmd

Exit code 0 = success, 1 = command failed, 2 = unrecognized command or bad arguments."
)]
pub struct Args {
    /// Command to run; prints this help if omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Show output of the external tools
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory for `update` and `build`
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "APPSHELL_PROJECT_DIR",
        default_value = "."
    )]
    pub project_dir: PathBuf,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a skeleton project
    Create(CreateArgs),

    /// Set the application version
    Update {
        /// New version, e.g. 1.2.0.0 or 1.2.0-beta.1
        version: String,
    },

    /// Build a package
    Build(BuildArgs),

    /// Print usage information
    Help,

    /// Print the appshell version
    Version,

    #[command(external_subcommand)]
    Unrecognized(Vec<String>),
}

/// Arguments of `create`.
#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Package identifier in the form com.example.Foo
    pub package_id: String,

    /// Android SDK target id
    #[arg(long, env = "APPSHELL_ANDROID_TARGET", default_value = "android-21")]
    pub android_target: String,

    /// Directory the project is created in
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,
}

/// Arguments of `build`.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Package to build
    #[arg(value_enum)]
    pub kind: BuildType,

    /// Desktop App Converter executable (appx only)
    #[arg(long, value_name = "PATH", env = "APPSHELL_CONVERTER")]
    pub converter: Option<PathBuf>,

    /// Kill the external tool after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Build type accepted by `build`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    /// Debug-signed Android APK
    Debug,
    /// Release Android APK
    Release,
    /// Windows AppX package
    Appx,
}

impl From<BuildType> for PackageType {
    fn from(kind: BuildType) -> Self {
        match kind {
            BuildType::Debug => PackageType::AndroidDebug,
            BuildType::Release => PackageType::AndroidRelease,
            BuildType::Appx => PackageType::Appx,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
    project_dir: PathBuf,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
            project_dir: args.project_dir.clone(),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Project directory given by `--project-dir`
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
