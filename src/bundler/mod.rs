//! Project generation and packaging on top of external platform tools.
//!
//! Every operation here follows the same shape: locate the external tool
//! first (an explicit environment check), build a structured argument list,
//! run one subprocess while streaming its output to a [`Reporter`], and map
//! the exit status to a [`Result`].
//!
//! # Example
//!
//! ```no_run
//! use appshell::bundler::{Bundler, LogReporter, PackageSettings, PackageType, SettingsBuilder};
//!
//! # async fn example() -> appshell::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_directory("com.example.Foo")
//!     .package_settings(PackageSettings {
//!         product_name: "Foo".into(),
//!         version: "1.0.0.0".into(),
//!         manufacturer: "Example Corp".into(),
//!         app_name: "Foo".into(),
//!         installer: "Foo-setup.exe".into(),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let mut bundler = Bundler::new(settings, PackageType::Appx)?;
//! let artifact = bundler.bundle(&LogReporter).await?;
//! println!("Created {} (sha256 {})", artifact.paths[0].display(), artifact.checksum);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
mod reporter;
pub mod settings;
pub mod utils;

pub use builder::Bundler;
pub use error::{Error, ErrorKind, Result};
pub use platform::PackageType;
pub use reporter::{LogReporter, Reporter};
pub use settings::{AndroidSettings, PackageSettings, Settings, SettingsBuilder, WindowsSettings};

use std::path::PathBuf;

/// A package produced by [`Bundler::bundle`].
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Kind of package that was built
    pub package_type: PackageType,
    /// Absolute paths of the produced files
    pub paths: Vec<PathBuf>,
    /// Total size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the primary artifact
    pub checksum: String,
}
