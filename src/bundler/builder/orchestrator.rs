//! Main bundler orchestration and coordination.

use crate::bundler::{BundledArtifact, PackageType, Reporter, Result, Settings, error::ErrorExt};

use super::{
    checksum::calculate_sha256,
    tool_detection::{locate_ant, locate_converter},
};
use std::path::{Path, PathBuf};

/// Main bundler orchestrator.
///
/// Construction is the environment check: [`Bundler::new`] locates the
/// external tool the package type needs and fails with
/// [`Error::ToolNotFound`](crate::bundler::Error::ToolNotFound) before any
/// output is written.
///
/// # Examples
///
/// ```no_run
/// use appshell::bundler::{Bundler, LogReporter, PackageType, Settings};
///
/// # async fn example(settings: Settings) -> appshell::bundler::Result<()> {
/// let mut bundler = Bundler::new(settings, PackageType::AndroidDebug)?;
/// let artifact = bundler.bundle(&LogReporter).await?;
/// println!("{} ({} bytes)", artifact.paths[0].display(), artifact.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    package_type: PackageType,
    tool: PathBuf,
}

impl Bundler {
    /// Creates a bundler for `package_type`, resolving its external tool.
    pub fn new(settings: Settings, package_type: PackageType) -> Result<Self> {
        let tool = match package_type {
            PackageType::Appx => locate_converter(settings.windows())?,
            PackageType::AndroidDebug | PackageType::AndroidRelease => {
                locate_ant(settings.android())?
            }
        };

        Ok(Self {
            settings,
            package_type,
            tool,
        })
    }

    /// Settings, including the metadata record updated by the last bundle.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolved external tool.
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Runs the external tool once and describes the produced package.
    ///
    /// Resolves exactly once: with the artifact on success, or with an
    /// error whose [`kind`](crate::bundler::Error::kind) tells environment,
    /// subprocess, input and IO failures apart.
    pub async fn bundle(&mut self, reporter: &dyn Reporter) -> Result<BundledArtifact> {
        log::info!(
            "Bundling {} {} as {} with {}",
            self.settings.product_name(),
            self.settings.version_string(),
            self.package_type,
            self.tool.display()
        );

        let paths = match self.package_type {
            PackageType::Appx => {
                crate::bundler::platform::windows::appx::bundle_project(
                    &self.tool,
                    &mut self.settings,
                    reporter,
                )
                .await?
            }
            PackageType::AndroidDebug | PackageType::AndroidRelease => {
                crate::bundler::platform::android::bundle_project(
                    &self.tool,
                    &self.settings,
                    self.package_type,
                    reporter,
                )
                .await?
            }
        };

        let mut size = 0;
        for path in &paths {
            // A converter may report success without leaving the file behind
            if let Ok(len) = file_size(path).await {
                size += len;
            }
        }

        let checksum = match paths.first() {
            Some(primary) if tokio::fs::try_exists(primary).await.unwrap_or(false) => {
                calculate_sha256(primary).await?
            }
            _ => String::new(),
        };

        Ok(BundledArtifact {
            package_type: self.package_type,
            paths,
            size,
            checksum,
        })
    }
}

/// Size of a file in bytes.
async fn file_size(path: &Path) -> Result<u64> {
    Ok(tokio::fs::metadata(path)
        .await
        .fs_context("reading artifact metadata", path)?
        .len())
}
