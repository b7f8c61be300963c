//! `appshell create <packageId>`.

use crate::bundler::AndroidSettings;
use crate::cli::{RuntimeConfig, args::CreateArgs};
use crate::error::Result;
use crate::scaffold::{self, PackageId};

/// Generate a skeleton project.
pub async fn execute(args: &CreateArgs, config: &RuntimeConfig) -> Result<i32> {
    let package_id = PackageId::parse(&args.package_id)?;

    let android = AndroidSettings {
        target: args.android_target.clone(),
        ..Default::default()
    };

    config.section(&format!("Creating {package_id}"))?;
    let project = scaffold::create_project(&package_id, &args.dest, &android, config.output()).await?;

    config.success(&format!("Created project {}", project.display()))?;
    config.indent(&format!("Name:    {}", package_id.name()))?;
    config.indent(&format!("Version: {}", scaffold::DEFAULT_VERSION))?;
    Ok(0)
}
