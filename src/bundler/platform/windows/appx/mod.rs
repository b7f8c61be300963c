//! Windows AppX packaging via the Desktop App Converter.
//!
//! Wraps an existing desktop installer into an `.appx` package.
//!
//! # Module Organization
//!
//! - `command` - converter argument list construction

mod command;

pub use command::{CONVERTER_FLAGS, ConverterArgument, ConverterCommand, destination_name};

use crate::bundler::{
    Reporter,
    error::{Error, ErrorExt, Result},
    settings::Settings,
    utils::{fs, process},
};
use std::path::{Path, PathBuf};

/// Package the project's desktop installer as an AppX.
///
/// # Process
///
/// 1. Derive the basename `<product>-<version>`
/// 2. Build the converter argument list from the metadata record
/// 3. Run the converter in the output directory, streaming stdout to the
///    reporter's stdout hook and stderr to its warning channel
/// 4. On a non-zero exit, report `Unhandled error <code>` and fail
/// 5. On success, record the absolute `<basename>.appx` path on the
///    metadata record and remove the intermediate `<basename>-appx` directory
///
/// `converter` must already be resolved (see
/// [`locate_converter`](crate::bundler::builder::locate_converter)).
///
/// # Returns
///
/// Vector containing the absolute path of the `.appx` file.
pub async fn bundle_project(
    converter: &Path,
    settings: &mut Settings,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let mut metadata = settings.package().clone();
    let missing = metadata.missing_fields();
    if !missing.is_empty() {
        return Err(Error::InvalidMetadata(format!(
            "missing {}",
            missing.join(", ")
        )));
    }

    // Relative paths would be resolved again inside the output directory
    metadata.installer = fs::absolute(&metadata.installer)?;
    let basename = metadata.basename();
    let output_dir = fs::absolute(settings.project_out_directory())?;
    let destination = output_dir.join(destination_name(&basename));

    fs::create_dir_all(&output_dir, false).await?;
    reporter.info(&destination_name(&basename));

    let command = ConverterCommand::new(converter, &metadata, &settings.windows().installer_arguments);
    reporter.info(&format!("Running '{}'", command.display()));

    let output = process::run_streaming(
        command.to_command(&output_dir),
        reporter,
        settings.windows().timeout,
    )
    .await?;

    match output.code() {
        Some(0) => {}
        Some(code) => reporter.error(&format!("Unhandled error {code}")),
        None => reporter.error("Unhandled error: converter was terminated"),
    }
    output.check()?;

    let artifact = collect_artifact(&output_dir, &destination, &basename, reporter).await?;
    settings.package_mut().appx = Some(artifact.clone());

    // Only removed on success so failed conversions can be inspected
    fs::remove_dir_all(&destination).await?;

    log::info!("Created AppX package: {}", artifact.display());
    Ok(vec![artifact])
}

/// Resolve `<output_dir>/<basename>.appx`, moving it out of the converter's
/// destination directory if that is where it was written.
async fn collect_artifact(
    output_dir: &Path,
    destination: &Path,
    basename: &str,
    reporter: &dyn Reporter,
) -> Result<PathBuf> {
    let artifact = fs::absolute(&output_dir.join(format!("{basename}.appx")))?;

    if tokio::fs::try_exists(&artifact).await.unwrap_or(false) {
        return Ok(artifact);
    }

    let candidates = fs::find_files_with_extension(destination, "appx").await?;
    match candidates.first() {
        Some(produced) => {
            log::debug!("Moving {} to {}", produced.display(), artifact.display());
            tokio::fs::rename(produced, &artifact)
                .await
                .fs_context("moving AppX package", produced)?;
        }
        None => {
            let message = format!(
                "Converter reported success but no .appx was found in {}",
                destination.display()
            );
            log::warn!("{message}");
            reporter.warning(&message);
        }
    }

    Ok(artifact)
}
