//! appshell - scaffold and package application shells.
//!
//! Wraps the Android SDK project generator, Apache Ant and the Windows
//! Desktop App Converter behind `create`, `update` and `build` commands.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match appshell::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            appshell::cli::EXIT_FAILURE
        }
    };

    process::exit(exit_code);
}
