//! Command line interface for appshell.
//!
//! Parses arguments, dispatches to a command handler, and turns the outcome
//! into a process exit code.

mod args;
pub mod commands;
mod output;

pub use args::{Args, BuildArgs, BuildType, Command, CreateArgs, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Exit code for a failed command.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for an unrecognized command or invalid arguments.
pub const EXIT_USAGE: i32 = 2;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_from(std::env::args_os()).await
}

/// Run with explicit arguments (the first one is the program name).
pub async fn run_from<I, T>(argv: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            e.print()?;
            return Ok(if e.use_stderr() { EXIT_USAGE } else { 0 });
        }
    };

    let config = RuntimeConfig::from(&args);

    let Some(command) = args.command else {
        print_help()?;
        return Ok(0);
    };

    let outcome = match &command {
        Command::Create(create) => commands::create(create, &config).await,
        Command::Update { version } => commands::update(version, &config),
        Command::Build(build) => commands::build(build, &config).await,
        Command::Help => print_help().map(|()| 0).map_err(Into::into),
        Command::Version => {
            println!("appshell {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Command::Unrecognized(words) => {
            let name = words.first().map(String::as_str).unwrap_or_default();
            log::debug!("Unrecognized command line: {words:?}");
            config.output().error(&format!("Unrecognized command '{name}'"))?;
            eprintln!("{}", Args::command().render_usage());
            eprintln!("\nRun 'appshell help' for the list of commands.");
            return Ok(EXIT_USAGE);
        }
    };

    match outcome {
        Ok(code) => Ok(code),
        Err(e) => {
            config.output().error(&e.to_string())?;
            for suggestion in e.recovery_suggestions() {
                config.output().indent(&suggestion)?;
            }
            Ok(EXIT_FAILURE)
        }
    }
}

fn print_help() -> std::io::Result<()> {
    Args::command().print_long_help()
}
