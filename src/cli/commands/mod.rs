//! Command handlers.
//!
//! Each handler returns the process exit code; failures are returned as
//! errors and reported by [`crate::cli::run`].

mod build;
mod create;
mod update;

pub use build::execute as build;
pub use create::execute as create;
pub use update::execute as update;
