//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that resolves the
//! toolchain for a package type up front and then runs the platform module.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and bundling operations
//! - [`tool_detection`] - External tool availability checking

pub mod checksum;
mod orchestrator;
pub mod tool_detection;

pub use orchestrator::Bundler;
pub use tool_detection::{locate_android_sdk, locate_ant, locate_converter};
