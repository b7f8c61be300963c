//! Configuration structures for scaffolding and packaging operations.
//!
//! This module provides the packaging metadata record, platform-specific
//! tool settings, and a builder for constructing [`Settings`].

mod android;
mod builder;
mod core;
mod package;
mod windows;

// Re-export all public types
pub use android::AndroidSettings;
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use package::PackageSettings;
pub use windows::{DEFAULT_CONVERTER, DEFAULT_INSTALLER_ARGUMENTS, WindowsSettings};
