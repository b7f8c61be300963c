//! Android project generation and APK builds.
//!
//! Both operations delegate to legacy Android SDK tooling:
//!
//! - `project` - `android create project` for a new application shell
//! - `build` - `ant debug` / `ant release` inside the generated project

pub mod build;
pub mod project;

pub use build::bundle_project;
pub use project::generate;
