//! Platform-specific generation and packaging.

pub mod android;
pub mod windows;

use std::fmt;

/// Kind of package the bundler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageType {
    /// Debug-signed Android APK built with `ant debug`
    AndroidDebug,
    /// Unsigned release Android APK built with `ant release`
    AndroidRelease,
    /// Windows AppX package produced by the Desktop App Converter
    Appx,
}

impl PackageType {
    /// File extension of the produced artifact.
    pub fn extension(self) -> &'static str {
        match self {
            Self::AndroidDebug | Self::AndroidRelease => "apk",
            Self::Appx => "appx",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AndroidDebug => "android-debug",
            Self::AndroidRelease => "android-release",
            Self::Appx => "appx",
        };
        f.write_str(name)
    }
}
