//! Reverse-domain package identifiers.

use crate::bundler::{Error, Result};
use std::{fmt, str::FromStr, sync::LazyLock};

static PACKAGE_ID: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*(\.[a-zA-Z][a-zA-Z0-9_]*)+$").expect("static regex")
});

/// A validated identifier in the form `com.example.Foo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(String);

impl PackageId {
    /// Validate `id`.
    pub fn parse(id: &str) -> Result<Self> {
        if PACKAGE_ID.is_match(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(Error::InvalidPackageId(id.to_string()))
        }
    }

    /// The full identifier, e.g. `com.example.Foo`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Application name: the last segment.
    pub fn name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Publisher guessed from the identifier: the second-to-last segment.
    pub fn organization(&self) -> &str {
        self.0.rsplit('.').nth(1).unwrap_or_default()
    }
}

impl FromStr for PackageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
