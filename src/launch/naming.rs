use anyhow::{Result, bail};
use std::fmt;
use std::str::FromStr;

use crate::platform::PlatformKey;

/// Fixed prefix every published binary name starts with.
pub const BINARY_PREFIX: &str = "main";

/// How binary names are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingStrategy {
    /// `main-<os>-<arch>-<version>`
    #[default]
    Plain,
    /// `main-<os>-<arch>-<version>-<revision>`
    Revision,
}

impl NamingStrategy {
    pub fn needs_revision(self) -> bool {
        matches!(self, NamingStrategy::Revision)
    }
}

impl FromStr for NamingStrategy {
    type Err = anyhow::Error;

    /// Parse a boolean-ish switch: truthy values select [`NamingStrategy::Revision`].
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" | "off" => Ok(NamingStrategy::Plain),
            "1" | "true" | "yes" | "on" => Ok(NamingStrategy::Revision),
            other => bail!("Invalid revision switch '{}', expected true or false", other),
        }
    }
}

/// File name of the binary built for one platform, version and revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryName(String);

impl BinaryName {
    pub fn new(key: PlatformKey, version: &str, revision: Option<&str>) -> Self {
        let mut name = format!("{}-{}-{}", BINARY_PREFIX, key.suffix(), version);
        if let Some(revision) = revision {
            name.push('-');
            name.push_str(revision);
        }
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
