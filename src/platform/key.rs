use anyhow::{Result, bail};
use std::fmt;

use super::Platform;

/// A platform pre-built binaries are published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    LinuxAmd64,
    LinuxArm64,
    DarwinAmd64,
    DarwinArm64,
}

impl PlatformKey {
    pub const ALL: [PlatformKey; 4] = [
        PlatformKey::LinuxAmd64,
        PlatformKey::LinuxArm64,
        PlatformKey::DarwinAmd64,
        PlatformKey::DarwinArm64,
    ];

    /// Map detected host facts onto a supported platform.
    ///
    /// Only exact `(os, arch)` pairs are accepted; there is no fuzzy matching.
    pub fn resolve(platform: &Platform) -> Result<Self> {
        let key = match (platform.os.as_str(), platform.arch.as_str()) {
            ("linux", "x64") => PlatformKey::LinuxAmd64,
            ("linux", "arm64") => PlatformKey::LinuxArm64,
            ("darwin", "x64") => PlatformKey::DarwinAmd64,
            ("darwin", "arm64") => PlatformKey::DarwinArm64,
            (os, arch) => bail!("Unsupported platform ({}) and architecture ({})", os, arch),
        };
        Ok(key)
    }

    /// Detect and resolve the platform this process runs on.
    pub fn current() -> Result<Self> {
        Self::resolve(&Platform::detect())
    }

    /// The `<os>-<arch>` part of a binary name, e.g. `linux-amd64`.
    pub fn suffix(self) -> &'static str {
        match self {
            PlatformKey::LinuxAmd64 => "linux-amd64",
            PlatformKey::LinuxArm64 => "linux-arm64",
            PlatformKey::DarwinAmd64 => "darwin-amd64",
            PlatformKey::DarwinArm64 => "darwin-arm64",
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
