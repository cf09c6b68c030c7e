//! Platform detection and resolution module
//!
//! This module detects the current platform (OS and architecture) and maps
//! it onto the closed set of platforms pre-built binaries exist for.

mod detection;
mod key;

pub use detection::{DefaultPlatformDetector, Platform, PlatformDetector};
pub use key::PlatformKey;

#[cfg(test)]
pub use detection::MockPlatformDetector;
