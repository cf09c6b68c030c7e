pub mod config;
pub mod launch;
pub mod platform;
pub mod runtime;
pub mod version;

/// Version of the launcher itself, derived from git at build time.
pub const LAUNCHER_VERSION: &str = env!("BINSHIM_VERSION");
