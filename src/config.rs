use anyhow::{Context, Result, bail};
use log::debug;
use std::env::VarError;
use std::path::PathBuf;

use crate::launch::NamingStrategy;
use crate::runtime::Runtime;

/// Overrides the installation directory (defaults to the launcher's own directory).
pub const ROOT_ENV: &str = "BINSHIM_ROOT";

/// Selects revision-tagged binary names when truthy.
pub const REVISION_ENV: &str = "BINSHIM_REVISION";

/// Subdirectory of the installation directory holding the platform binaries.
pub const BIN_DIR: &str = "bin";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the version marker and the `bin/` subdirectory.
    pub install_dir: PathBuf,
    pub naming: NamingStrategy,
}

impl Config {
    pub fn new<R: Runtime + ?Sized>(runtime: &R) -> Result<Self> {
        let install_dir = match runtime.env_var_os(ROOT_ENV) {
            Some(root) if !root.is_empty() => {
                debug!("Using installation directory from {}", ROOT_ENV);
                let root = PathBuf::from(root);
                if root.is_absolute() {
                    root
                } else {
                    runtime.current_dir()?.join(root)
                }
            }
            _ => Self::launcher_dir(runtime)?,
        };

        let naming = match runtime.env_var(REVISION_ENV) {
            Ok(value) => value
                .parse::<NamingStrategy>()
                .with_context(|| format!("Invalid {}", REVISION_ENV))?,
            Err(VarError::NotPresent) => NamingStrategy::default(),
            Err(VarError::NotUnicode(_)) => {
                bail!("Invalid {}: value is not valid Unicode", REVISION_ENV)
            }
        };

        Ok(Self {
            install_dir,
            naming,
        })
    }

    /// Directory of the running executable, with symlinks resolved so a
    /// launcher linked into `PATH` still finds its real installation.
    fn launcher_dir<R: Runtime + ?Sized>(runtime: &R) -> Result<PathBuf> {
        let exe = runtime.current_exe()?;
        let exe = runtime.canonicalize(&exe)?;
        exe.parent()
            .map(PathBuf::from)
            .with_context(|| format!("Launcher path {} has no parent directory", exe.display()))
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.install_dir.join(BIN_DIR)
    }
}
