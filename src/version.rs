//! Version and revision resolution.
//!
//! The version comes from a marker file shipped next to the launcher. The
//! revision, when the naming strategy asks for one, comes from the source
//! control checkout the launcher runs in.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::path::Path;

use crate::runtime::Runtime;

/// Name of the version marker file inside the installation directory.
pub const MARKER_FILE: &str = ".version";

/// Read the version marker in `install_dir`, trimmed of surrounding whitespace.
#[tracing::instrument(level = "debug", skip(runtime))]
pub fn read_version<R: Runtime + ?Sized>(runtime: &R, install_dir: &Path) -> Result<String> {
    let marker = install_dir.join(MARKER_FILE);
    let contents = runtime
        .read_to_string(&marker)
        .context("Error reading version file")?;
    let version = contents.trim().to_string();
    debug!("Read version {:?} from {}", version, marker.display());
    Ok(version)
}

/// Ask git for the short hash of `HEAD` in the current directory.
#[tracing::instrument(level = "debug", skip(runtime))]
pub async fn query_revision<R: Runtime + ?Sized>(runtime: &R) -> Result<String> {
    let args = ["rev-parse", "--short", "HEAD"].map(String::from);
    let output = runtime
        .output("git", &args)
        .await
        .context("Error getting Git SHA")?;

    if !output.success {
        bail!("Error getting Git SHA: {}", output.stderr.trim());
    }

    let revision = output.stdout.trim().to_string();
    if revision.is_empty() {
        bail!("Error getting Git SHA: git rev-parse printed nothing");
    }

    info!("Current Git SHA: {}", revision);
    Ok(revision)
}
