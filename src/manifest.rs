use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Default manifest file name, resolved against the working directory.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// The subset of package manifest fields release-resolve needs.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub version: String,
}

/// Loads the package manifest from the given path.
///
/// # Returns
/// * `Ok(Manifest)` - Parsed manifest
/// * `Err` - If the file is missing, unreadable, or not valid JSON with a
///   `version` field. These are fatal for the whole resolution; there is no
///   local recovery.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let raw = fs::read_to_string(path)?;
    let manifest: Manifest = serde_json::from_str(&raw)?;
    Ok(manifest)
}

/// Reads the declared package version from the manifest at `path`.
pub fn read_version(path: &Path) -> Result<String> {
    Ok(load_manifest(path)?.version)
}
