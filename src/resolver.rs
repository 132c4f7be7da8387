//! Release resolution
//!
//! Top-level orchestration: picks nightly vs. manual mode, normalizes and
//! validates the resulting tag, and derives the npm publish channel. The
//! pipeline is linear; every stage can abort the whole resolution with a
//! distinct error.

use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::{ReleaseError, Result};
use crate::git::TagSource;
use crate::nightly;
use crate::ui;

/// Grammar every release tag must satisfy: `vX.Y.Z` with an optional
/// pre-release suffix. Build metadata (`+`) is rejected separately for a
/// clearer message.
const TAG_GRAMMAR: &str = r"^v[0-9]+\.[0-9]+\.[0-9]+(-[a-zA-Z0-9.-]+)?$";

/// Fully resolved release identifiers.
///
/// Serializes to the camelCase JSON line the CI pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Git tag to publish under (e.g. "v1.2.4-nightly.3")
    pub release_tag: String,
    /// Tag with the leading "v" stripped (e.g. "1.2.4-nightly.3")
    pub release_version: String,
    /// npm dist-tag / channel label ("latest", "nightly", "alpha", ...)
    pub npm_tag: String,
}

/// Resolves the release tag, version, and npm channel.
///
/// Exactly one mode applies:
/// - `nightly` true: derive `v{next-patch}-nightly.{count}` from the manifest
///   at `manifest_path` and the tags visible through `source`;
/// - `nightly` false with `version` present: use the given string;
/// - neither: configuration error, nothing is derived.
///
/// Both modes then pass through the same normalization: a missing `v` prefix
/// is prepended (logged, non-fatal), build metadata is rejected, and the tag
/// must match the release-tag grammar.
///
/// # Returns
/// * `Ok(Release)` - The resolved triple
/// * `Err` - Configuration, version, tag, or manifest I/O error; see
///   [crate::error::ReleaseError]
pub fn resolve(
    nightly: bool,
    version: Option<&str>,
    manifest_path: &Path,
    source: Option<&dyn TagSource>,
) -> Result<Release> {
    let tag = if nightly {
        nightly::next_nightly_tag(manifest_path, source)?
    } else if let Some(version) = version {
        version.to_string()
    } else {
        return Err(ReleaseError::config(
            "No release version given: pass an explicit version or request a nightly build",
        ));
    };

    let tag = if tag.starts_with('v') {
        tag
    } else {
        ui::display_status(&format!("Prepending 'v' to release tag: v{}", tag));
        format!("v{}", tag)
    };

    if tag.contains('+') {
        return Err(ReleaseError::tag(format!(
            "Build metadata is not supported in release tags: '{}'",
            tag
        )));
    }

    let grammar = Regex::new(TAG_GRAMMAR)
        .map_err(|_| ReleaseError::tag("Invalid release tag grammar"))?;
    if !grammar.is_match(&tag) {
        return Err(ReleaseError::tag(format!(
            "Release tag '{}' does not match vX.Y.Z[-prerelease]",
            tag
        )));
    }

    let release_version = tag.trim_start_matches('v').to_string();

    // Channel is the first pre-release identifier ("1.2.3-alpha.4" -> "alpha");
    // stable versions publish to "latest".
    let npm_tag = match release_version.split_once('-') {
        None => "latest".to_string(),
        Some((_, prerelease)) => prerelease
            .split('.')
            .next()
            .unwrap_or(prerelease)
            .to_string(),
    };

    Ok(Release {
        release_tag: tag,
        release_version,
        npm_tag,
    })
}
