//! Nightly build sequence numbering
//!
//! Nightly tags take the form `v{version}-nightly.{count}`. This module scans
//! existing tags scoped to a single target version and hands out the next
//! unused count. Failure to reach the tag subsystem is an expected condition
//! here (fresh clone, CI sandbox, plain directory) and starts the count at
//! zero instead of aborting.

use std::path::Path;

use crate::error::Result;
use crate::git::TagSource;
use crate::manifest;
use crate::version::{self, Version};

/// Outcome of scanning for existing nightly tags of a target version.
///
/// `Empty` and `Unavailable` both produce count 0, but they are distinct so
/// callers never conflate "no nightly published yet" with "the tag subsystem
/// is broken or absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagQuery {
    /// Tags were listed and at least one matched.
    Found(Vec<String>),
    /// Tags were listed successfully but none matched.
    Empty,
    /// The query could not be performed (no repository, listing failed).
    Unavailable,
}

impl TagQuery {
    /// Scans for nightly tags of `version`.
    ///
    /// `source` is `None` when no repository could be opened at all.
    pub fn scan(source: Option<&dyn TagSource>, version: &Version) -> TagQuery {
        let Some(source) = source else {
            return TagQuery::Unavailable;
        };

        match source.tags_matching(&format!("v{}-nightly.*", version)) {
            Ok(tags) if tags.is_empty() => TagQuery::Empty,
            Ok(tags) => TagQuery::Found(tags),
            Err(_) => TagQuery::Unavailable,
        }
    }

    /// Next unused nightly sequence number.
    ///
    /// Each found tag contributes the integer after its final `nightly.`
    /// segment; tags without a parseable trailing number contribute 0. The
    /// result is one past the maximum contribution, with -1 as the floor so
    /// every non-`Found` outcome yields 0. Gaps in the sequence are ignored.
    pub fn next_count(&self) -> u32 {
        let tags = match self {
            TagQuery::Found(tags) => tags,
            TagQuery::Empty | TagQuery::Unavailable => return 0,
        };

        let max = tags
            .iter()
            .map(|tag| trailing_count(tag))
            .fold(-1i64, i64::max);
        (max + 1) as u32
    }
}

fn trailing_count(tag: &str) -> i64 {
    match tag.rsplit_once("nightly.") {
        Some((_, count)) => count.parse().unwrap_or(0),
        None => 0,
    }
}

/// Computes the tag name for the next nightly build.
///
/// Reads the current manifest version, bumps the patch component, and appends
/// the next unused nightly count for that bumped version. Nightly tags of
/// other versions never influence the count.
pub fn next_nightly_tag(manifest_path: &Path, source: Option<&dyn TagSource>) -> Result<String> {
    let current = manifest::read_version(manifest_path)?;
    let next = version::next_patch(&current)?;
    let count = TagQuery::scan(source, &next).next_count();
    Ok(format!("v{}-nightly.{}", next, count))
}
