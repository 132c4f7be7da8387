use std::path::Path;

use git2::Repository;

use crate::error::Result;
use crate::git::TagSource;

/// Tag lookup backed by a real git repository via the `git2` crate.
pub struct GitTagSource {
    repo: Repository,
}

impl GitTagSource {
    /// Discovers the git repository in the current directory or parent
    /// directories.
    ///
    /// # Returns
    /// * `Ok(GitTagSource)` - Successfully opened repository
    /// * `Err` - If not in a git repository. Callers doing nightly counting
    ///   treat this as "no tags available", not as a fatal condition.
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(GitTagSource { repo })
    }

    /// Discovers the git repository at or above an explicit path.
    pub fn discover_at(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitTagSource { repo })
    }
}

impl TagSource for GitTagSource {
    fn tags_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let names = self.repo.tag_names(Some(pattern))?;
        Ok(names.iter().flatten().map(str::to_string).collect())
    }
}
