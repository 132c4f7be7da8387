use crate::error::{ReleaseError, Result};
use crate::git::TagSource;

/// Mock tag source for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockTagSource {
    tags: Vec<String>,
}

impl MockTagSource {
    /// Create a new empty mock tag source
    pub fn new() -> Self {
        MockTagSource { tags: Vec::new() }
    }

    /// Create a mock tag source pre-populated with tags
    pub fn with_tags(tags: &[&str]) -> Self {
        MockTagSource {
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Add a tag to the mock source
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl TagSource for MockTagSource {
    fn tags_matching(&self, pattern: &str) -> Result<Vec<String>> {
        // Simplified glob support: only the trailing-star form the resolver
        // uses ("prefix.*"), plus exact matches.
        let matches = |tag: &str| match pattern.strip_suffix('*') {
            Some(prefix) => tag.starts_with(prefix),
            None => tag == pattern,
        };

        Ok(self
            .tags
            .iter()
            .filter(|tag| matches(tag))
            .cloned()
            .collect())
    }
}

/// Tag source whose queries always fail, for exercising the
/// "tag subsystem unavailable" path.
#[derive(Debug, Default)]
pub struct FailingTagSource;

impl TagSource for FailingTagSource {
    fn tags_matching(&self, _pattern: &str) -> Result<Vec<String>> {
        Err(ReleaseError::tag("tag listing unavailable"))
    }
}
