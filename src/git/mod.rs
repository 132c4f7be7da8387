//! Git tag lookup abstraction layer
//!
//! release-resolve only ever reads tags; this module fronts that single
//! concern with the [TagSource] trait so the resolver can be driven by a real
//! repository ([repository::GitTagSource]) or by fixtures in tests
//! ([mock::MockTagSource]).

pub mod mock;
pub mod repository;

pub use mock::{FailingTagSource, MockTagSource};
pub use repository::GitTagSource;

use crate::error::Result;

/// Read-only source of repository tag names.
///
/// Implementations should treat `pattern` as a git-style glob (e.g.
/// `v1.2.4-nightly.*`); the returned order is unspecified.
pub trait TagSource {
    /// List all tag names matching the given glob pattern.
    fn tags_matching(&self, pattern: &str) -> Result<Vec<String>>;
}
