pub mod error;
pub mod git;
pub mod manifest;
pub mod nightly;
pub mod resolver;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
pub use resolver::{resolve, Release};
