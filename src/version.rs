use crate::error::{ReleaseError, Result};

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parses a `major.minor.patch` version string, tolerating a pre-release
/// suffix on the patch component.
///
/// A suffix after the first `-` of the patch component (e.g. the `-beta` in
/// `1.2.3-beta`) is stripped before parsing. The suffix is not retained:
/// callers use this to recover the numeric triple of a possibly pre-release
/// version.
///
/// # Arguments
/// * `version` - Version string to parse (e.g., "1.2.3" or "1.2.3-beta.1")
///
/// # Returns
/// * `Ok(Version)` - Successfully parsed numeric triple
/// * `Err` - If the string does not have exactly three dot-separated numeric
///   components
pub fn parse_base_version(version: &str) -> Result<Version> {
    let parts: Vec<&str> = version.splitn(3, '.').collect();
    if parts.len() != 3 {
        return Err(ReleaseError::version(format!(
            "Expected major.minor.patch, got '{}'",
            version
        )));
    }

    let numeric = |part: &str| {
        part.parse::<u32>().map_err(|_| {
            ReleaseError::version(format!(
                "Non-numeric component '{}' in version '{}'",
                part, version
            ))
        })
    };

    let major = numeric(parts[0])?;
    let minor = numeric(parts[1])?;

    // Anything after the first '-' is a pre-release suffix and is dropped.
    let patch_part = match parts[2].split_once('-') {
        Some((numeric_part, _suffix)) => numeric_part,
        None => parts[2],
    };
    let patch = numeric(patch_part)?;

    Ok(Version::new(major, minor, patch))
}

/// Computes the next patch version of a version string.
///
/// The result never carries a pre-release suffix: `1.2.3-beta` yields
/// `1.2.4`, the same as plain `1.2.3` would. This models "the next release's
/// base version, regardless of whether the current published version was
/// itself a pre-release."
///
/// # Example
/// ```ignore
/// assert_eq!(next_patch("1.2.3")?.to_string(), "1.2.4");
/// assert_eq!(next_patch("1.2.3-beta")?.to_string(), "1.2.4");
/// ```
pub fn next_patch(version: &str) -> Result<Version> {
    let mut version = parse_base_version(version)?;
    version.patch += 1;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        assert_eq!(parse_base_version("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_base_version("0.0.0").unwrap(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_parse_strips_prerelease_suffix() {
        assert_eq!(
            parse_base_version("1.2.3-beta").unwrap(),
            Version::new(1, 2, 3)
        );
        assert_eq!(
            parse_base_version("4.5.6-nightly.12").unwrap(),
            Version::new(4, 5, 6)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_component_count() {
        assert!(parse_base_version("1.2").is_err());
        assert!(parse_base_version("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_base_version("a.b.c").is_err());
        assert!(parse_base_version("1.x.3").is_err());
        assert!(parse_base_version("1.2.-beta").is_err());
    }

    #[test]
    fn test_next_patch() {
        assert_eq!(next_patch("1.2.3").unwrap().to_string(), "1.2.4");
        assert_eq!(next_patch("0.0.0").unwrap().to_string(), "0.0.1");
    }

    #[test]
    fn test_next_patch_drops_prerelease() {
        assert_eq!(next_patch("1.2.3-beta").unwrap().to_string(), "1.2.4");
        assert_eq!(next_patch("2.0.9-nightly.3").unwrap().to_string(), "2.0.10");
    }

    #[test]
    fn test_display_roundtrip() {
        let version = Version::new(10, 20, 30);
        assert_eq!(version.to_string(), "10.20.30");
    }
}
