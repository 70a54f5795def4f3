//! Pre-release versions on the development line
//!
//! A pre-release is anchored to the stable version that is about to be cut and
//! carries a build counter: `1.5.0-develop.3`.

use crate::domain::version::{increment, Version};
use crate::error::Result;
use regex::Regex;
use std::fmt;

/// Identifier placed between the base version and the build counter.
pub const PRERELEASE_CHANNEL: &str = "develop";

/// Pre-release version with a build counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreReleaseVersion {
    /// The stable version this pre-release leads up to
    pub base: Version,
    /// Build counter, starting at 1 for a fresh base
    pub build: u64,
}

impl PreReleaseVersion {
    /// Create a new pre-release version
    pub fn new(base: Version, build: u64) -> Self {
        PreReleaseVersion { base, build }
    }

    /// Extract the build counter from a pre-release tag belonging to `base`.
    ///
    /// Only `{base}-develop.{N}` matches; a tag for any other base version (or
    /// any other shape) returns `None`.
    ///
    /// # Examples
    /// ```ignore
    /// let base = Version::new(1, 2, 0);
    /// assert_eq!(PreReleaseVersion::build_for_base("1.2.0-develop.5", base), Some(5));
    /// assert_eq!(PreReleaseVersion::build_for_base("1.1.0-develop.9", base), None);
    /// ```
    pub fn build_for_base(tag: &str, base: Version) -> Option<u64> {
        let pattern = format!(
            r"^{}\.{}\.{}-{}\.(\d+)$",
            base.major, base.minor, base.patch, PRERELEASE_CHANNEL
        );
        let re = Regex::new(&pattern).ok()?;
        let captures = re.captures(tag.trim())?;

        captures[1].parse::<u64>().ok()
    }

    /// Same base, next build counter.
    pub fn next_build(&self) -> Result<Self> {
        Ok(PreReleaseVersion {
            base: self.base,
            build: increment(self.build, "build")?,
        })
    }
}

impl fmt::Display for PreReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}.{}", self.base, PRERELEASE_CHANNEL, self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerelease_display() {
        let pr = PreReleaseVersion::new(Version::new(1, 5, 0), 3);
        assert_eq!(pr.to_string(), "1.5.0-develop.3");
    }

    #[test]
    fn test_build_for_matching_base() {
        let base = Version::new(1, 2, 0);
        assert_eq!(
            PreReleaseVersion::build_for_base("1.2.0-develop.5", base),
            Some(5)
        );
        assert_eq!(
            PreReleaseVersion::build_for_base(" 1.2.0-develop.0 ", base),
            Some(0)
        );
    }

    #[test]
    fn test_build_for_other_base() {
        let base = Version::new(1, 2, 0);
        assert_eq!(
            PreReleaseVersion::build_for_base("1.1.0-develop.9", base),
            None
        );
        assert_eq!(
            PreReleaseVersion::build_for_base("11.2.0-develop.9", base),
            None
        );
        assert_eq!(
            PreReleaseVersion::build_for_base("1.2.01-develop.9", base),
            None
        );
    }

    #[test]
    fn test_build_for_other_shapes() {
        let base = Version::new(1, 2, 0);
        for tag in [
            "",
            "1.2.0",
            "1.2.0-develop",
            "1.2.0-develop.",
            "1.2.0-develop.x",
            "1.2.0-beta.1",
            "1.2.0-develop.1.2",
            "v1.2.0-develop.1",
            "1x2x0-develop.1",
        ] {
            assert_eq!(
                PreReleaseVersion::build_for_base(tag, base),
                None,
                "tag {:?}",
                tag
            );
        }
    }

    #[test]
    fn test_next_build_keeps_base() {
        let pr = PreReleaseVersion::new(Version::new(0, 1, 0), 9);
        let next = pr.next_build().unwrap();
        assert_eq!(next.base, Version::new(0, 1, 0));
        assert_eq!(next.build, 10);
    }

    #[test]
    fn test_next_build_overflow() {
        let pr = PreReleaseVersion::new(Version::INITIAL, u64::MAX);
        assert!(pr.next_build().is_err());
    }
}
