use crate::error::{NextVersionError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Exactly `MAJOR.MINOR.PATCH`, no prefix, no suffix, no leading zeros.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$").expect("version pattern is valid")
});

/// Stable semantic version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Base used whenever no previous stable tag can be parsed.
    pub const INITIAL: Version = Version::new(0, 1, 0);

    /// Create a new version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a plain `X.Y.Z` tag.
    ///
    /// Surrounding whitespace is ignored. Anything else that does not match the
    /// three-component shape exactly (a `v` prefix, a pre-release suffix, leading
    /// zeros, a component that does not fit in 64 bits) yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let captures = VERSION_RE.captures(text.trim())?;

        let major = captures[1].parse::<u64>().ok()?;
        let minor = captures[2].parse::<u64>().ok()?;
        let patch = captures[3].parse::<u64>().ok()?;

        Some(Version::new(major, minor, patch))
    }

    /// Parse an optional input, treating `None` like an unparsable tag.
    pub fn parse_opt(text: Option<&str>) -> Option<Self> {
        text.and_then(Version::parse)
    }

    /// Bump version according to the upgrade kind.
    ///
    /// Exactly one rule applies:
    /// - **Major**: `{major + 1, 0, 0}`
    /// - **Minor**: `{major, minor + 1, 0}`
    /// - **Patch**: `{major, minor, patch + 1}`
    pub fn bump(&self, kind: UpgradeKind) -> Result<Self> {
        match kind {
            UpgradeKind::Major => Ok(Version::new(increment(self.major, "major")?, 0, 0)),
            UpgradeKind::Minor => Ok(Version::new(
                self.major,
                increment(self.minor, "minor")?,
                0,
            )),
            UpgradeKind::Patch => self.next_patch(),
        }
    }

    /// Next patch release, never rolling over into minor or major.
    pub fn next_patch(&self) -> Result<Self> {
        Ok(Version::new(
            self.major,
            self.minor,
            increment(self.patch, "patch")?,
        ))
    }
}

pub(crate) fn increment(value: u64, component: &str) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        NextVersionError::version(format!(
            "{} component {} cannot be incremented",
            component, value
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Requested kind of stable-line upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpgradeKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl UpgradeKind {
    /// Lenient conversion used for CI input: anything unrecognized is `Patch`.
    pub fn from_input(input: Option<&str>) -> Self {
        input
            .and_then(|value| value.parse::<UpgradeKind>().ok())
            .unwrap_or_default()
    }
}

impl FromStr for UpgradeKind {
    type Err = NextVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MAJOR" => Ok(UpgradeKind::Major),
            "MINOR" => Ok(UpgradeKind::Minor),
            "PATCH" => Ok(UpgradeKind::Patch),
            _ => Err(NextVersionError::input(format!(
                "Unrecognized upgrade type: '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeKind::Major => write!(f, "MAJOR"),
            UpgradeKind::Minor => write!(f, "MINOR"),
            UpgradeKind::Patch => write!(f, "PATCH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_trims_whitespace() {
        assert_eq!(Version::parse("  4.0.12\n"), Some(Version::new(4, 0, 12)));
    }

    #[test]
    fn test_version_parse_rejects_other_shapes() {
        for input in [
            "",
            "   ",
            "1.2",
            "1.2.3.4",
            "v1.2.3",
            "V1.2.3",
            "1.2.3-develop.1",
            "1.2.3 beta",
            "01.2.3",
            "1.02.3",
            "1.2.03",
            "-1.2.3",
            "a.b.c",
            "1..3",
            "99999999999999999999.0.0",
        ] {
            assert_eq!(Version::parse(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_version_parse_opt_none() {
        assert_eq!(Version::parse_opt(None), None);
        assert_eq!(Version::parse_opt(Some("0.0.0")), Some(Version::new(0, 0, 0)));
    }

    #[test]
    fn test_version_round_trip() {
        for input in ["0.0.0", "0.1.0", "1.2.3", "10.20.30", "18446744073709551615.0.7"] {
            assert_eq!(Version::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_version_bump_major() {
        let bumped = Version::new(2, 3, 4).bump(UpgradeKind::Major).unwrap();
        assert_eq!(bumped, Version::new(3, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let bumped = Version::new(2, 3, 4).bump(UpgradeKind::Minor).unwrap();
        assert_eq!(bumped, Version::new(2, 4, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let bumped = Version::new(2, 3, 4).bump(UpgradeKind::Patch).unwrap();
        assert_eq!(bumped, Version::new(2, 3, 5));
    }

    #[test]
    fn test_version_bump_overflow_is_an_error() {
        let v = Version::new(1, 1, u64::MAX);
        assert!(v.next_patch().is_err());
        // Higher components reset the patch, so they still succeed
        assert_eq!(v.bump(UpgradeKind::Minor).unwrap(), Version::new(1, 2, 0));
    }

    #[test]
    fn test_upgrade_kind_case_insensitive() {
        assert_eq!("major".parse::<UpgradeKind>().unwrap(), UpgradeKind::Major);
        assert_eq!("Minor".parse::<UpgradeKind>().unwrap(), UpgradeKind::Minor);
        assert_eq!("PATCH".parse::<UpgradeKind>().unwrap(), UpgradeKind::Patch);
    }

    #[test]
    fn test_upgrade_kind_unknown_falls_back_to_patch() {
        assert!("garbage".parse::<UpgradeKind>().is_err());
        assert_eq!(UpgradeKind::from_input(Some("garbage")), UpgradeKind::Patch);
        assert_eq!(UpgradeKind::from_input(Some("")), UpgradeKind::Patch);
        assert_eq!(UpgradeKind::from_input(None), UpgradeKind::Patch);
        assert_eq!(UpgradeKind::from_input(Some("mAjOr")), UpgradeKind::Major);
    }
}
