//! Next-version computation for the stable and pre-release lines.
//!
//! Both functions are pure: they only look at the tag text they are given and
//! never consult the tag store. Unparsable input is not an error, it falls back
//! to [`Version::INITIAL`].

use crate::domain::{PreReleaseVersion, UpgradeKind, Version};
use crate::error::Result;

/// Computes the next stable version from the last stable tag.
///
/// # Arguments
/// * `last_tag` - Most recent stable tag (`X.Y.Z`), if any
/// * `kind` - Which component to upgrade
///
/// # Returns
/// * `Ok(Version)` - `last_tag` (or `0.1.0` when absent/unparsable) upgraded by `kind`
/// * `Err` - Only if a component would overflow
///
/// # Example
/// ```ignore
/// assert_eq!(compute_next_main_version(Some("2.3.4"), UpgradeKind::Minor)?, Version::new(2, 4, 0));
/// assert_eq!(compute_next_main_version(None, UpgradeKind::Major)?, Version::new(1, 0, 0));
/// ```
pub fn compute_next_main_version(last_tag: Option<&str>, kind: UpgradeKind) -> Result<Version> {
    let base = Version::parse_opt(last_tag).unwrap_or(Version::INITIAL);
    base.bump(kind)
}

/// Computes the next pre-release version for a development branch.
///
/// The base is the last stable version as-is (not incremented). The build
/// counter continues from `last_prerelease_tag` only when that tag belongs to
/// the same base; otherwise numbering restarts at 1.
///
/// # Arguments
/// * `last_main_tag` - Most recent stable tag, if any
/// * `last_prerelease_tag` - Most recent `X.Y.Z-develop.N` tag, if any
///
/// # Example
/// ```ignore
/// let next = compute_next_prerelease_version(Some("1.2.0"), Some("1.2.0-develop.5"))?;
/// assert_eq!(next.to_string(), "1.2.0-develop.6");
/// ```
pub fn compute_next_prerelease_version(
    last_main_tag: Option<&str>,
    last_prerelease_tag: Option<&str>,
) -> Result<PreReleaseVersion> {
    let base = Version::parse_opt(last_main_tag).unwrap_or(Version::INITIAL);
    let last_build = last_prerelease_tag
        .and_then(|tag| PreReleaseVersion::build_for_base(tag, base))
        .unwrap_or(0);

    PreReleaseVersion::new(base, last_build).next_build()
}
