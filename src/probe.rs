//! Search for the first candidate tag that is not taken yet.

use std::fmt;

use crate::domain::{PreReleaseVersion, Version};
use crate::error::{NextVersionError, Result};
use crate::git::TagStore;

/// A proposed tag and the way it moves on when the tag is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// Stable release, advanced by bumping the patch component only
    Release(Version),
    /// Development pre-release, advanced by bumping the build counter only
    PreRelease(PreReleaseVersion),
}

impl Candidate {
    /// The next candidate of the same kind.
    ///
    /// There is no rollover: a release never advances into a new minor or
    /// major version, a pre-release never changes its base.
    pub fn advance(&self) -> Result<Self> {
        match self {
            Candidate::Release(version) => Ok(Candidate::Release(version.next_patch()?)),
            Candidate::PreRelease(prerelease) => {
                Ok(Candidate::PreRelease(prerelease.next_build()?))
            }
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Release(version) => fmt::Display::fmt(version, f),
            Candidate::PreRelease(prerelease) => fmt::Display::fmt(prerelease, f),
        }
    }
}

/// The first free candidate and the taken ones passed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<C> {
    pub winner: C,
    pub skipped: Vec<String>,
}

/// Probes `store` with `start`, advancing while the tag is taken.
///
/// Candidates are checked strictly one after another. With `max_attempts` set
/// to `None` the search is unbounded; `Some(n)` gives up once `n` taken
/// candidates have been skipped.
///
/// # Arguments
/// * `store` - Where existing tags are looked up
/// * `start` - First candidate to try
/// * `advance` - Produces the next candidate from a taken one
/// * `max_attempts` - Optional cap on skipped candidates
///
/// # Returns
/// * `Ok(Resolution)` - The first candidate whose tag does not exist
/// * `Err` - If the cap was reached or `advance` failed
pub fn resolve_unique<S, C, F>(
    store: &S,
    start: C,
    advance: F,
    max_attempts: Option<u64>,
) -> Result<Resolution<C>>
where
    S: TagStore + ?Sized,
    C: fmt::Display,
    F: Fn(&C) -> Result<C>,
{
    let mut candidate = start;
    let mut skipped = Vec::new();

    loop {
        let name = candidate.to_string();
        if !store.tag_exists(&name) {
            return Ok(Resolution {
                winner: candidate,
                skipped,
            });
        }

        skipped.push(name);
        if let Some(limit) = max_attempts {
            if skipped.len() as u64 >= limit {
                return Err(NextVersionError::probe(format!(
                    "no free tag found after {} taken candidates (last tried '{}')",
                    skipped.len(),
                    candidate
                )));
            }
        }

        candidate = advance(&candidate)?;
    }
}

/// [`resolve_unique`] with the advance rule carried by the candidate itself.
pub fn resolve_unique_candidate<S>(
    store: &S,
    start: Candidate,
    max_attempts: Option<u64>,
) -> Result<Resolution<Candidate>>
where
    S: TagStore + ?Sized,
{
    resolve_unique(store, start, Candidate::advance, max_attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockTagStore;

    #[test]
    fn test_free_candidate_is_returned_immediately() {
        let store = MockTagStore::new();
        let start = Candidate::Release(Version::new(1, 2, 1));

        let resolution = resolve_unique_candidate(&store, start, None).unwrap();
        assert_eq!(resolution.winner.to_string(), "1.2.1");
        assert!(resolution.skipped.is_empty());
        assert_eq!(store.queries(), vec!["1.2.1"]);
    }

    #[test]
    fn test_release_advances_patch_only() {
        let store = MockTagStore::with_tags(["1.2.1", "1.2.2"]);
        let start = Candidate::Release(Version::new(1, 2, 1));

        let resolution = resolve_unique_candidate(&store, start, None).unwrap();
        assert_eq!(resolution.winner.to_string(), "1.2.3");
        assert_eq!(resolution.skipped, vec!["1.2.1", "1.2.2"]);
        assert_eq!(store.queries(), vec!["1.2.1", "1.2.2", "1.2.3"]);
    }

    #[test]
    fn test_prerelease_advances_build_only() {
        let store = MockTagStore::with_tags(["1.0.0-develop.1", "1.0.0-develop.2"]);
        let start = Candidate::PreRelease(PreReleaseVersion::new(Version::new(1, 0, 0), 1));

        let resolution = resolve_unique_candidate(&store, start, None).unwrap();
        assert_eq!(resolution.winner.to_string(), "1.0.0-develop.3");
    }

    #[test]
    fn test_release_never_rolls_into_minor() {
        // A release store full of patch tags is walked patch by patch
        let tags: Vec<String> = (0..50).map(|p| format!("0.9.{}", p)).collect();
        let store = MockTagStore::with_tags(tags);
        let start = Candidate::Release(Version::new(0, 9, 0));

        let resolution = resolve_unique_candidate(&store, start, None).unwrap();
        assert_eq!(resolution.winner, Candidate::Release(Version::new(0, 9, 50)));
    }

    #[test]
    fn test_failed_lookup_accepts_candidate() {
        let mut store = MockTagStore::with_tags(["2.0.0"]);
        store.fail_lookup("2.0.0");
        let start = Candidate::Release(Version::new(2, 0, 0));

        let resolution = resolve_unique_candidate(&store, start, None).unwrap();
        assert_eq!(resolution.winner.to_string(), "2.0.0");
    }

    #[test]
    fn test_attempt_cap() {
        let store = MockTagStore::with_tags(["1.0.0", "1.0.1", "1.0.2"]);
        let start = Candidate::Release(Version::new(1, 0, 0));

        let err = resolve_unique_candidate(&store, start, Some(2)).unwrap_err();
        assert!(err.to_string().contains("after 2 taken candidates"));

        let resolution = resolve_unique_candidate(&store, start, Some(3));
        assert!(resolution.is_err());

        let resolution = resolve_unique_candidate(&store, start, Some(4)).unwrap();
        assert_eq!(resolution.winner.to_string(), "1.0.3");
    }

    #[test]
    fn test_custom_advance_function() {
        let store = MockTagStore::with_tags(["a", "aa"]);
        let resolution =
            resolve_unique(&store, "a".to_string(), |c| Ok(format!("{}a", c)), None).unwrap();
        assert_eq!(resolution.winner, "aaa");
    }

    #[test]
    fn test_advance_overflow_propagates() {
        let max = Version::new(0, 0, u64::MAX);
        let store = MockTagStore::with_tags([max.to_string()]);

        assert!(resolve_unique_candidate(&store, Candidate::Release(max), None).is_err());
    }
}
