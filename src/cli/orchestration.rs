//! Branch strategy dispatch
//!
//! Turns the raw CI inputs into the final version string: the stable line for
//! `main`, the pre-release line for every other branch. The binary only parses
//! arguments and prints; everything deciding the version lives here so it can
//! be driven with an in-memory tag store.

use crate::boundary::BoundaryWarning;
use crate::domain::{BranchContext, PreReleaseVersion, UpgradeKind, Version};
use crate::error::{NextVersionError, Result};
use crate::git::TagStore;
use crate::probe::{resolve_unique_candidate, Candidate};
use crate::resolver::{compute_next_main_version, compute_next_prerelease_version};

/// Raw inputs of one run
///
/// All fields are optional at this level; blank strings count as missing.
/// `base_branch` is required and checked by [run_version_workflow].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionInputs {
    /// Target branch name
    pub base_branch: Option<String>,

    /// MAJOR, MINOR or PATCH (case-insensitive); used on `main` only
    pub upgrade_type: Option<String>,

    /// Most recent stable tag; used on `main` only
    pub last_tag: Option<String>,

    /// Most recent stable tag; used on other branches only
    pub last_main_tag: Option<String>,

    /// Most recent pre-release tag; used on other branches only
    pub last_develop_tag: Option<String>,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct VersionOutcome {
    /// The unused version tag that was settled on
    pub version: String,

    /// The branch the version was computed for
    pub branch: BranchContext,

    /// The previous tag the computation started from, if one was given
    pub previous_tag: Option<String>,

    /// Candidates passed over because their tag already existed
    pub skipped: Vec<String>,

    /// Non-fatal conditions met on the way
    pub warnings: Vec<BoundaryWarning>,
}

/// CI inputs arrive padded or empty, so values are trimmed here and
/// `" main "` selects the stable line. [BranchContext] itself compares verbatim.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Computes the next unused version for the target branch.
///
/// # Arguments
/// * `inputs` - Raw CI inputs
/// * `store` - Tag store probed for existing tags
/// * `max_attempts` - Optional cap on taken candidates, see [crate::probe::resolve_unique]
///
/// # Returns
/// * `Ok(VersionOutcome)` - The version and what happened on the way
/// * `Err` - If `base_branch` is missing, the probe cap is hit, or a
///   version component would overflow
pub fn run_version_workflow<S>(
    inputs: &VersionInputs,
    store: &S,
    max_attempts: Option<u64>,
) -> Result<VersionOutcome>
where
    S: TagStore + ?Sized,
{
    let branch_name = present(&inputs.base_branch)
        .ok_or_else(|| NextVersionError::input("Input required and not supplied: baseBranch"))?;
    let branch = BranchContext::new(branch_name);
    let mut warnings = Vec::new();

    let (start, previous_tag) = if branch.is_release_branch() {
        let upgrade_type = present(&inputs.upgrade_type);
        if let Some(value) = upgrade_type {
            if value.parse::<UpgradeKind>().is_err() {
                warnings.push(BoundaryWarning::UnknownUpgradeKind {
                    value: value.to_string(),
                });
            }
        }

        let last_tag = present(&inputs.last_tag);
        check_stable_tag("lastTag", last_tag, &mut warnings);

        let version = compute_next_main_version(last_tag, UpgradeKind::from_input(upgrade_type))?;
        (Candidate::Release(version), last_tag)
    } else {
        let last_main_tag = present(&inputs.last_main_tag);
        let last_develop_tag = present(&inputs.last_develop_tag);
        check_stable_tag("lastMainTag", last_main_tag, &mut warnings);

        let prerelease = compute_next_prerelease_version(last_main_tag, last_develop_tag)?;
        if let Some(tag) = last_develop_tag {
            if PreReleaseVersion::build_for_base(tag, prerelease.base).is_none() {
                warnings.push(BoundaryWarning::PreReleaseBaseMismatch {
                    tag: tag.to_string(),
                    base: prerelease.base.to_string(),
                });
            }
        }

        (
            Candidate::PreRelease(prerelease),
            last_develop_tag.or(last_main_tag),
        )
    };

    let resolution = resolve_unique_candidate(store, start, max_attempts)?;
    warnings.extend(store.take_lookup_failures());

    Ok(VersionOutcome {
        version: resolution.winner.to_string(),
        branch,
        previous_tag: previous_tag.map(str::to_string),
        skipped: resolution.skipped,
        warnings,
    })
}

fn check_stable_tag(input: &'static str, tag: Option<&str>, warnings: &mut Vec<BoundaryWarning>) {
    if let Some(tag) = tag {
        if Version::parse(tag).is_none() {
            warnings.push(BoundaryWarning::UnparsableTag {
                input,
                tag: tag.to_string(),
                fallback: Version::INITIAL.to_string(),
            });
        }
    }
}
