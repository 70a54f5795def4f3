use std::fmt;

/// Non-fatal conditions met while computing a version.
/// The run continues with a fallback; these are reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A tag input was supplied but is not a plain `X.Y.Z` version
    UnparsableTag {
        input: &'static str,
        tag: String,
        fallback: String,
    },
    /// The upgrade type input is not MAJOR, MINOR or PATCH
    UnknownUpgradeKind { value: String },
    /// The last pre-release tag belongs to another base version
    PreReleaseBaseMismatch { tag: String, base: String },
    /// The tag store could not answer; the candidate is treated as free
    TagLookupFailed { candidate: String, reason: String },
    /// No git repository could be opened for tag lookups
    RepositoryUnavailable { path: String, reason: String },
    /// Fetching tags from the remote failed; local tags are used
    FetchFailed { remote: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag {
                input,
                tag,
                fallback,
            } => write!(
                f,
                "Cannot parse {} '{}' as X.Y.Z, using base version {}",
                input, tag, fallback
            ),
            BoundaryWarning::UnknownUpgradeKind { value } => write!(
                f,
                "Unrecognized upgrade type '{}', using PATCH",
                value
            ),
            BoundaryWarning::PreReleaseBaseMismatch { tag, base } => write!(
                f,
                "Pre-release tag '{}' does not belong to base {}, build numbering restarts at 1",
                tag, base
            ),
            BoundaryWarning::TagLookupFailed { candidate, reason } => write!(
                f,
                "Could not check whether tag '{}' exists ({}), treating it as unused",
                candidate, reason
            ),
            BoundaryWarning::RepositoryUnavailable { path, reason } => write!(
                f,
                "No git repository at '{}' ({}), every candidate tag is treated as unused",
                path, reason
            ),
            BoundaryWarning::FetchFailed { remote, reason } => write!(
                f,
                "Could not fetch tags from remote '{}': {}. Using local tags",
                remote, reason
            ),
        }
    }
}
