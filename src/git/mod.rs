//! Tag store abstraction layer
//!
//! The version computation only needs one thing from version control: whether a
//! tag with a given name already exists. That capability is the [TagStore]
//! trait, with two implementations:
//!
//! - [repository::Git2TagStore]: looks up `refs/tags/<name>` with the `git2` crate
//! - [mock::MockTagStore]: an in-memory set of tag names for tests
//!
//! ```rust
//! # use git_next_version::git::{MockTagStore, TagStore};
//! let store = MockTagStore::with_tags(["1.2.1"]);
//! assert!(store.tag_exists("1.2.1"));
//! assert!(!store.tag_exists("1.2.2"));
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagStore;
pub use repository::Git2TagStore;

use crate::boundary::BoundaryWarning;

/// Existence check against the tags visible to this job
///
/// ## Error Handling
///
/// `tag_exists` returns a plain `bool`. Implementations must not propagate
/// lookup failures (unreachable store, malformed ref name): such a failure
/// answers `false`, so the candidate is accepted. Stores that can fail keep
/// a record of those lookups for [TagStore::take_lookup_failures].
///
/// ## Ordering
///
/// Callers query one candidate at a time and wait for the answer before
/// deciding on the next candidate.
pub trait TagStore {
    /// Whether a tag named exactly `candidate` exists
    fn tag_exists(&self, candidate: &str) -> bool;

    /// Lookups that failed and were answered with `false` since the last call
    fn take_lookup_failures(&self) -> Vec<BoundaryWarning> {
        Vec::new()
    }
}

impl<T: TagStore + ?Sized> TagStore for &T {
    fn tag_exists(&self, candidate: &str) -> bool {
        (**self).tag_exists(candidate)
    }

    fn take_lookup_failures(&self) -> Vec<BoundaryWarning> {
        (**self).take_lookup_failures()
    }
}

impl<T: TagStore + ?Sized> TagStore for Box<T> {
    fn tag_exists(&self, candidate: &str) -> bool {
        (**self).tag_exists(candidate)
    }

    fn take_lookup_failures(&self) -> Vec<BoundaryWarning> {
        (**self).take_lookup_failures()
    }
}
