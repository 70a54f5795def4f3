use crate::boundary::BoundaryWarning;
use crate::git::TagStore;
use std::cell::RefCell;
use std::collections::HashSet;

/// In-memory tag store for testing without a git repository
#[derive(Debug, Default)]
pub struct MockTagStore {
    tags: HashSet<String>,
    failing: HashSet<String>,
    queries: RefCell<Vec<String>>,
    failures: RefCell<Vec<BoundaryWarning>>,
}

impl MockTagStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store that already holds the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagStore {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add a tag to the store
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Make lookups of `name` fail as if the store were unreachable.
    ///
    /// The tag may still be present; a failing lookup answers `false` anyway.
    pub fn fail_lookup(&mut self, name: impl Into<String>) {
        self.failing.insert(name.into());
    }

    /// Every candidate queried so far, in query order
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl TagStore for MockTagStore {
    fn tag_exists(&self, candidate: &str) -> bool {
        self.queries.borrow_mut().push(candidate.to_string());

        if self.failing.contains(candidate) {
            self.failures
                .borrow_mut()
                .push(BoundaryWarning::TagLookupFailed {
                    candidate: candidate.to_string(),
                    reason: "simulated lookup failure".to_string(),
                });
            return false;
        }
        self.tags.contains(candidate)
    }

    fn take_lookup_failures(&self) -> Vec<BoundaryWarning> {
        self.failures.take()
    }
}
