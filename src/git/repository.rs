use crate::boundary::BoundaryWarning;
use crate::error::{NextVersionError, Result};
use crate::git::TagStore;
use git2::Repository as Git2Repo;
use std::cell::RefCell;
use std::path::Path;

/// Tag store backed by a local git repository.
///
/// A store without a repository (see [`Git2TagStore::detached`]) answers every
/// lookup with a failure, which the [`TagStore`] impl turns into "not found".
/// Failed lookups are kept until [`TagStore::take_lookup_failures`] is called.
pub struct Git2TagStore {
    repo: Option<Git2Repo>,
    failures: RefCell<Vec<BoundaryWarning>>,
}

impl Git2TagStore {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagStore {
            repo: Some(repo),
            failures: RefCell::new(Vec::new()),
        }
    }

    /// A store with no repository behind it
    pub fn detached() -> Self {
        Git2TagStore {
            repo: None,
            failures: RefCell::new(Vec::new()),
        }
    }

    fn repo(&self) -> Result<&Git2Repo> {
        self.repo
            .as_ref()
            .ok_or_else(|| NextVersionError::tag_store("no git repository is open"))
    }

    /// Looks up `refs/tags/<name>`.
    ///
    /// # Returns
    /// * `Ok(true)` - The reference exists
    /// * `Ok(false)` - No such reference
    /// * `Err` - The lookup itself failed (no repository, invalid ref name, I/O)
    pub fn lookup(&self, name: &str) -> Result<bool> {
        let repo = self.repo()?;
        let reference_name = format!("refs/tags/{}", name);

        match repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(NextVersionError::tag_store(format!(
                "Cannot look up tag '{}': {}",
                name,
                e.message()
            ))),
        }
    }

    /// Fetches all tags from a remote so lookups see tags pushed by other jobs.
    ///
    /// Supports SSH authentication via SSH keys from ~/.ssh/, the SSH agent, or
    /// default credential helpers.
    ///
    /// # Arguments
    /// * `remote_name` - Name of the remote (e.g., "origin")
    pub fn fetch_tags(&self, remote_name: &str) -> Result<()> {
        let repo = self.repo()?;
        let mut remote = repo.find_remote(remote_name).map_err(|e| {
            NextVersionError::tag_store(format!(
                "Remote '{}' not found: {}",
                remote_name,
                e.message()
            ))
        })?;

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        remote
            .fetch(&["+refs/tags/*:refs/tags/*"], Some(&mut fetch_options), None)
            .map_err(|e| {
                NextVersionError::tag_store(format!(
                    "Fetch from '{}' failed: {}",
                    remote_name,
                    e.message()
                ))
            })?;

        Ok(())
    }
}

impl TagStore for Git2TagStore {
    fn tag_exists(&self, candidate: &str) -> bool {
        match self.lookup(candidate) {
            Ok(found) => found,
            Err(e) => {
                self.failures
                    .borrow_mut()
                    .push(BoundaryWarning::TagLookupFailed {
                        candidate: candidate.to_string(),
                        reason: e.to_string(),
                    });
                false
            }
        }
    }

    fn take_lookup_failures(&self) -> Vec<BoundaryWarning> {
        self.failures.take()
    }
}
