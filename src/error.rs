use thiserror::Error;

/// Unified error type for git-next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Tag store error: {0}")]
    TagStore(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in git-next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Create an input error with context
    pub fn input(msg: impl Into<String>) -> Self {
        NextVersionError::Input(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        NextVersionError::Version(msg.into())
    }

    /// Create a tag store error with context
    pub fn tag_store(msg: impl Into<String>) -> Self {
        NextVersionError::TagStore(msg.into())
    }

    /// Create a probe error with context
    pub fn probe(msg: impl Into<String>) -> Self {
        NextVersionError::Probe(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        NextVersionError::Output(msg.into())
    }
}
