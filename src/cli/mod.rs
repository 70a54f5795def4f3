//! Entry points shared by the binary and integration tests

pub mod orchestration;

pub use orchestration::{run_version_workflow, VersionInputs, VersionOutcome};
