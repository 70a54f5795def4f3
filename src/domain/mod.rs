//! Domain logic - pure version rules independent of git operations

pub mod branch;
pub mod prerelease;
pub mod version;

pub use branch::{BranchContext, MAIN_BRANCH};
pub use prerelease::{PreReleaseVersion, PRERELEASE_CHANNEL};
pub use version::{UpgradeKind, Version};
