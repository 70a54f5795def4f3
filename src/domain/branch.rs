/// Name of the only branch that receives stable releases.
pub const MAIN_BRANCH: &str = "main";

/// Represents the target branch of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_main: bool,
}

impl BranchContext {
    /// Create a new branch context.
    ///
    /// Only the exact name `main` counts as the release line: no case folding,
    /// no `master` alias.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let is_main = name == MAIN_BRANCH;

        BranchContext { name, is_main }
    }

    /// Check if this branch cuts stable releases
    pub fn is_release_branch(&self) -> bool {
        self.is_main
    }
}
