/// Everything a reviewer (or the language model) needs to understand one
/// branch's changes relative to its base. Built once per invocation from the
/// raw output of three git queries; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchReport {
    pub branch: String,
    pub base_branch: String,
    pub merge_base: String,
    pub commits: String,
    pub files: String,
    pub diff: String,
}

impl BranchReport {
    /// True when the branch tip and the merge-base describe the same tree,
    /// i.e. there is nothing worth summarizing.
    pub fn is_empty(&self) -> bool {
        self.commits.trim().is_empty()
            && self.files.trim().is_empty()
            && self.diff.trim().is_empty()
    }

    /// Renders the report as one text block with fixed section headers.
    /// Fields are included verbatim: no escaping, no truncation.
    pub fn render(&self) -> String {
        format!(
            "Branch Information:\n\
             - Current branch: {branch}\n\
             - Target branch: {base}\n\
             - Changes from: {merge_base}\n\
             \n\
             Commits in this PR:\n\
             {commits}\n\
             \n\
             Files Changed:\n\
             {files}\n\
             \n\
             Detailed Changes:\n\
             {diff}\n",
            branch = self.branch,
            base = self.base_branch,
            merge_base = self.merge_base,
            commits = self.commits,
            files = self.files,
            diff = self.diff,
        )
    }
}
