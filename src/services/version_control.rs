use async_trait::async_trait;

use crate::domain::BranchReport;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Name of the currently checked-out branch. Empty on a detached HEAD;
    /// that value is passed through unvalidated.
    async fn current_branch(&self) -> AppResult<String>;

    /// Collects everything that would land in a PR against `base_branch`:
    /// branch metadata, commit log, changed files and the full patch, from
    /// the merge-base to HEAD.
    async fn collect_changes(&self, base_branch: &str) -> AppResult<BranchReport>;
}
