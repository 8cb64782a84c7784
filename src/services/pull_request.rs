use std::path::Path;

use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait PullRequestService: Send + Sync {
    /// Opens a pull request with the given title, reading the body from an
    /// already-written file. Returns the tool's stdout (usually the PR URL).
    async fn create_pull_request(
        &self,
        title: &str,
        body_file: &Path,
        base_branch: &str,
    ) -> AppResult<String>;
}
