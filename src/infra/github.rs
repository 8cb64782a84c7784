use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::services::{CommandRunner, PullRequestService};

/// Opens pull requests through the GitHub CLI (`gh`).
pub struct GhCli {
    runner: Arc<dyn CommandRunner>,
}

impl GhCli {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl PullRequestService for GhCli {
    async fn create_pull_request(
        &self,
        title: &str,
        body_file: &Path,
        base_branch: &str,
    ) -> AppResult<String> {
        let body_file = body_file.to_string_lossy();
        let output = self
            .runner
            .run(
                "gh",
                &[
                    "pr",
                    "create",
                    "--title",
                    title,
                    "--body-file",
                    &body_file,
                    "--base",
                    base_branch,
                ],
            )
            .await?;

        if !output.success() {
            return Err(AppError::PrCreation(output.stderr.trim().to_string()));
        }
        Ok(output.stdout)
    }
}

/// Title template applied to every PR this tool opens.
pub fn pr_title(branch: &str) -> String {
    format!("feat: {branch}")
}

/// The ready-to-run command line shown after `generate`, mirroring what
/// `create` executes.
pub fn pr_command_line(branch: &str, body_file: &Path, base_branch: &str) -> String {
    format!(
        "gh pr create --title \"feat: {branch}\" --body-file {} --base {base_branch}",
        body_file.display()
    )
}
