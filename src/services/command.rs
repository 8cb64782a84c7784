use async_trait::async_trait;

use crate::error::AppResult;

/// Captured result of one external command invocation. The exit code is the
/// sole failure signal consumed; stderr is kept for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Narrow seam over subprocess execution so git and gh callers can be tested
/// against a recording fake instead of real external processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> AppResult<CommandOutput>;
}
