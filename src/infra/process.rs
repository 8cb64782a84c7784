use async_trait::async_trait;
use tokio::process::Command;

use crate::error::AppResult;
use crate::services::{CommandOutput, CommandRunner};

/// Runs commands on the real system, capturing stdout and stderr. Each call
/// blocks the pipeline until the child exits; no timeout beyond the OS's.
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> AppResult<CommandOutput> {
        let output = Command::new(program).args(args).output().await?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
