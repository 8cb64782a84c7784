use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::BranchReport;
use crate::error::{AppError, AppResult};
use crate::services::{CommandRunner, VersionControlService};

/// Collects branch/diff information by shelling out to the git CLI. Three
/// separate queries feed the report: each answers a different question (what
/// changed, why per the commit messages, and the patch itself) and each can
/// fail independently.
pub struct GitCli {
    runner: Arc<dyn CommandRunner>,
}

impl GitCli {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn current_branch(&self) -> AppResult<String> {
        let output = self.runner.run("git", &["branch", "--show-current"]).await?;
        if !output.success() {
            return Err(AppError::VersionControl(format!(
                "git branch --show-current failed: {}",
                output.stderr.trim()
            )));
        }
        Ok(output.stdout.trim().to_string())
    }

    async fn collect_changes(&self, base_branch: &str) -> AppResult<BranchReport> {
        let branch = self.current_branch().await?;

        let merge_base = self
            .runner
            .run("git", &["merge-base", base_branch, &branch])
            .await?;
        if !merge_base.success() {
            return Err(AppError::NoCommonAncestor {
                base: base_branch.to_string(),
            });
        }
        let merge_base = merge_base.stdout.trim().to_string();
        let range = format!("{merge_base}..HEAD");

        let patch = self
            .runner
            .run("git", &["diff", "--stat", "--patch", &range])
            .await?;
        if !patch.success() {
            return Err(AppError::DiffCollection(patch.stderr.trim().to_string()));
        }

        // Log and name-status outputs are taken as-is; the patch exit code is
        // the second and last fatal checkpoint of the pipeline.
        let commits = self
            .runner
            .run("git", &["log", "--pretty=format:%h - %s%n%b", &range])
            .await?;
        let files = self
            .runner
            .run("git", &["diff", "--name-status", &range])
            .await?;

        Ok(BranchReport {
            branch,
            base_branch: base_branch.to_string(),
            merge_base,
            commits: commits.stdout,
            files: files.stdout,
            diff: patch.stdout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::services::CommandOutput;

    /// Plays back a scripted list of outputs and records every invocation.
    struct FakeRunner {
        responses: Mutex<VecDeque<CommandOutput>>,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl FakeRunner {
        fn new(responses: Vec<CommandOutput>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, program: &str, args: &[&str]) -> AppResult<CommandOutput> {
            let mut call = vec![program.to_string()];
            call.extend(args.iter().map(|arg| arg.to_string()));
            self.calls.lock().unwrap().push(call);
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected command invocation"))
        }
    }

    fn ok(stdout: &str) -> CommandOutput {
        CommandOutput {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn failed(stderr: &str) -> CommandOutput {
        CommandOutput {
            code: Some(128),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    fn scripted_happy_path() -> Vec<CommandOutput> {
        vec![
            ok("feature/SIS-42-x\n"),
            ok("abc1234\n"),
            ok("diff --git a/src/login.rs b/src/login.rs\n"),
            ok("abc1235 - add login form\n"),
            ok("M\tsrc/login.rs\n"),
        ]
    }

    #[tokio::test]
    async fn assembles_report_from_three_git_views() {
        let runner = FakeRunner::new(scripted_happy_path());
        let git = GitCli::new(runner.clone());

        let report = git.collect_changes("master").await.unwrap();

        assert_eq!(report.branch, "feature/SIS-42-x");
        assert_eq!(report.base_branch, "master");
        assert_eq!(report.merge_base, "abc1234");
        assert_eq!(report.commits, "abc1235 - add login form\n");
        assert_eq!(report.files, "M\tsrc/login.rs\n");
        assert!(report.diff.starts_with("diff --git"));

        let calls = runner.calls();
        assert_eq!(
            calls[1],
            vec!["git", "merge-base", "master", "feature/SIS-42-x"]
        );
        assert_eq!(
            calls[2],
            vec!["git", "diff", "--stat", "--patch", "abc1234..HEAD"]
        );
        assert_eq!(
            calls[3],
            vec!["git", "log", "--pretty=format:%h - %s%n%b", "abc1234..HEAD"]
        );
        assert_eq!(
            calls[4],
            vec!["git", "diff", "--name-status", "abc1234..HEAD"]
        );
    }

    #[tokio::test]
    async fn one_commit_one_file_lands_in_files_changed_section() {
        let runner = FakeRunner::new(scripted_happy_path());
        let git = GitCli::new(runner);

        let rendered = git.collect_changes("master").await.unwrap().render();

        let files_section = rendered
            .split("Files Changed:")
            .nth(1)
            .unwrap()
            .split("Detailed Changes:")
            .next()
            .unwrap();
        assert_eq!(files_section.trim(), "M\tsrc/login.rs");
    }

    #[tokio::test]
    async fn missing_ancestor_stops_before_any_diff_call() {
        let runner = FakeRunner::new(vec![
            ok("orphan-branch\n"),
            failed("fatal: no merge base found"),
        ]);
        let git = GitCli::new(runner.clone());

        let error = git.collect_changes("master").await.unwrap_err();

        assert!(matches!(
            error,
            AppError::NoCommonAncestor { ref base } if base == "master"
        ));
        assert_eq!(runner.calls().len(), 2);
    }

    #[tokio::test]
    async fn patch_failure_is_fatal() {
        let runner = FakeRunner::new(vec![
            ok("feature/SIS-42-x\n"),
            ok("abc1234\n"),
            failed("fatal: bad revision"),
        ]);
        let git = GitCli::new(runner.clone());

        let error = git.collect_changes("master").await.unwrap_err();

        assert!(matches!(error, AppError::DiffCollection(_)));
        assert_eq!(runner.calls().len(), 3);
    }

    #[tokio::test]
    async fn current_branch_failure_reports_stderr() {
        let runner = FakeRunner::new(vec![failed("fatal: not a git repository")]);
        let git = GitCli::new(runner);

        let error = git.current_branch().await.unwrap_err();

        assert!(error.to_string().contains("not a git repository"));
    }

    #[tokio::test]
    async fn unchanged_state_yields_byte_identical_reports() {
        let first = GitCli::new(FakeRunner::new(scripted_happy_path()))
            .collect_changes("master")
            .await
            .unwrap();
        let second = GitCli::new(FakeRunner::new(scripted_happy_path()))
            .collect_changes("master")
            .await
            .unwrap();

        assert_eq!(first.render(), second.render());
    }
}
