use std::fs;
use std::path::{Path, PathBuf};

use crate::context::AppContext;
use crate::domain::extract_ticket;
use crate::error::{AppError, AppResult};
use crate::infra::github::pr_title;

#[derive(Debug)]
pub struct SummaryOutcome {
    pub branch: String,
    pub ticket: Option<String>,
    pub output_file: PathBuf,
}

/// Collect changes, summarize them and persist the result. The output file is
/// written only after generation succeeds, so failed runs never leave a
/// partial or clobbered file behind.
pub async fn generate_summary(
    ctx: &AppContext,
    output_file: &Path,
    ticket_override: Option<String>,
) -> AppResult<SummaryOutcome> {
    let report = ctx
        .version_control
        .collect_changes(&ctx.config.base_branch)
        .await?;
    if report.is_empty() {
        return Err(AppError::EmptyChangeSet);
    }

    let ticket = ticket_override.or_else(|| extract_ticket(&report.branch));

    let summary = ctx
        .language_model
        .summarize(&report, ticket.as_deref())
        .await?;

    fs::write(output_file, &summary)?;

    Ok(SummaryOutcome {
        branch: report.branch,
        ticket,
        output_file: output_file.to_path_buf(),
    })
}

/// Open a PR whose body is the file written by `generate_summary`. Returns the
/// PR tool's stdout. The summary file stays in place whether this succeeds or
/// fails.
pub async fn create_pull_request(ctx: &AppContext, outcome: &SummaryOutcome) -> AppResult<String> {
    ctx.pull_request
        .create_pull_request(
            &pr_title(&outcome.branch),
            &outcome.output_file,
            &ctx.config.base_branch,
        )
        .await
}
