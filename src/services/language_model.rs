use async_trait::async_trait;

use crate::domain::BranchReport;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Produces the PR summary text for a branch report. The ticket key, when
    /// present, becomes a tracker link inside the generated summary.
    async fn summarize(&self, report: &BranchReport, ticket: Option<&str>) -> AppResult<String>;
}
