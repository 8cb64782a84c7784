use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{LanguageModelService, PullRequestService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub language_model: Arc<dyn LanguageModelService>,
    pub pull_request: Arc<dyn PullRequestService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        language_model: Arc<dyn LanguageModelService>,
        pull_request: Arc<dyn PullRequestService>,
    ) -> Self {
        Self {
            config,
            version_control,
            language_model,
            pull_request,
        }
    }
}
