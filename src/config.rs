use std::env;

use crate::error::{AppError, AppResult};

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_OUTPUT_FILE: &str = "pr_summary.md";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const BASE_BRANCH: &str = "master";

/// Resolved per-invocation configuration. The environment is consulted once,
/// here; everything downstream receives plain values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub base_branch: String,
}

impl AppConfig {
    /// An explicit `--api-key` wins over the environment variable. Without
    /// either, the invocation fails before any git call is made.
    pub fn resolve(api_key_override: Option<String>) -> AppResult<Self> {
        let api_key = match api_key_override {
            Some(key) => key,
            None => env::var(API_KEY_ENV_VAR).map_err(|_| {
                AppError::MissingCredential(format!(
                    "{API_KEY_ENV_VAR} not found. Please provide it as an argument or set it \
                     as an environment variable. ie: export {API_KEY_ENV_VAR}='XXXXXXX'"
                ))
            })?,
        };

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_branch: BASE_BRANCH.to_string(),
        })
    }
}
