pub mod command;
pub mod language_model;
pub mod pull_request;
pub mod version_control;

pub use command::{CommandOutput, CommandRunner};
pub use language_model::LanguageModelService;
pub use pull_request::PullRequestService;
pub use version_control::VersionControlService;
