mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::cmd::summary::{self, SummaryCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::gemini::GeminiClient;
use crate::infra::git::GitCli;
use crate::infra::github::GhCli;
use crate::infra::process::SystemCommandRunner;
use crate::services::CommandRunner;

#[derive(Parser)]
#[command(
    name = "pr-summary",
    author,
    version,
    about = "Generate PR summaries from git changes using Gemini AI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a PR summary from git changes and save it to a file.
    Generate(SummaryArgs),
    /// Generate the summary, save it, then create the PR with the GitHub CLI.
    Create(SummaryArgs),
}

#[derive(Args)]
struct SummaryArgs {
    /// File the generated summary is written to.
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
    /// Ticket key to reference (e.g., SIS-290); derived from the branch name when omitted.
    #[arg(short = 'j', long = "ticket")]
    ticket: Option<String>,
    /// Gemini API key; falls back to the GEMINI_API_KEY environment variable.
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let (context, command_args) = build_invocation(args)?;
            summary::run_generate(&context, command_args).await
        }
        Commands::Create(args) => {
            let (context, command_args) = build_invocation(args)?;
            summary::run_create(&context, command_args).await
        }
    }
}

fn build_invocation(args: SummaryArgs) -> AppResult<(AppContext, SummaryCommandArgs)> {
    let config = AppConfig::resolve(args.api_key)?;

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner);
    let version_control = Arc::new(GitCli::new(runner.clone()));
    let language_model = Arc::new(GeminiClient::new(
        config.api_key.clone(),
        config.model.clone(),
    ));
    let pull_request = Arc::new(GhCli::new(runner));

    let context = AppContext::new(config, version_control, language_model, pull_request);
    let command_args = SummaryCommandArgs {
        output_file: args.output,
        ticket: args.ticket,
    };

    Ok((context, command_args))
}
