use std::path::PathBuf;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::github::pr_command_line;
use crate::workflow::summary::{create_pull_request, generate_summary};

#[derive(Debug, Clone)]
pub struct SummaryCommandArgs {
    pub output_file: PathBuf,
    pub ticket: Option<String>,
}

pub async fn run_generate(ctx: &AppContext, args: SummaryCommandArgs) -> AppResult<()> {
    let outcome = generate_summary(ctx, &args.output_file, args.ticket).await?;

    println!(
        "Summary generated and saved to {}",
        outcome.output_file.display()
    );
    println!("\nRun this command to create your PR:\n");
    println!(
        "  {}",
        pr_command_line(
            &outcome.branch,
            &outcome.output_file,
            &ctx.config.base_branch
        )
    );

    Ok(())
}

pub async fn run_create(ctx: &AppContext, args: SummaryCommandArgs) -> AppResult<()> {
    let outcome = generate_summary(ctx, &args.output_file, args.ticket).await?;
    println!(
        "Summary generated and saved to {}",
        outcome.output_file.display()
    );

    println!("Creating PR...");
    let stdout = create_pull_request(ctx, &outcome).await?;

    println!("PR created successfully!");
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        println!("{stdout}");
    }

    Ok(())
}
