mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
#[cfg(test)]
mod testing;
mod workflow;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigInputs};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::discord::DiscordWebhook;
use crate::infra::file::ChangelogFileWriter;
use crate::infra::github::GitHubClient;
use crate::infra::status::TracingReporter;
use crate::services::ChangelogPublisher;

#[derive(Parser)]
#[command(
    name = "tag-changelog",
    author,
    version,
    about = "File-level changelog between the latest release tags"
)]
struct Cli {
    /// Log debug output.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the changelog and publish it to the configured targets.
    Run(RunArgs),
    /// Show the resolved configuration (secrets masked).
    Config(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    inputs: ConfigInputs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: Commands) -> AppResult<i32> {
    match command {
        Commands::Config(args) => {
            let config = AppConfig::from_inputs(args.inputs)?;
            cmd::config::run_show(&config);
            Ok(0)
        }
        Commands::Run(args) => run_changelog(args).await,
    }
}

async fn run_changelog(args: RunArgs) -> AppResult<i32> {
    let config = AppConfig::from_inputs(args.inputs)?;

    let mut publishers: Vec<Arc<dyn ChangelogPublisher>> = Vec::new();
    if let Some(url) = &config.webhook_url {
        publishers.push(Arc::new(DiscordWebhook::new(url)?));
    }
    if let Some(dir) = &config.changelog_dir {
        publishers.push(Arc::new(ChangelogFileWriter::new(
            dir.clone(),
            config.changelog_filename.clone(),
        )));
    }

    let repository = Arc::new(GitHubClient::new(
        config.api_base_url.clone(),
        config.token.clone(),
    ));
    let context = AppContext::new(config, repository, Arc::new(TracingReporter), publishers);

    let outcome = cmd::run::run(&context).await?;
    if let Some(line) = cmd::run::summary(&outcome) {
        println!("{line}");
    }

    Ok(cmd::run::exit_code(&outcome))
}
