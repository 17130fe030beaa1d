mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::summarize;
use crate::cmd::vibe::{self, VibeCommandArgs};
use crate::config::{AppConfig, SummarizerProvider};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::command::CommandSummarizer;
use crate::infra::git::GitCli;
use crate::infra::huggingface::HuggingFaceClient;
use crate::services::{DEFAULT_COMMIT_COUNT, SummarizerService};

#[derive(Parser)]
#[command(
    name = "vibe-commit",
    author,
    version,
    about = "Summarize Git commits into a changelog entry"
)]
struct Cli {
    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize commit text read from stdin (the default).
    Summarize,
    /// Summarize recent commits of this repository and optionally commit the result.
    Vibe(VibeArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct VibeArgs {
    /// Number of recent commits to summarize.
    #[arg(short = 'n', long, default_value_t = DEFAULT_COMMIT_COUNT)]
    count: usize,
    /// Offer to commit all changes using the generated summary.
    #[arg(short, long)]
    auto_commit: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Summarize) {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Summarize => {
            let context = build_context()?;
            summarize::run(&context).await
        }
        Commands::Vibe(args) => {
            let context = build_context()?;
            vibe::run(
                &context,
                VibeCommandArgs {
                    count: args.count,
                    auto_commit: args.auto_commit,
                },
            )
            .await
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_context() -> AppResult<AppContext> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let summarizer: Arc<dyn SummarizerService> = match &config.provider {
        SummarizerProvider::HuggingFace => Arc::new(hugging_face(&config)),
        SummarizerProvider::Command => {
            let command = config.command.clone().ok_or_else(|| {
                AppError::Configuration(
                    "command provider selected but no summarizer command configured".to_string(),
                )
            })?;
            Arc::new(CommandSummarizer::new(command, config.workspace_root.clone()))
        }
        SummarizerProvider::Custom(provider) => {
            tracing::warn!(
                %provider,
                "unknown summarizer provider, falling back to Hugging Face"
            );
            Arc::new(hugging_face(&config))
        }
    };

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));

    Ok(AppContext::new(config, git, summarizer))
}

fn hugging_face(config: &AppConfig) -> HuggingFaceClient {
    if config.hf_token.is_none() {
        tracing::warn!("HF_TOKEN not configured; sending unauthenticated inference requests");
    }
    HuggingFaceClient::new(
        config.endpoint.clone(),
        config.model.clone(),
        config.hf_token.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_summarizes_stdin() {
        let cli = Cli::try_parse_from(["vibe-commit"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_vibe_options() {
        let cli = Cli::try_parse_from(["vibe-commit", "-v", "vibe", "-n", "5", "--auto-commit"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Vibe(args)) => {
                assert_eq!(args.count, 5);
                assert!(args.auto_commit);
            }
            _ => panic!("expected vibe command"),
        }
    }

    #[test]
    fn vibe_defaults_to_ten_commits() {
        let cli = Cli::try_parse_from(["vibe-commit", "vibe"]).unwrap();
        match cli.command {
            Some(Commands::Vibe(args)) => {
                assert_eq!(args.count, 10);
                assert!(!args.auto_commit);
            }
            _ => panic!("expected vibe command"),
        }
    }
}
