use std::io::{self, BufRead, Write};

use clap::{Args, Subcommand};

use crate::config::{StoredConfig, config_file_path};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

const MODEL_PROMPT: &str =
    "Model identifier (a summarization model, e.g., facebook/bart-large-cnn)";

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    println!("Configuring vibe-commit.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!("Secrets are stored in the local config file; protect your filesystem accordingly.");
    println!();

    apply_prompt(
        "Summarizer provider (huggingface/command)",
        &mut cfg.provider,
        false,
    )?;
    apply_prompt(MODEL_PROMPT, &mut cfg.model, false)?;
    apply_prompt("Inference endpoint", &mut cfg.endpoint, false)?;
    apply_prompt("Hugging Face token", &mut cfg.hf_token, true)?;
    apply_prompt(
        "Summarizer command (e.g., python summarize.py)",
        &mut cfg.command,
        false,
    )?;

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("Provider: {}", display_value(cfg.provider.as_deref()));
    println!("Model: {}", display_value(cfg.model.as_deref()));
    println!("Endpoint: {}", display_value(cfg.endpoint.as_deref()));
    println!("Hugging Face token: {}", mask_secret(cfg.hf_token.as_deref()));
    println!("Command: {}", display_value(cfg.command.as_deref()));

    Ok(())
}

fn apply_prompt(field: &str, target: &mut Option<String>, secret: bool) -> AppResult<()> {
    let action = prompt(
        field,
        target.as_deref(),
        secret,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;
    match action {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => *target = Some(value),
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    field: &str,
    current: Option<&str>,
    secret: bool,
    input: &mut R,
    out: &mut W,
) -> io::Result<PromptAction> {
    match (current, secret) {
        (Some(_), true) => write!(out, "{field} [****] (Enter to keep, '-' to clear): ")?,
        (Some(value), false) => write!(out, "{field} [{value}] (Enter to keep, '-' to clear): ")?,
        (None, _) => write!(out, "{field} (Enter to skip): ")?,
    }
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Ok(PromptAction::Keep)
    } else if trimmed == "-" {
        Ok(PromptAction::Clear)
    } else {
        Ok(PromptAction::Set(trimmed.to_string()))
    }
}

fn display_value(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(value: Option<&str>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let prefix: String = token.chars().take(3).collect();
            let suffix: String = token.chars().skip(token.chars().count() - 3).collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    Keep,
    Clear,
    Set(String),
}
