use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::domain::summary::{Summary, SummaryOptions};
use crate::error::{AppError, AppResult};
use crate::services::SummarizerService;

/// Bridges to a local summarizer program: the prompt goes in on stdin and the
/// summary comes back on stdout.
pub struct CommandSummarizer {
    command_line: String,
    working_dir: PathBuf,
}

impl CommandSummarizer {
    pub fn new(command_line: String, working_dir: PathBuf) -> Self {
        Self {
            command_line,
            working_dir,
        }
    }

    fn build_command(&self, options: &SummaryOptions) -> AppResult<Command> {
        let mut parts = self.command_line.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            AppError::Configuration("summarizer command is empty".to_string())
        })?;

        let mut cmd = Command::new(program);
        cmd.args(parts)
            .current_dir(&self.working_dir)
            .env("VIBE_COMMIT_MAX_LENGTH", options.max_length.to_string())
            .env("VIBE_COMMIT_MIN_LENGTH", options.min_length.to_string())
            .env("VIBE_COMMIT_DO_SAMPLE", options.do_sample.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        Ok(cmd)
    }
}

#[async_trait]
impl SummarizerService for CommandSummarizer {
    async fn summarize(&self, prompt: &str, options: &SummaryOptions) -> AppResult<Vec<Summary>> {
        tracing::debug!(command = %self.command_line, "spawning summarizer command");

        let mut child = self.build_command(options)?.spawn().map_err(|err| {
            AppError::Summarizer(format!(
                "failed to start `{}`: {err}",
                self.command_line
            ))
        })?;

        // Dropping stdin at the end of `feed` gives the child its EOF.
        let stdin = child.stdin.take();
        let feed = async move {
            let Some(mut stdin) = stdin else {
                return Ok::<(), std::io::Error>(());
            };
            match stdin.write_all(prompt.as_bytes()).await {
                // The child may exit without reading; its exit status decides.
                Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {
                    tracing::debug!("summarizer command closed stdin early");
                    Ok(())
                }
                result => result,
            }
        };

        // Feed stdin while draining stdout/stderr, or a chatty child fills its
        // pipes and neither side makes progress.
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        fed.map_err(|err| {
            AppError::Summarizer(format!("failed to write prompt to summarizer: {err}"))
        })?;
        let output = output.map_err(|err| AppError::Summarizer(err.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            let detail = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                output
                    .status
                    .code()
                    .map(|code| format!("exit code {code}"))
                    .unwrap_or_else(|| "killed by signal".to_string())
            };
            return Err(AppError::Summarizer(format!(
                "`{}` failed: {detail}",
                self.command_line
            )));
        }

        if !stderr.is_empty() {
            tracing::debug!(%stderr, "summarizer command wrote to stderr");
        }
        if stdout.is_empty() {
            return Err(AppError::Summarizer(
                "summarizer command produced no output".to_string(),
            ));
        }

        Ok(vec![Summary::new(stdout)])
    }
}
