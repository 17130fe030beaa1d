use crate::context::AppContext;
use crate::domain::commit_log::CommitLog;
use crate::domain::summary::SummaryOptions;
use crate::error::{AppError, AppResult};

/// Sends one changelog request for `raw` and returns the top candidate's text.
///
/// Empty input is not short-circuited; the bare template is still sent.
pub async fn summarize_commits(ctx: &AppContext, raw: &str) -> AppResult<String> {
    let log = CommitLog::from_raw(raw);
    let prompt = log.to_prompt();
    tracing::debug!(
        model = %ctx.config.model,
        commit_chars = log.as_str().len(),
        empty = log.is_empty(),
        "summarizing commits"
    );

    let summaries = ctx
        .summarizer
        .summarize(&prompt, &SummaryOptions::CHANGELOG)
        .await?;

    summaries
        .into_iter()
        .next()
        .map(|summary| summary.summary_text)
        .ok_or_else(|| AppError::Summarizer("summarizer returned no results".to_string()))
}
