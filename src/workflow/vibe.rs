use crate::context::AppContext;
use crate::domain::summary::VibeCheck;
use crate::error::{AppError, AppResult};
use crate::workflow::summarize::summarize_commits;

pub struct VibeOutcome {
    pub summary: String,
    pub verdict: VibeCheck,
}

/// Summarizes the most recent `count` commits of the current repository.
///
/// Outside a git work tree this is an error, so the CLI exits non-zero rather
/// than printing a notice and exiting cleanly.
pub async fn summarize_recent_commits(ctx: &AppContext, count: usize) -> AppResult<VibeOutcome> {
    if !ctx.version_control.is_repository().await {
        return Err(AppError::VersionControl(
            "not a git repository".to_string(),
        ));
    }

    let commits = ctx.version_control.recent_commits(count).await?;
    let summary = summarize_commits(ctx, &commits).await?;
    let verdict = VibeCheck::evaluate(&summary);
    tracing::debug!(?verdict, "vibe check finished");

    Ok(VibeOutcome { summary, verdict })
}

pub async fn commit_summary(ctx: &AppContext, outcome: &VibeOutcome) -> AppResult<()> {
    if outcome.verdict != VibeCheck::Passed {
        return Err(AppError::VersionControl(
            "refusing to commit a summary that failed the vibe check".to_string(),
        ));
    }
    ctx.version_control.commit_all(&outcome.summary).await
}
