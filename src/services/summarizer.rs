use async_trait::async_trait;

use crate::domain::summary::{Summary, SummaryOptions};
use crate::error::AppResult;

#[async_trait]
pub trait SummarizerService: Send + Sync {
    /// Runs one summarization request, returning candidates best-first.
    async fn summarize(&self, prompt: &str, options: &SummaryOptions) -> AppResult<Vec<Summary>>;
}
