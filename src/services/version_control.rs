use async_trait::async_trait;

use crate::error::AppResult;

pub const DEFAULT_COMMIT_COUNT: usize = 10;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn is_repository(&self) -> bool;
    /// One line per commit, newest first, formatted as `<short hash> <subject>`.
    async fn recent_commits(&self, count: usize) -> AppResult<String>;
    async fn commit_all(&self, message: &str) -> AppResult<()>;
}
