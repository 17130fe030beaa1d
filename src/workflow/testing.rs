use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{AppConfig, StoredConfig};
use crate::context::AppContext;
use crate::domain::summary::{Summary, SummaryOptions};
use crate::error::{AppError, AppResult};
use crate::services::{SummarizerService, VersionControlService};

/// Records every request and answers with canned summaries.
#[derive(Default)]
pub struct FakeSummarizer {
    pub responses: Vec<Summary>,
    pub calls: Mutex<Vec<(String, SummaryOptions)>>,
}

impl FakeSummarizer {
    pub fn answering(texts: &[&str]) -> Self {
        Self {
            responses: texts.iter().map(|text| Summary::new(*text)).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, SummaryOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizerService for FakeSummarizer {
    async fn summarize(&self, prompt: &str, options: &SummaryOptions) -> AppResult<Vec<Summary>> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), *options));
        Ok(self.responses.clone())
    }
}

pub struct FakeGit {
    pub repository: bool,
    pub log: String,
    pub fail_commit: bool,
    pub log_requests: Mutex<Vec<usize>>,
    pub commits: Mutex<Vec<String>>,
}

impl FakeGit {
    pub fn with_log(log: &str) -> Self {
        Self {
            repository: true,
            log: log.to_string(),
            fail_commit: false,
            log_requests: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
        }
    }

    pub fn outside_repository() -> Self {
        Self {
            repository: false,
            ..Self::with_log("")
        }
    }
}

#[async_trait]
impl VersionControlService for FakeGit {
    async fn is_repository(&self) -> bool {
        self.repository
    }

    async fn recent_commits(&self, count: usize) -> AppResult<String> {
        self.log_requests.lock().unwrap().push(count);
        Ok(self.log.clone())
    }

    async fn commit_all(&self, message: &str) -> AppResult<()> {
        if self.fail_commit {
            return Err(AppError::VersionControl("nothing to commit".to_string()));
        }
        self.commits.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

pub fn context(git: Arc<FakeGit>, summarizer: Arc<FakeSummarizer>) -> AppContext {
    let config = AppConfig::resolve(StoredConfig::default(), Path::new("."), |_| None);
    AppContext::new(config, git, summarizer)
}
