use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{SummarizerService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub summarizer: Arc<dyn SummarizerService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        summarizer: Arc<dyn SummarizerService>,
    ) -> Self {
        Self {
            config,
            version_control,
            summarizer,
        }
    }
}
