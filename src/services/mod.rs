pub mod summarizer;
pub mod version_control;

pub use summarizer::SummarizerService;
pub use version_control::{DEFAULT_COMMIT_COUNT, VersionControlService};
