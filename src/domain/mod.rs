pub mod commit_log;
pub mod summary;
