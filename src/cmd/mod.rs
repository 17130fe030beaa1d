pub mod config;
pub mod summarize;
pub mod vibe;
