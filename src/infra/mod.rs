pub mod command;
pub mod git;
pub mod huggingface;
