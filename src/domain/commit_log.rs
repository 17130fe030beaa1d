pub const PROMPT_PREAMBLE: &str =
    "Summarize these Git commits into a concise, human-readable changelog entry: ";

/// Commit text as handed to the summarizer, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitLog(String);

impl CommitLog {
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_prompt(&self) -> String {
        format!("{PROMPT_PREAMBLE}{}", self.0)
    }
}
