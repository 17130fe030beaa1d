use serde::{Deserialize, Serialize};

/// Must be served for the summarization task by the configured endpoint;
/// override with a summarization model such as `facebook/bart-large-cnn`.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Decoding controls sent with every summarization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryOptions {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl SummaryOptions {
    pub const CHANGELOG: SummaryOptions = SummaryOptions {
        max_length: 200,
        min_length: 50,
        do_sample: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary_text: String,
}

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            summary_text: text.into(),
        }
    }
}

const VIBE_MIN_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibeCheck {
    Passed,
    TooShort,
}

impl VibeCheck {
    pub fn evaluate(summary: &str) -> Self {
        if summary.chars().count() < VIBE_MIN_CHARS {
            VibeCheck::TooShort
        } else {
            VibeCheck::Passed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changelog_options_are_fixed() {
        assert_eq!(SummaryOptions::CHANGELOG.max_length, 200);
        assert_eq!(SummaryOptions::CHANGELOG.min_length, 50);
        assert!(!SummaryOptions::CHANGELOG.do_sample);
    }

    #[test]
    fn vibe_check_counts_characters() {
        assert_eq!(VibeCheck::evaluate("too short"), VibeCheck::TooShort);
        assert_eq!(
            VibeCheck::evaluate("Added retry logic and fixed a crash"),
            VibeCheck::Passed
        );
        // 19 multibyte characters stay short even though it is > 20 bytes.
        assert_eq!(
            VibeCheck::evaluate(&"é".repeat(19)),
            VibeCheck::TooShort
        );
        assert_eq!(VibeCheck::evaluate(&"x".repeat(20)), VibeCheck::Passed);
    }

    #[test]
    fn parses_summary_entries() {
        let entries: Vec<Summary> =
            serde_json::from_str(r#"[{"summary_text":"Fixed a crash."}]"#).unwrap();
        assert_eq!(entries, vec![Summary::new("Fixed a crash.")]);
    }
}
