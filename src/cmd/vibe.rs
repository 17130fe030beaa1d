use std::io::{self, BufRead, Write};

use crate::context::AppContext;
use crate::domain::summary::VibeCheck;
use crate::error::AppResult;
use crate::workflow::vibe::{commit_summary, summarize_recent_commits};

#[derive(Debug, Clone)]
pub struct VibeCommandArgs {
    pub count: usize,
    pub auto_commit: bool,
}

pub async fn run(ctx: &AppContext, args: VibeCommandArgs) -> AppResult<()> {
    let mut input = io::BufReader::new(io::stdin());
    report(ctx, args, &mut input, &mut io::stdout()).await
}

async fn report<R: BufRead, W: Write>(
    ctx: &AppContext,
    args: VibeCommandArgs,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    let outcome = summarize_recent_commits(ctx, args.count).await?;

    writeln!(out, "AI Summary:\n{}", outcome.summary)?;

    if outcome.verdict == VibeCheck::TooShort {
        writeln!(out, "Vibe check failed: Summary too short, try regenerating.")?;
        return Ok(());
    }
    writeln!(out, "Vibe check passed: {}", outcome.summary)?;

    if !args.auto_commit {
        writeln!(
            out,
            "Ready to commit manually: git commit -m '{}'",
            outcome.summary
        )?;
        return Ok(());
    }

    if confirm("Auto-commit with this summary? (y/n): ", input, out)? {
        commit_summary(ctx, &outcome).await?;
        writeln!(out, "Committed successfully!")?;
    } else {
        writeln!(out, "Auto-commit canceled.")?;
    }
    Ok(())
}

fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::workflow::testing::{FakeGit, FakeSummarizer, context};

    const LOG: &str = "a1b2c3d fix null pointer bug\ne4f5a6b add retry logic";
    const SUMMARY: &str = "Fixed a null pointer crash and added retry logic.";

    async fn transcript(
        summary: &str,
        auto_commit: bool,
        answer: &str,
    ) -> (AppResult<()>, String, Vec<String>) {
        let git = Arc::new(FakeGit::with_log(LOG));
        let ctx = context(git.clone(), Arc::new(FakeSummarizer::answering(&[summary])));
        let mut out = Vec::new();

        let result = report(
            &ctx,
            VibeCommandArgs {
                count: 10,
                auto_commit,
            },
            &mut answer.as_bytes(),
            &mut out,
        )
        .await;

        let commits = git.commits.lock().unwrap().clone();
        (result, String::from_utf8(out).unwrap(), commits)
    }

    #[tokio::test]
    async fn short_summary_stops_before_prompting() {
        let (result, shown, commits) = transcript("Fixes.", true, "y\n").await;
        assert!(result.is_ok());
        assert_eq!(
            shown,
            "AI Summary:\nFixes.\nVibe check failed: Summary too short, try regenerating.\n"
        );
        assert!(commits.is_empty());
    }

    #[tokio::test]
    async fn suggests_manual_commit_without_auto_commit() {
        let (result, shown, commits) = transcript(SUMMARY, false, "y\n").await;
        assert!(result.is_ok());
        assert_eq!(
            shown,
            format!(
                "AI Summary:\n{SUMMARY}\nVibe check passed: {SUMMARY}\n\
                 Ready to commit manually: git commit -m '{SUMMARY}'\n"
            )
        );
        assert!(commits.is_empty());
    }

    #[tokio::test]
    async fn commits_after_confirmation() {
        let (result, shown, commits) = transcript(SUMMARY, true, "Y\n").await;
        assert!(result.is_ok());
        assert_eq!(
            shown,
            format!(
                "AI Summary:\n{SUMMARY}\nVibe check passed: {SUMMARY}\n\
                 Auto-commit with this summary? (y/n): Committed successfully!\n"
            )
        );
        assert_eq!(commits, vec![SUMMARY.to_string()]);
    }

    #[tokio::test]
    async fn declining_cancels_commit() {
        let (result, shown, commits) = transcript(SUMMARY, true, "n\n").await;
        assert!(result.is_ok());
        assert!(shown.ends_with("Auto-commit with this summary? (y/n): Auto-commit canceled.\n"));
        assert!(commits.is_empty());
    }

    fn ask(answer: &str) -> (bool, String) {
        let mut out = Vec::new();
        let confirmed = confirm("Proceed? ", &mut answer.as_bytes(), &mut out).unwrap();
        (confirmed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_y_in_any_case() {
        assert_eq!(ask("y\n"), (true, "Proceed? ".to_string()));
        assert!(ask("Y\n").0);
        assert!(ask("  y  \n").0);
    }

    #[test]
    fn anything_else_cancels() {
        assert!(!ask("yes\n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("").0);
    }
}
