use std::io::{self, Read, Write};

use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::summarize::summarize_commits;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let input = read_input(io::stdin().lock())?;
    let summary = summarize_commits(ctx, &input).await?;
    write_summary(&mut io::stdout().lock(), &summary)?;
    Ok(())
}

fn read_input<R: Read>(mut reader: R) -> io::Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}

fn write_summary<W: Write>(out: &mut W, summary: &str) -> io::Result<()> {
    writeln!(out, "{summary}")?;
    out.flush()
}
