use std::path::Path;

use crate::error::Result;
use crate::transcript::{self, TurnSummary};

/// Longest question excerpt shown per turn
const QUESTION_PREVIEW_CHARS: usize = 60;

/// List the council turns of a transcript
pub fn turns(input: &Path) -> Result<()> {
    let summaries = transcript::list(input)?;

    if summaries.is_empty() {
        println!("No council turns in {}", input.display());
        return Ok(());
    }

    for summary in &summaries {
        println!("{}", summary_line(summary));
    }

    Ok(())
}

fn summary_line(summary: &TurnSummary) -> String {
    let status = if summary.complete {
        "complete"
    } else {
        "in progress"
    };
    format!(
        "{:>3}. [{}] {}",
        summary.number,
        status,
        preview(&summary.question)
    )
}

/// First line of a question, shortened to a fixed number of characters
fn preview(question: &str) -> String {
    let first_line = question.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        return "(no question)".to_string();
    }

    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(QUESTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
