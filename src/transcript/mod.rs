//! Transcript loading
//!
//! A transcript file holds either a single council turn or a whole
//! conversation as saved by the deliberation front end:
//! `{ "messages": [ { "role": "user", "content": ... }, { "role": "assistant", "stage1": ... } ] }`.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::models::{AggregateMetadata, CouncilTurn, FinalVerdict, ModelRanking, ModelResponse};

const ASSISTANT_ROLE: &str = "assistant";

/// One message of a saved conversation
#[derive(Debug, Deserialize)]
struct Message {
    role: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    stage1: Option<Vec<ModelResponse>>,
    #[serde(default)]
    stage2: Option<Vec<ModelRanking>>,
    #[serde(default)]
    stage3: Option<FinalVerdict>,
    #[serde(default)]
    metadata: Option<AggregateMetadata>,
}

#[derive(Debug, Deserialize)]
struct Conversation {
    messages: Vec<Message>,
}

/// Summary of one assistant turn in a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TurnSummary {
    /// 1-based position among assistant turns
    pub number: usize,
    pub question: String,
    /// Final verdict present, so a report can be generated
    pub complete: bool,
}

/// Load one council turn from a transcript file.
///
/// `turn` is 1-based over the assistant messages of a conversation and
/// defaults to the last one. A bare turn file only has turn 1.
pub fn load(path: &Path, turn: Option<usize>) -> Result<CouncilTurn> {
    let turns = read_turns(path)?;
    select(turns, turn)
}

/// List the assistant turns of a transcript file
pub fn list(path: &Path) -> Result<Vec<TurnSummary>> {
    let turns = read_turns(path)?;
    Ok(turns
        .iter()
        .enumerate()
        .map(|(i, turn)| TurnSummary {
            number: i + 1,
            question: turn.question.clone(),
            complete: turn.stage3.is_some(),
        })
        .collect())
}

fn read_turns(path: &Path) -> Result<Vec<CouncilTurn>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReportError::Transcript(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    parse_turns(&content)
}

/// Parse transcript text into its council turns, in conversation order
pub fn parse_turns(content: &str) -> Result<Vec<CouncilTurn>> {
    let value: Value = serde_json::from_str(content)?;

    if value.get("messages").is_some() {
        let conversation: Conversation = serde_json::from_value(value)?;
        let turns = conversation_turns(conversation.messages);
        debug!(turns = turns.len(), "parsed conversation transcript");
        Ok(turns)
    } else if value.is_object() {
        let turn: CouncilTurn = serde_json::from_value(value)?;
        Ok(vec![turn])
    } else {
        Err(ReportError::Transcript(
            "expected a council turn or a conversation object".to_string(),
        ))
    }
}

fn conversation_turns(messages: Vec<Message>) -> Vec<CouncilTurn> {
    let mut turns = Vec::new();
    let mut previous_content: Option<String> = None;

    for message in messages {
        if message.role == ASSISTANT_ROLE {
            turns.push(CouncilTurn {
                question: previous_content.take().unwrap_or_default(),
                stage1: message.stage1.unwrap_or_default(),
                stage2: message.stage2.unwrap_or_default(),
                stage3: message.stage3,
                metadata: message.metadata,
            });
        }
        previous_content = message.content;
    }

    turns
}

fn select(mut turns: Vec<CouncilTurn>, turn: Option<usize>) -> Result<CouncilTurn> {
    if turns.is_empty() {
        return Err(ReportError::Transcript(
            "transcript has no assistant turns".to_string(),
        ));
    }

    let count = turns.len();
    let index = match turn {
        None => count - 1,
        Some(n) if (1..=count).contains(&n) => n - 1,
        Some(n) => {
            return Err(ReportError::Transcript(format!(
                "turn {} out of range (transcript has {} turn{})",
                n,
                count,
                if count == 1 { "" } else { "s" }
            )))
        }
    };

    Ok(turns.swap_remove(index))
}
