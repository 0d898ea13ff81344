use chrono::{DateTime, Local};
use tracing::{debug, warn};

use super::turn::{display_name, AggregateMetadata, CouncilTurn};
use crate::error::{ReportError, Result};
use crate::markdown;

/// Renderer-agnostic view of one completed council turn
#[derive(Debug, Clone)]
pub struct ReportModel {
    /// Verbatim question
    pub question: String,
    /// When the report was requested
    pub generated_at: DateTime<Local>,
    /// Stage 1 entries in display order
    pub responses: Vec<ResponseEntry>,
    /// Stage 2 entries in evaluation order
    pub evaluations: Vec<EvaluationEntry>,
    /// Aggregate standings in their original order (empty when absent)
    pub standings: Vec<StandingEntry>,
    /// Stage 3 verdict
    pub verdict: VerdictEntry,
}

/// A councillor's response
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntry {
    /// 1-based councillor number
    pub ordinal: usize,
    pub display_name: String,
    /// Raw markdown body
    pub body: String,
}

/// An evaluator's ranking with labels resolved to display names
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationEntry {
    pub display_name: String,
    pub ranking: Vec<String>,
}

/// One row of the aggregate standings
#[derive(Debug, Clone, PartialEq)]
pub struct StandingEntry {
    /// 1-based position in the standings
    pub position: usize,
    pub display_name: String,
    pub average_rank: f64,
    pub rankings_count: u32,
}

/// The chairman's verdict
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictEntry {
    pub display_name: String,
    pub body: String,
}

impl ResponseEntry {
    /// Label shown above the response, e.g. `Councillor 1: gpt-5.1`
    pub fn label(&self) -> String {
        format!("Councillor {}: {}", self.ordinal, self.display_name)
    }

    /// Body with markdown syntax removed
    pub fn plain_text(&self) -> String {
        markdown::normalize(&self.body)
    }
}

impl EvaluationEntry {
    pub fn label(&self) -> String {
        format!("Evaluator: {}", self.display_name)
    }
}

impl StandingEntry {
    /// Average rank rounded to two decimals
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average_rank)
    }
}

impl VerdictEntry {
    pub fn label(&self) -> String {
        format!("Chairman: {}", self.display_name)
    }

    pub fn plain_text(&self) -> String {
        markdown::normalize(&self.body)
    }
}

impl ReportModel {
    /// Build a report model stamped with the current local time
    pub fn build(turn: &CouncilTurn) -> Result<Self> {
        Self::build_at(turn, Local::now())
    }

    /// Build a report model with an explicit generation timestamp
    pub fn build_at(turn: &CouncilTurn, generated_at: DateTime<Local>) -> Result<Self> {
        let verdict = turn.stage3.as_ref().ok_or_else(|| {
            ReportError::MalformedTurn(
                "stage3 is missing; the deliberation has not completed".to_string(),
            )
        })?;
        require_identifier(&verdict.model, "stage3")?;

        let responses = turn
            .stage1
            .iter()
            .enumerate()
            .map(|(index, resp)| {
                require_identifier(&resp.model, &format!("stage1[{}]", index))?;
                Ok(ResponseEntry {
                    ordinal: index + 1,
                    display_name: display_name(&resp.model).to_string(),
                    body: resp.response.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let metadata = turn.metadata.as_ref();

        let evaluations = turn
            .stage2
            .iter()
            .enumerate()
            .map(|(index, rank)| {
                require_identifier(&rank.model, &format!("stage2[{}]", index))?;
                Ok(EvaluationEntry {
                    display_name: display_name(&rank.model).to_string(),
                    ranking: rank
                        .parsed_ranking
                        .iter()
                        .map(|label| resolve_label(label, metadata))
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let standings = metadata
            .map(|m| m.aggregate_rankings.as_slice())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, agg)| {
                require_identifier(&agg.model, &format!("aggregate_rankings[{}]", index))?;
                if !agg.average_rank.is_finite() {
                    return Err(ReportError::MalformedTurn(format!(
                        "aggregate_rankings[{}] has a non-finite average rank",
                        index
                    )));
                }
                Ok(StandingEntry {
                    position: index + 1,
                    display_name: display_name(&agg.model).to_string(),
                    average_rank: agg.average_rank,
                    rankings_count: agg.rankings_count,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            responses = responses.len(),
            evaluations = evaluations.len(),
            standings = standings.len(),
            "built report model"
        );

        Ok(Self {
            question: turn.question.clone(),
            generated_at,
            responses,
            evaluations,
            standings,
            verdict: VerdictEntry {
                display_name: display_name(&verdict.model).to_string(),
                body: verdict.response.clone(),
            },
        })
    }

    /// Whether the aggregate standings section should be rendered
    pub fn has_standings(&self) -> bool {
        !self.standings.is_empty()
    }

    /// Human-readable generation date, e.g. `Friday, October 16, 2026 at 02:30 PM`
    pub fn generated_display(&self) -> String {
        self.generated_at
            .format("%A, %B %-d, %Y at %I:%M %p")
            .to_string()
    }
}

fn require_identifier(identifier: &str, location: &str) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(ReportError::MalformedTurn(format!(
            "{} has an empty model identifier",
            location
        )));
    }
    Ok(())
}

/// Resolve an anonymized label to a display name, falling back to the raw label
fn resolve_label(label: &str, metadata: Option<&AggregateMetadata>) -> String {
    match metadata.and_then(|m| m.label_to_model.get(label)) {
        Some(identifier) => display_name(identifier).to_string(),
        None => {
            warn!(label, "ranking label has no model mapping");
            label.to_string()
        }
    }
}
