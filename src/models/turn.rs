use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ============================================================================
// Transcript Models
// ============================================================================

/// One question plus its three-stage deliberation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouncilTurn {
    /// The question put to the council
    #[serde(default)]
    pub question: String,
    /// Independent first-pass responses, in display order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stage1: Vec<ModelResponse>,
    /// Peer rankings of the anonymized responses
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stage2: Vec<ModelRanking>,
    /// Synthesized final verdict (absent while deliberation is running)
    #[serde(default)]
    pub stage3: Option<FinalVerdict>,
    /// Label mapping and cross-evaluator standings
    #[serde(default)]
    pub metadata: Option<AggregateMetadata>,
}

/// A single councillor's markdown response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Model identifier, `<provider>/<model-name>`
    pub model: String,
    /// Markdown response text
    pub response: String,
}

/// An evaluator's ranking of anonymized labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRanking {
    pub model: String,
    /// Labels best-first, e.g. `["Response B", "Response A"]`
    #[serde(default)]
    pub parsed_ranking: Vec<String>,
}

/// The chairman's synthesized answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalVerdict {
    pub model: String,
    pub response: String,
}

/// Metadata produced alongside stage 2
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetadata {
    #[serde(default)]
    pub label_to_model: HashMap<String, String>,
    /// Final standings, already ordered
    #[serde(default)]
    pub aggregate_rankings: Vec<AggregateRanking>,
}

/// One model's position in the aggregate standings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRanking {
    pub model: String,
    pub average_rank: f64,
    pub rankings_count: u32,
}

/// Treat an explicit `null` list as empty, as the front end writes
/// `null` for stages that have not run yet.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Derive the display name of a model identifier.
///
/// Everything after the first `/`; identifiers without a provider prefix
/// are returned unchanged.
pub fn display_name(identifier: &str) -> &str {
    match identifier.split_once('/') {
        Some((_, name)) if !name.is_empty() => name,
        _ => identifier,
    }
}
