//! Data models module
//!
//! Defines the transcript of a council turn as it arrives from the
//! deliberation pipeline, and the report model renderers consume.

pub mod report;
pub mod turn;

pub use report::ReportModel;
pub use turn::{AggregateMetadata, CouncilTurn, FinalVerdict, ModelRanking, ModelResponse};
