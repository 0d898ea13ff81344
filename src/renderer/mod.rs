//! Report renderers
//!
//! Two targets share one report model: a paginated PDF drawn on a
//! fixed-size page canvas, and a flow document handed to a word processor
//! as DOCX.

pub mod blocks;
pub mod canvas;
pub mod docx;
pub mod flow;
pub mod metrics;
pub mod package;
pub mod paginated;
pub mod palette;
pub mod pdf;

use clap::ValueEnum;

pub use flow::FlowRenderer;
pub use paginated::PaginatedRenderer;

/// Output target selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Paginated PDF
    Pdf,
    /// Word-processor document
    Docx,
}

impl Format {
    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Format::Pdf => "pdf",
            Format::Docx => "docx",
        }
    }
}
