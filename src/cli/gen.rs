use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::{self, Config};
use crate::display;
use crate::error::Result;
use crate::models::ReportModel;
use crate::renderer::{FlowRenderer, Format, PaginatedRenderer};
use crate::state::GenerationGate;
use crate::transcript;

/// Generate a council report.
///
/// The gate is owned by the caller and outlives this call; a second
/// generation through the same gate is refused while this one holds it.
pub fn run(
    gate: &GenerationGate,
    input: PathBuf,
    format: Format,
    turn: Option<usize>,
    config_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    generate(gate, &input, format, turn, config_path, output_dir, dry_run).inspect_err(|e| {
        error!(error = %e, input = %input.display(), "report generation failed");
    })
}

fn generate(
    gate: &GenerationGate,
    input: &Path,
    format: Format,
    turn: Option<usize>,
    config_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let config = config::resolve(config_path)?;
    let turn = transcript::load(input, turn)?;

    let _guard = gate.acquire()?;
    info!(?format, dry_run, state = ?gate.state(), "generating report");

    let model = ReportModel::build(&turn)?;

    if dry_run {
        let document = FlowRenderer::new(&config.branding).build(&model);
        display::print_markdown(&display::to_markdown(&document));
        return Ok(());
    }

    let bytes = render(&config, &model, format)?;

    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
    let output_path = save(&output_dir, format, &bytes)?;

    info!(path = %output_path.display(), bytes = bytes.len(), "report saved");
    println!("Report written to: {}", output_path.display());

    Ok(())
}

/// Run exactly one renderer for the requested format
fn render(config: &Config, model: &ReportModel, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Pdf => PaginatedRenderer::new(&config.layout, &config.branding).render(model),
        Format::Docx => FlowRenderer::new(&config.branding).render(model),
    }
}

/// Write a rendered buffer as `report-<epoch-ms>.<ext>`
fn save(output_dir: &Path, format: Format, bytes: &[u8]) -> Result<PathBuf> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let filename = output_filename(Utc::now().timestamp_millis(), format);
    let output_path = output_dir.join(filename);
    fs::write(&output_path, bytes)?;

    Ok(output_path)
}

fn output_filename(epoch_ms: i64, format: Format) -> String {
    format!("report-{}.{}", epoch_ms, format.extension())
}
