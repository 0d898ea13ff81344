//! Flow (word-processor style) renderer
//!
//! Builds a block tree for a report. Page breaking is left to whatever
//! application opens the document; this renderer only decides block order,
//! nesting, and styling.

use tracing::info;

use super::blocks::{
    Alignment, Block, Border, FlowDocument, Heading, HeadingStyle, Paragraph, Run, Spacing, Table,
    TableCell, TableRow,
};
use super::docx;
use super::palette;
use crate::config::Branding;
use crate::error::Result;
use crate::models::ReportModel;

const FONT: &str = "Georgia";
const RULE: &str = "═══════════════════════════════════════";
const CROWN: &str = "👑 ";

/// Header cells of the standings table with their width share
const STANDINGS_COLUMNS: [(&str, u8); 4] = [
    ("Rank", 15),
    ("Model", 45),
    ("Average Rank", 25),
    ("Votes", 15),
];

/// Renders reports as styled flow documents
pub struct FlowRenderer<'a> {
    branding: &'a Branding,
}

impl<'a> FlowRenderer<'a> {
    pub fn new(branding: &'a Branding) -> Self {
        Self { branding }
    }

    /// Render a report to DOCX bytes
    pub fn render(&self, model: &ReportModel) -> Result<Vec<u8>> {
        let document = self.build(model);
        let bytes = docx::write(&document)?;
        info!(
            blocks = document.blocks.len(),
            bytes = bytes.len(),
            "flow report rendered"
        );
        Ok(bytes)
    }

    /// Build the block tree for a report
    pub fn build(&self, model: &ReportModel) -> FlowDocument {
        let mut blocks = Vec::new();

        self.title_block(model, &mut blocks);
        self.inquiry(model, &mut blocks);
        self.deliberations(model, &mut blocks);
        self.evaluations(model, &mut blocks);
        self.verdict(model, &mut blocks);
        self.closing(&mut blocks);

        FlowDocument {
            blocks,
            page_margin: 1440,
            heading_style: HeadingStyle {
                font: FONT.to_string(),
                size: 32,
                color: palette::GOLD_DARK,
                spacing: Spacing {
                    before: 400,
                    after: 200,
                },
            },
        }
    }

    fn title_block(&self, model: &ReportModel, blocks: &mut Vec<Block>) {
        blocks.push(Block::Paragraph(
            Paragraph::new()
                .run(
                    Run::new(&self.branding.title)
                        .bold()
                        .size(48)
                        .color(palette::GOLD_DARK)
                        .font(FONT),
                )
                .align(Alignment::Center)
                .spacing(0, 200),
        ));
        blocks.push(Block::Paragraph(
            Paragraph::new()
                .run(
                    Run::new(&self.branding.subtitle)
                        .italic()
                        .size(28)
                        .color(palette::TEXT_MUTED)
                        .font(FONT),
                )
                .align(Alignment::Center)
                .spacing(0, 200),
        ));
        blocks.push(Block::Paragraph(rule().spacing(0, 200)));
        blocks.push(Block::Paragraph(
            Paragraph::new()
                .run(
                    Run::new(format!("Generated: {}", model.generated_display()))
                        .size(20)
                        .color(palette::TEXT_MUTED)
                        .font(FONT),
                )
                .align(Alignment::Center)
                .spacing(0, 400),
        ));
    }

    fn inquiry(&self, model: &ReportModel, blocks: &mut Vec<Block>) {
        blocks.push(heading("THE INQUIRY", 1, true));
        blocks.push(Block::Paragraph(
            Paragraph::new()
                .run(Run::new(&model.question).size(24).font(FONT))
                .spacing(0, 400)
                .left_border(Border {
                    color: palette::GOLD_ACCENT,
                    size: 12,
                    space: 15,
                })
                .indent(400),
        ));
    }

    fn deliberations(&self, model: &ReportModel, blocks: &mut Vec<Block>) {
        blocks.push(heading("STAGE I: INDIVIDUAL DELIBERATIONS", 1, false));

        for response in &model.responses {
            blocks.push(Block::Paragraph(
                label_paragraph(Run::new(response.label()).bold()).spacing(300, 100),
            ));
            for chunk in chunks(&response.plain_text()) {
                blocks.push(Block::Paragraph(
                    Paragraph::new()
                        .run(Run::new(chunk).size(22).font(FONT))
                        .spacing(0, 120)
                        .indent(200),
                ));
            }
        }
    }

    fn evaluations(&self, model: &ReportModel, blocks: &mut Vec<Block>) {
        blocks.push(heading("STAGE II: PEER EVALUATIONS & RANKINGS", 1, false));

        for evaluation in &model.evaluations {
            blocks.push(Block::Paragraph(
                label_paragraph(Run::new(evaluation.label()).bold()).spacing(200, 100),
            ));
            for (i, name) in evaluation.ranking.iter().enumerate() {
                blocks.push(Block::Paragraph(
                    Paragraph::new()
                        .run(Run::new(format!("{}. {}", i + 1, name)).size(22).font(FONT))
                        .indent(400)
                        .spacing(0, 50),
                ));
            }
        }

        if model.has_standings() {
            blocks.push(heading("AGGREGATE STANDINGS (Street Cred)", 2, false));
            blocks.push(Block::Table(standings_table(model)));
        }
    }

    fn verdict(&self, model: &ReportModel, blocks: &mut Vec<Block>) {
        blocks.push(heading("STAGE III: THE COUNCIL'S FINAL VERDICT", 1, false));

        blocks.push(Block::Paragraph(
            Paragraph::new()
                .run(Run::new(CROWN).size(24))
                .run(
                    Run::new(model.verdict.label())
                        .italic()
                        .size(24)
                        .color(palette::GOLD_ACCENT)
                        .font(FONT),
                )
                .spacing(0, 200),
        ));

        for chunk in chunks(&model.verdict.plain_text()) {
            blocks.push(Block::Paragraph(
                Paragraph::new()
                    .run(Run::new(chunk).size(24).font(FONT))
                    .spacing(0, 150)
                    .indent(200),
            ));
        }
    }

    fn closing(&self, blocks: &mut Vec<Block>) {
        blocks.push(Block::Paragraph(rule().spacing(600, 200)));
        blocks.push(Block::Paragraph(
            Paragraph::new()
                .run(
                    Run::new(&self.branding.tagline)
                        .italic()
                        .size(18)
                        .color(palette::TEXT_MUTED)
                        .font(FONT),
                )
                .align(Alignment::Center),
        ));
    }
}

fn heading(text: &str, level: u8, thematic_break: bool) -> Block {
    Block::Heading(Heading {
        text: text.to_string(),
        level,
        thematic_break,
    })
}

fn rule() -> Paragraph {
    Paragraph::new()
        .run(Run::new(RULE).size(24).color(palette::GOLD_ACCENT))
        .align(Alignment::Center)
}

/// Gold label line above an entry
fn label_paragraph(run: Run) -> Paragraph {
    Paragraph::new().run(run.size(24).color(palette::GOLD_ACCENT).font(FONT))
}

/// Split normalized text into trimmed, non-empty blank-line-delimited chunks
fn chunks(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

fn standings_table(model: &ReportModel) -> Table {
    let header = TableRow {
        cells: STANDINGS_COLUMNS
            .iter()
            .map(|(title, width)| {
                TableCell::new(Paragraph::new().run(Run::new(*title).bold().size(22))).width(*width)
            })
            .collect(),
    };

    let rows = model.standings.iter().map(|standing| TableRow {
        cells: vec![
            TableCell::new(cell(&format!("#{}", standing.position))),
            TableCell::new(cell(&standing.display_name)),
            TableCell::new(cell(&standing.average_display())),
            TableCell::new(cell(&standing.rankings_count.to_string())),
        ],
    });

    Table {
        rows: std::iter::once(header).chain(rows).collect(),
    }
}

fn cell(text: &str) -> Paragraph {
    Paragraph::new().run(Run::new(text).size(22))
}
