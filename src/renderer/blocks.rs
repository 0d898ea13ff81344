//! Block tree for flow documents
//!
//! A flow document is an ordered list of headings, paragraphs, and tables.
//! Paragraphs hold styled runs. Sizes follow word-processor conventions:
//! run sizes in half-points, indents and spacing in twentieths of a point.

use super::canvas::Rgb;

/// A flow document ready for a target-specific writer
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDocument {
    pub blocks: Vec<Block>,
    /// Page margin on all four sides, in twips
    pub page_margin: u32,
    /// Style applied to level-1 headings
    pub heading_style: HeadingStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub font: String,
    /// Half-points
    pub size: u32,
    pub color: Rgb,
    pub spacing: Spacing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub text: String,
    pub level: u8,
    /// Horizontal rule under the heading
    pub thematic_break: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

/// A single-line border on one side of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: Rgb,
    /// Eighths of a point
    pub size: u32,
    /// Gap between border and text, in points
    pub space: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Alignment,
    pub indent_left: u32,
    pub spacing: Spacing,
    pub left_border: Option<Border>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size: Option<u32>,
    pub color: Option<Rgb>,
    pub font: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    /// Share of the table width, in percent
    pub width_pct: Option<u8>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn indent(mut self, twips: u32) -> Self {
        self.indent_left = twips;
        self
    }

    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing = Spacing { before, after };
        self
    }

    pub fn left_border(mut self, border: Border) -> Self {
        self.left_border = Some(border);
        self
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl TableCell {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            width_pct: None,
        }
    }

    pub fn width(mut self, pct: u8) -> Self {
        self.width_pct = Some(pct);
        self
    }

    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
impl FlowDocument {
    /// Plain text of every heading and paragraph, in document order.
    ///
    /// Table cells are included row by row.
    pub fn texts(&self) -> Vec<String> {
        let mut texts = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Heading(h) => texts.push(h.text.clone()),
                Block::Paragraph(p) => texts.push(p.text()),
                Block::Table(t) => {
                    for row in &t.rows {
                        texts.extend(row.cells.iter().map(TableCell::text));
                    }
                }
            }
        }
        texts
    }

    /// Every table in the document
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_builder() {
        let run = Run::new("Label").bold().size(24).color(Rgb(1, 2, 3)).font("Georgia");
        assert!(run.bold);
        assert!(!run.italic);
        assert_eq!(run.size, Some(24));
        assert_eq!(run.font.as_deref(), Some("Georgia"));
    }

    #[test]
    fn test_paragraph_text_joins_runs() {
        let paragraph = Paragraph::new()
            .run(Run::new("Chairman: "))
            .run(Run::new("x").italic());
        assert_eq!(paragraph.text(), "Chairman: x");
    }

    #[test]
    fn test_document_texts_in_order() {
        let document = FlowDocument {
            blocks: vec![
                Block::Heading(Heading {
                    text: "H".to_string(),
                    level: 1,
                    thematic_break: false,
                }),
                Block::Paragraph(Paragraph::new().run(Run::new("P"))),
                Block::Table(Table {
                    rows: vec![TableRow {
                        cells: vec![
                            TableCell::new(Paragraph::new().run(Run::new("A"))),
                            TableCell::new(Paragraph::new().run(Run::new("B"))).width(50),
                        ],
                    }],
                }),
            ],
            page_margin: 1440,
            heading_style: HeadingStyle {
                font: "Georgia".to_string(),
                size: 32,
                color: Rgb(0, 0, 0),
                spacing: Spacing::default(),
            },
        };

        assert_eq!(document.texts(), vec!["H", "P", "A", "B"]);
        assert_eq!(document.tables().count(), 1);
    }
}
