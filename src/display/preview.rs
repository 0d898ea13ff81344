//! Markdown preview of a flow document

use crate::renderer::blocks::{Block, FlowDocument, Paragraph, Run, Table, TableCell};

/// Render a flow document as terminal-friendly markdown
pub fn to_markdown(document: &FlowDocument) -> String {
    let mut sections = Vec::new();

    for block in &document.blocks {
        match block {
            Block::Heading(heading) => {
                let hashes = "#".repeat(usize::from(heading.level.clamp(1, 6)));
                sections.push(format!("{} {}", hashes, heading.text));
            }
            Block::Paragraph(paragraph) => {
                let text = paragraph_markdown(paragraph);
                if !text.trim().is_empty() {
                    sections.push(text);
                }
            }
            Block::Table(table) => sections.push(table_markdown(table)),
        }
    }

    sections.join("\n\n")
}

fn paragraph_markdown(paragraph: &Paragraph) -> String {
    let text: String = paragraph.runs.iter().map(run_markdown).collect();

    if paragraph.left_border.is_some() {
        text.lines()
            .map(|line| format!("> {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        text
    }
}

fn run_markdown(run: &Run) -> String {
    let text = run.text.as_str();
    let trimmed = text.trim();
    if trimmed.is_empty() || (!run.bold && !run.italic) {
        return text.to_string();
    }

    let marker = match (run.bold, run.italic) {
        (true, true) => "***",
        (true, false) => "**",
        _ => "*",
    };
    // Markers must hug the text, so move surrounding whitespace outside
    let leading = &text[..text.len() - text.trim_start().len()];
    let trailing = &text[text.trim_end().len()..];
    format!("{}{}{}{}{}", leading, marker, trimmed, marker, trailing)
}

fn table_markdown(table: &Table) -> String {
    let mut lines = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        let cells: Vec<String> = row.cells.iter().map(cell_text).collect();
        lines.push(format!("|{}|", cells.join("|")));
        if i == 0 {
            lines.push(format!("|{}|", vec![":-"; cells.len()].join("|")));
        }
    }

    lines.join("\n")
}

fn cell_text(cell: &TableCell) -> String {
    cell.text().replace('|', "/").replace('\n', " ")
}
