//! WordprocessingML writer for flow documents

use super::blocks::{Alignment, Block, FlowDocument, Heading, Paragraph, Run, Table};
use super::package::PackageWriter;
use crate::error::Result;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A4 portrait in twips
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;

/// Level-2 heading size in half-points
const SUBHEADING_SIZE: u32 = 26;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

/// Serialize a flow document as a .docx package
pub fn write(document: &FlowDocument) -> Result<Vec<u8>> {
    let mut package = PackageWriter::new();
    package.add("[Content_Types].xml", CONTENT_TYPES.as_bytes())?;
    package.add("_rels/.rels", PACKAGE_RELS.as_bytes())?;
    package.add("word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes())?;
    package.add("word/document.xml", document_xml(document).as_bytes())?;
    package.add("word/styles.xml", styles_xml(document).as_bytes())?;
    package.finish()
}

/// Body part of the package
pub fn document_xml(document: &FlowDocument) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:document xmlns:w="{}"><w:body>"#, W_NS));

    for block in &document.blocks {
        match block {
            Block::Heading(heading) => write_heading(&mut xml, heading),
            Block::Paragraph(paragraph) => write_paragraph(&mut xml, paragraph, None),
            Block::Table(table) => write_table(&mut xml, table, document.page_margin),
        }
    }

    let m = document.page_margin;
    xml.push_str(&format!(
        r#"<w:sectPr><w:pgSz w:w="{}" w:h="{}"/><w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#,
        PAGE_WIDTH, PAGE_HEIGHT
    ));
    xml.push_str("</w:body></w:document>");
    xml
}

/// Style part: defaults plus the two heading levels
pub fn styles_xml(document: &FlowDocument) -> String {
    let style = &document.heading_style;
    let font = escape(&style.font);
    let color = style.color.hex();

    let heading = |id: &str, name: &str, outline: u8, size: u32| {
        format!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{name}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="{before}" w:after="{after}"/><w:outlineLvl w:val="{outline}"/></w:pPr><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:b/><w:bCs/><w:color w:val="{color}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr></w:style>"#,
            before = style.spacing.before,
            after = style.spacing.after,
        )
    };

    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:styles xmlns:w="{W_NS}"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#
    ));
    xml.push_str(&heading("Heading1", "heading 1", 0, style.size));
    xml.push_str(&heading("Heading2", "heading 2", 1, SUBHEADING_SIZE));
    xml.push_str("</w:styles>");
    xml
}

fn write_heading(xml: &mut String, heading: &Heading) {
    let style = if heading.level <= 1 { "Heading1" } else { "Heading2" };
    xml.push_str(&format!(r#"<w:p><w:pPr><w:pStyle w:val="{}"/>"#, style));
    if heading.thematic_break {
        xml.push_str(r#"<w:pBdr><w:bottom w:val="single" w:color="auto" w:sz="6" w:space="1"/></w:pBdr>"#);
    }
    xml.push_str("</w:pPr>");
    write_run(xml, &Run::new(heading.text.as_str()));
    xml.push_str("</w:p>");
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph, style: Option<&str>) {
    xml.push_str("<w:p><w:pPr>");
    if let Some(style) = style {
        xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style));
    }
    if let Some(border) = paragraph.left_border {
        xml.push_str(&format!(
            r#"<w:pBdr><w:left w:val="single" w:color="{}" w:sz="{}" w:space="{}"/></w:pBdr>"#,
            border.color.hex(),
            border.size,
            border.space
        ));
    }
    let spacing = paragraph.spacing;
    if spacing.before > 0 || spacing.after > 0 {
        xml.push_str(&format!(
            r#"<w:spacing w:before="{}" w:after="{}"/>"#,
            spacing.before, spacing.after
        ));
    }
    if paragraph.indent_left > 0 {
        xml.push_str(&format!(r#"<w:ind w:left="{}"/>"#, paragraph.indent_left));
    }
    if paragraph.alignment == Alignment::Center {
        xml.push_str(r#"<w:jc w:val="center"/>"#);
    }
    xml.push_str("</w:pPr>");

    for run in &paragraph.runs {
        write_run(xml, run);
    }
    xml.push_str("</w:p>");
}

fn write_run(xml: &mut String, run: &Run) {
    xml.push_str("<w:r><w:rPr>");
    if let Some(font) = &run.font {
        let font = escape(font);
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>"#
        ));
    }
    if run.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if run.italic {
        xml.push_str("<w:i/><w:iCs/>");
    }
    if let Some(color) = run.color {
        xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, color.hex()));
    }
    if let Some(size) = run.size {
        xml.push_str(&format!(r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#));
    }
    xml.push_str("</w:rPr>");

    // Line breaks inside a run become <w:br/>
    let segments: Vec<String> = run.text.split('\n').map(escape).collect();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        xml.push_str(&format!(r#"<w:t xml:space="preserve">{}</w:t>"#, segment));
    }
    xml.push_str("</w:r>");
}

fn write_table(xml: &mut String, table: &Table, page_margin: u32) {
    let content_width = PAGE_WIDTH.saturating_sub(page_margin * 2);
    let columns: Vec<Option<u8>> = table
        .rows
        .first()
        .map(|row| row.cells.iter().map(|c| c.width_pct).collect())
        .unwrap_or_default();
    let column_count = columns.len().max(1) as u32;

    xml.push_str(r#"<w:tbl><w:tblPr><w:tblW w:w="5000" w:type="pct"/><w:tblBorders>"#);
    for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        xml.push_str(&format!(
            r#"<w:{side} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#
        ));
    }
    xml.push_str("</w:tblBorders></w:tblPr><w:tblGrid>");
    for width in &columns {
        let twips = match width {
            Some(pct) => content_width * u32::from(*pct) / 100,
            None => content_width / column_count,
        };
        xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, twips));
    }
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        xml.push_str("<w:tr>");
        for (index, cell) in row.cells.iter().enumerate() {
            xml.push_str("<w:tc><w:tcPr>");
            // Body rows inherit the header's column shares
            match cell.width_pct.or_else(|| columns.get(index).copied().flatten()) {
                Some(pct) => {
                    xml.push_str(&format!(r#"<w:tcW w:w="{}" w:type="pct"/>"#, u32::from(pct) * 50));
                }
                None => xml.push_str(r#"<w:tcW w:w="0" w:type="auto"/>"#),
            }
            xml.push_str("</w:tcPr>");
            if cell.paragraphs.is_empty() {
                xml.push_str("<w:p/>");
            }
            for paragraph in &cell.paragraphs {
                write_paragraph(xml, paragraph, None);
            }
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
}

/// Escape text for XML character data and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Control characters other than tab are not allowed in XML 1.0
            c if c.is_control() && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}
