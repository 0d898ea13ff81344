//! PDF backend for the page canvas
//!
//! Each page records its drawing operators into a `pdf_writer::Content`
//! stream; `finish` assembles catalog, page tree, fonts and info through
//! `pdf_writer::Pdf`. Text uses the three standard Helvetica faces in
//! WinAnsi encoding.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

use super::canvas::{Align, FontStyle, PageCanvas, Rgb};
use super::metrics::{text_width, PT_TO_MM};
use crate::error::{ReportError, Result};

/// Resource name and base font for each style
const FONTS: [(FontStyle, &str, &str); 3] = [
    (FontStyle::Regular, "F1", "Helvetica"),
    (FontStyle::Bold, "F2", "Helvetica-Bold"),
    (FontStyle::Italic, "F3", "Helvetica-Oblique"),
];

const PRODUCER: &str = "council-report";

/// In-memory PDF document
pub struct PdfCanvas {
    width: f64,
    height: f64,
    pages: Vec<Content>,
    current: usize,
    font: FontStyle,
    font_size: f64,
    text_color: Rgb,
    draw_color: Rgb,
    line_width: f64,
    title: String,
}

impl PdfCanvas {
    /// Create a document with one blank page of the given size in millimetres
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pages: vec![Content::new()],
            current: 0,
            font: FontStyle::Regular,
            font_size: 11.0,
            text_color: Rgb(0, 0, 0),
            draw_color: Rgb(0, 0, 0),
            line_width: 0.2,
            title: String::new(),
        }
    }

    /// Set the document title recorded in the info dictionary
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    fn to_pt(mm: f64) -> f32 {
        (mm / PT_TO_MM) as f32
    }

    /// Convert a top-origin y in millimetres to a bottom-origin y in points
    fn flip_y(&self, y: f64) -> f32 {
        Self::to_pt(self.height - y)
    }

    fn font_resource(style: FontStyle) -> &'static str {
        FONTS
            .iter()
            .find(|(s, _, _)| *s == style)
            .map(|(_, name, _)| *name)
            .unwrap_or("F1")
    }

    fn content(&mut self) -> &mut Content {
        &mut self.pages[self.current]
    }

    fn color_components(color: Rgb) -> (f32, f32, f32) {
        (
            f32::from(color.0) / 255.0,
            f32::from(color.1) / 255.0,
            f32::from(color.2) / 255.0,
        )
    }

    fn check_coordinates(values: &[f64]) -> Result<()> {
        if values.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(ReportError::Render(
                "non-finite coordinate passed to PDF canvas".to_string(),
            ))
        }
    }

    /// Serialize the document
    pub fn finish(self) -> Result<Vec<u8>> {
        let page_count = i32::try_from(self.pages.len())
            .map_err(|_| ReportError::Render("too many pages".to_string()))?;
        let media_box = Rect::new(0.0, 0.0, Self::to_pt(self.width), Self::to_pt(self.height));

        let mut pdf = Pdf::new();
        pdf.set_version(1, 4);

        let mut next_id = 1;
        let mut alloc = || {
            let id = Ref::new(next_id);
            next_id += 1;
            id
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();
        let font_ids: Vec<Ref> = FONTS.iter().map(|_| alloc()).collect();
        let page_ids: Vec<(Ref, Ref)> = self.pages.iter().map(|_| (alloc(), alloc())).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_count);

        for ((page_id, content_id), content) in page_ids.iter().zip(self.pages) {
            {
                let mut page = pdf.page(*page_id);
                page.media_box(media_box)
                    .parent(pages_id)
                    .contents(*content_id);
                let mut resources = page.resources();
                let mut fonts = resources.fonts();
                for ((_, name, _), font_id) in FONTS.iter().zip(&font_ids) {
                    fonts.pair(Name(name.as_bytes()), *font_id);
                }
            }
            pdf.stream(*content_id, &content.finish());
        }

        for ((_, _, base_font), font_id) in FONTS.iter().zip(&font_ids) {
            pdf.type1_font(*font_id)
                .base_font(Name(base_font.as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        pdf.document_info(info_id)
            .title(TextStr(&self.title))
            .producer(TextStr(PRODUCER));

        Ok(pdf.finish())
    }
}

impl PageCanvas for PdfCanvas {
    fn page_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_font(&mut self, style: FontStyle, size: f64) {
        self.font = style;
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn measure_text(&self, text: &str) -> f64 {
        text_width(text, self.font, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, align: Align) -> Result<()> {
        Self::check_coordinates(&[x, y])?;
        if text.is_empty() {
            return Ok(());
        }

        let x = match align {
            Align::Left => x,
            Align::Center => x - self.measure_text(text) / 2.0,
        };
        let (r, g, b) = Self::color_components(self.text_color);
        let font = Self::font_resource(self.font);
        let size = self.font_size as f32;
        let (x_pt, y_pt) = (Self::to_pt(x), self.flip_y(y));
        let encoded = winansi_bytes(text);

        let content = self.content();
        content.set_fill_rgb(r, g, b);
        content
            .begin_text()
            .set_font(Name(font.as_bytes()), size)
            .next_line(x_pt, y_pt)
            .show(Str(&encoded))
            .end_text();
        Ok(())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        Self::check_coordinates(&[x1, y1, x2, y2])?;
        let (r, g, b) = Self::color_components(self.draw_color);
        let width = Self::to_pt(self.line_width);
        let (x1, y1, x2, y2) = (
            Self::to_pt(x1),
            self.flip_y(y1),
            Self::to_pt(x2),
            self.flip_y(y2),
        );

        self.content()
            .save_state()
            .set_stroke_rgb(r, g, b)
            .set_line_width(width)
            .move_to(x1, y1)
            .line_to(x2, y2)
            .stroke()
            .restore_state();
        Ok(())
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        Self::check_coordinates(&[x, y, width, height])?;
        let (r, g, b) = Self::color_components(self.draw_color);
        let line_width = Self::to_pt(self.line_width);
        let bottom = self.flip_y(y + height);
        let (x, w, h) = (Self::to_pt(x), Self::to_pt(width), Self::to_pt(height));

        self.content()
            .save_state()
            .set_stroke_rgb(r, g, b)
            .set_line_width(line_width)
            .rect(x, bottom, w, h)
            .stroke()
            .restore_state();
        Ok(())
    }

    fn start_new_page(&mut self) -> Result<()> {
        self.pages.push(Content::new());
        self.current = self.pages.len() - 1;
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_page(&mut self, page: usize) -> Result<()> {
        if page == 0 || page > self.pages.len() {
            return Err(ReportError::Render(format!(
                "page {} does not exist (document has {})",
                page,
                self.pages.len()
            )));
        }
        self.current = page - 1;
        Ok(())
    }
}

/// Encode text in WinAnsi for the standard Type1 fonts.
///
/// Characters outside the encoding become `?`.
pub fn winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            _ => winansi_byte(ch).unwrap_or(b'?'),
        })
        .collect()
}

fn winansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        _ => return None,
    };
    Some(byte)
}
