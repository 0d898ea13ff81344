//! Page canvas capability used by the paginated renderer
//!
//! Coordinates are millimetres measured from the top-left corner of the
//! page; text is positioned by its baseline.

use crate::error::Result;

pub use super::metrics::FontStyle;

/// An RGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex form without the leading `#`, e.g. `8a7048`
    pub fn hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Horizontal anchoring of a text run relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A drawing surface made of fixed-size pages.
///
/// A fresh canvas has exactly one page, which is current. Page numbers are
/// 1-based.
pub trait PageCanvas {
    /// Page width and height in millimetres
    fn page_size(&self) -> (f64, f64);

    fn set_font(&mut self, style: FontStyle, size: f64);

    fn set_text_color(&mut self, color: Rgb);

    fn set_draw_color(&mut self, color: Rgb);

    fn set_line_width(&mut self, width: f64);

    /// Width of `text` in millimetres in the current font
    fn measure_text(&self, text: &str) -> f64;

    fn draw_text(&mut self, text: &str, x: f64, y: f64, align: Align) -> Result<()>;

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()>;

    /// Stroke a rectangle whose top-left corner is `(x, y)`
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()>;

    /// Append a page and make it current
    fn start_new_page(&mut self) -> Result<()>;

    fn page_count(&self) -> usize;

    /// Make an existing page current
    fn set_page(&mut self, page: usize) -> Result<()>;
}
