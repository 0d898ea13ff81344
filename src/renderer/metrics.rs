//! Font metrics and line splitting for fixed-page layout
//!
//! Widths are the standard Helvetica AFM advance widths in 1/1000 em.
//! The oblique face shares the regular widths.

/// Millimetres per PDF point
pub const PT_TO_MM: f64 = 25.4 / 72.0;

/// Typeface variant of the Helvetica family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

#[rustfmt::skip]
const REGULAR_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance width of a character in 1/1000 em
pub fn char_width(ch: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Bold => &BOLD_WIDTHS,
        FontStyle::Regular | FontStyle::Italic => &REGULAR_WIDTHS,
    };

    match ch {
        ' '..='~' => table[ch as usize - 32],
        '•' => 350,
        '–' => 556,
        '—' | '…' => 1000,
        '‘' | '’' => 222,
        '“' | '”' => 333,
        _ => 556,
    }
}

/// Width of `text` in millimetres at `size` points
pub fn text_width(text: &str, style: FontStyle, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, style))).sum();
    f64::from(units) / 1000.0 * size * PT_TO_MM
}

/// Split text into lines no wider than `max_width`.
///
/// Explicit newlines always break; blank source lines become empty lines.
/// A single word wider than `max_width` is broken between characters.
pub fn split_to_width<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = place_word(word, max_width, &measure, &mut lines);
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = place_word(word, max_width, &measure, &mut lines);
            }
        }

        lines.push(current);
    }

    lines
}

/// Start a line with `word`, pushing full-width fragments of an oversized
/// word and returning the remainder.
fn place_word<F>(word: &str, max_width: f64, measure: &F, lines: &mut Vec<String>) -> String
where
    F: Fn(&str) -> f64,
{
    if measure(word) <= max_width {
        return word.to_string();
    }

    let mut fragment = String::new();
    for ch in word.chars() {
        fragment.push(ch);
        if fragment.chars().count() > 1 && measure(&fragment) > max_width {
            fragment.pop();
            lines.push(std::mem::take(&mut fragment));
            fragment.push(ch);
        }
    }
    fragment
}
