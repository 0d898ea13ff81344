//! Brand colours shared by both renderers

use super::canvas::Rgb;

/// Headings and titles
pub const GOLD_DARK: Rgb = Rgb(138, 112, 72);

/// Labels, rules, and page frames
pub const GOLD_ACCENT: Rgb = Rgb(184, 144, 72);

/// Body text
pub const TEXT_PRIMARY: Rgb = Rgb(58, 48, 36);

/// Subtitles and taglines
pub const TEXT_MUTED: Rgb = Rgb(106, 90, 72);
