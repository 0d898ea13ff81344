//! Terminal display module
//!
//! Previews flow documents in the terminal, with automatic TTY detection.

mod formatter;
mod preview;
mod terminal;

pub use formatter::print_markdown;
pub use preview::to_markdown;
