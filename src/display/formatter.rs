//! Markdown terminal formatting using termimad

use termimad::{gray, rgb, MadSkin};

use crate::display::terminal::should_use_colors;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        print_rich(markdown);
    } else {
        print_plain(markdown);
    }
}

/// Print with termimad styling
fn print_rich(markdown: &str) {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.print_text(markdown);
}

/// Gold headings and labels, matching the report palette
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::Attribute;

    skin.headers[0].set_fg(rgb(138, 112, 72));
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(rgb(184, 144, 72));
    skin.headers[1].add_attr(Attribute::Bold);

    skin.bold.set_fg(rgb(184, 144, 72));
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);

    skin.quote_mark.set_fg(rgb(184, 144, 72));
    skin.table.set_fg(gray(18));
}

/// Print plain markdown without formatting
fn print_plain(markdown: &str) {
    println!("{}", markdown);
}
