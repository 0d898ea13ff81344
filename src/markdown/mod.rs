//! Markdown normalization module
//!
//! Converts model-authored markdown into plain display text for the
//! document renderers. The conversion is a fixed, ordered list of passes;
//! each pass runs once over the whole text, left to right.
//!
//! Emphasis passes pair markers within a single line, shortest match first,
//! so nested or overlapping markers (`***x***`) are stripped one layer per
//! pass and may leave residue.

/// Glyph substituted for unordered list bullets
pub const BULLET: &str = "• ";

/// A single substitution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// `# Heading` .. `###### Heading` at line start
    Headings,
    /// `**x**`, `__x__`, `*x*`, `_x_`, `` `x` `` within a line
    Delimited(&'static str),
    /// ```` ```...``` ```` blocks, content included
    Fences,
    /// `[label](url)` -> `label`
    Links,
    /// `- x`, `* x`, `+ x` at line start
    Bullets,
    /// `1. x` at line start
    OrderedPrefixes,
    /// `> x` at line start
    Blockquotes,
    /// Three or more newlines become two
    CollapseBlankLines,
}

const PIPELINE: &[Pass] = &[
    Pass::Headings,
    Pass::Delimited("**"),
    Pass::Delimited("__"),
    Pass::Delimited("*"),
    Pass::Delimited("_"),
    Pass::Fences,
    Pass::Delimited("`"),
    Pass::Links,
    Pass::Bullets,
    Pass::OrderedPrefixes,
    Pass::Blockquotes,
    Pass::CollapseBlankLines,
];

/// Convert markdown source to plain display text
pub fn normalize(markdown: &str) -> String {
    PIPELINE
        .iter()
        .fold(markdown.to_string(), |text, pass| pass.apply(&text))
        .trim()
        .to_string()
}

impl Pass {
    fn apply(self, text: &str) -> String {
        match self {
            Pass::Headings => map_lines(text, strip_heading),
            Pass::Delimited(marker) => map_lines(text, |line| strip_delimited(line, marker)),
            Pass::Fences => strip_fences(text),
            Pass::Links => map_lines(text, strip_links),
            Pass::Bullets => map_lines(text, replace_bullet),
            Pass::OrderedPrefixes => map_lines(text, strip_ordered_prefix),
            Pass::Blockquotes => map_lines(text, strip_blockquote),
            Pass::CollapseBlankLines => collapse_blank_lines(text),
        }
    }
}

fn map_lines<F>(text: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    text.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

fn skip_inline_space(s: &str) -> Option<&str> {
    s.strip_prefix(' ').or_else(|| s.strip_prefix('\t'))
}

fn strip_heading(line: &str) -> String {
    let hashes = line.bytes().take(6).take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return line.to_string();
    }
    let rest = &line[hashes..];
    skip_inline_space(rest).unwrap_or(rest).to_string()
}

/// Replace every `<marker>inner<marker>` in a line with `inner`.
///
/// `inner` is at least one character and ends at the first closing marker.
fn strip_delimited(line: &str, marker: &str) -> String {
    let mut output = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if let Some(after_open) = rest.strip_prefix(marker) {
            if let Some(first) = after_open.chars().next() {
                let search_from = first.len_utf8();
                if let Some(close) = after_open[search_from..].find(marker) {
                    let inner_end = search_from + close;
                    output.push_str(&after_open[..inner_end]);
                    rest = &after_open[inner_end + marker.len()..];
                    continue;
                }
            }
        }
        output.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    output
}

fn strip_fences(text: &str) -> String {
    const FENCE: &str = "```";
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(FENCE) {
        let after_open = &rest[open + FENCE.len()..];
        match after_open.find(FENCE) {
            Some(close) => {
                output.push_str(&rest[..open]);
                rest = &after_open[close + FENCE.len()..];
            }
            None => break,
        }
    }

    output.push_str(rest);
    output
}

fn strip_links(line: &str) -> String {
    let mut output = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            if let Some((label, consumed)) = match_link(&rest[1..]) {
                output.push_str(label);
                rest = &rest[1 + consumed..];
                continue;
            }
        }
        output.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    output
}

/// Match `label](url)` after an opening bracket; returns the label and the
/// number of bytes consumed.
fn match_link(s: &str) -> Option<(&str, usize)> {
    let first = s.chars().next()?;
    let label_end = first.len_utf8() + s[first.len_utf8()..].find("](")?;
    let url_start = label_end + 2;
    let url_first = s[url_start..].chars().next()?;
    let after_url_first = url_start + url_first.len_utf8();
    let url_end = after_url_first + s[after_url_first..].find(')')?;
    Some((&s[..label_end], url_end + 1))
}

fn replace_bullet(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some('-' | '*' | '+') => match skip_inline_space(chars.as_str()) {
            Some(rest) => format!("{}{}", BULLET, rest),
            None => line.to_string(),
        },
        _ => line.to_string(),
    }
}

fn strip_ordered_prefix(line: &str) -> String {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return line.to_string();
    }
    match line[digits..]
        .strip_prefix('.')
        .and_then(skip_inline_space)
    {
        Some(rest) => rest.to_string(),
        None => line.to_string(),
    }
}

fn strip_blockquote(line: &str) -> String {
    match line.strip_prefix('>') {
        Some(rest) => skip_inline_space(rest).unwrap_or(rest).to_string(),
        None => line.to_string(),
    }
}

fn collapse_blank_lines(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut newlines = 0;

    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                output.push(ch);
            }
        } else {
            newlines = 0;
            output.push(ch);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_removed() {
        assert_eq!(normalize("# Title\n### Sub"), "Title\nSub");
        assert_eq!(normalize("###### Deep"), "Deep");
    }

    #[test]
    fn test_heading_marker_only_at_line_start() {
        assert_eq!(normalize("Written in C# daily"), "Written in C# daily");
    }

    #[test]
    fn test_bold_and_italic_removed() {
        assert_eq!(normalize("**4**"), "4");
        assert_eq!(normalize("a __b__ c"), "a b c");
        assert_eq!(normalize("an *italic* and _under_ word"), "an italic and under word");
    }

    #[test]
    fn test_emphasis_does_not_span_lines() {
        assert_eq!(normalize("*open\nclose*"), "*open\nclose*");
    }

    #[test]
    fn test_empty_emphasis_left_alone() {
        assert_eq!(normalize("a ** b"), "a ** b");
    }

    #[test]
    fn test_inline_code_removed() {
        assert_eq!(normalize("run `cargo test` now"), "run cargo test now");
    }

    #[test]
    fn test_fenced_block_removed_with_content() {
        let input = "Before\n\n```rust\nfn main() {}\n```\n\nAfter";
        assert_eq!(normalize(input), "Before\n\nAfter");
    }

    #[test]
    fn test_unclosed_fence_kept() {
        assert!(normalize("```\nno close").contains("no close"));
    }

    #[test]
    fn test_links_keep_label() {
        assert_eq!(
            normalize("See [the docs](https://example.com) and [more](x)."),
            "See the docs and more."
        );
    }

    #[test]
    fn test_incomplete_link_unchanged() {
        assert_eq!(normalize("[label] (url)"), "[label] (url)");
        assert_eq!(normalize("[label]()"), "[label]()");
    }

    #[test]
    fn test_bullets_replaced() {
        assert_eq!(normalize("- one\n+ two"), "• one\n• two");
    }

    #[test]
    fn test_star_bullet_replaced() {
        assert_eq!(normalize("* solo"), "• solo");
    }

    #[test]
    fn test_ordered_prefix_removed() {
        assert_eq!(normalize("1. first\n12. twelfth"), "first\ntwelfth");
    }

    #[test]
    fn test_version_number_not_a_list() {
        assert_eq!(normalize("2.5 is the version"), "2.5 is the version");
    }

    #[test]
    fn test_blockquote_removed() {
        assert_eq!(normalize("> quoted\n>tight"), "quoted\ntight");
    }

    #[test]
    fn test_blank_lines_collapsed_and_trimmed() {
        assert_eq!(normalize("\n\n  a\n\n\n\n\nb  \n\n"), "a\n\nb");
    }

    #[test]
    fn test_unicode_content_preserved() {
        assert_eq!(normalize("**café** — _naïve_"), "café — naïve");
    }

    #[test]
    fn test_mixed_document_has_no_control_sequences() {
        let input = "# Answer\n\n**Short:** the result is *four*.\n\n\
                     > Note: see [source](https://example.com)\n\n\
                     - uses `add`\n- __checked__\n\n```\nlet x = 2 + 2;\n```";
        let output = normalize(input);

        assert!(!output.contains('#'));
        assert!(!output.contains("**"));
        assert!(!output.contains('*'));
        assert!(!output.contains("__"));
        assert!(!output.contains('`'));
        assert!(!output.contains("]("));
        assert!(!output.contains('>'));
        assert!(output.contains("Short: the result is four."));
        assert!(output.contains("• uses add"));
        assert!(output.contains("Note: see source"));
    }

    #[test]
    fn test_nested_emphasis_residue() {
        // Bold runs before italic, so the inner pair of `***x***` survives
        // the bold pass and is consumed by the italic pass.
        assert_eq!(normalize("***x***"), "x");
    }
}
