//! Terminal syntax highlighting for snippet previews using syntect.

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};

use crate::language::Language;

/// Cached syntax set - expensive to load, so we cache it globally.
pub static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Highlight a sample for 24-bit terminal output.
///
/// Languages without a bundled syntax definition (Elixir, in the default
/// set) fall back to plain text, so the sample still prints verbatim.
pub fn highlight(code: &str, language: Language) -> String {
    let syntax = SYNTAX_SET
        .find_syntax_by_extension(language.extension())
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let theme = &THEME_SET.themes["base16-ocean.dark"];
    let mut highlighter = HighlightLines::new(syntax, theme);

    // Use LinesWithEndings to preserve newlines for proper syntax state
    // tracking across multi-line constructs.
    let mut out = String::with_capacity(code.len() * 2);
    for line in LinesWithEndings::from(code) {
        let ranges = highlighter
            .highlight_line(line, &SYNTAX_SET)
            .unwrap_or_default();
        out.push_str(&as_24_bit_terminal_escaped(&ranges, false));
    }
    out.push_str("\x1b[0m");
    out
}
