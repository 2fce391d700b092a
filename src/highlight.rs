// src/highlight.rs
//
// Code-block bodies arrive as plain source text; highlighting is computed
// here at render time from the part's language label.

use once_cell::sync::Lazy;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use syntect::{
    easy::HighlightLines,
    highlighting::ThemeSet,
    parsing::SyntaxSet,
    util::LinesWithEndings,
};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Highlights `code` into one styled line per source line. Unknown language
/// labels (or none) fall back to plain text; a highlighter error mid-block
/// degrades that line to an unstyled span instead of failing the render.
pub fn highlight_code(code: &str, language: Option<&str>, theme_name: &str) -> Vec<Line<'static>> {
    let syntax = language
        .and_then(|token| SYNTAX_SET.find_syntax_by_token(token))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    let theme = THEME_SET
        .themes
        .get(theme_name)
        .unwrap_or_else(|| &THEME_SET.themes["base16-ocean.dark"]);
    let mut highlighter = HighlightLines::new(syntax, theme);

    let mut lines = Vec::new();
    for source_line in LinesWithEndings::from(code) {
        let trimmed = source_line.trim_end_matches('\n');
        match highlighter.highlight_line(source_line, &SYNTAX_SET) {
            Ok(regions) => {
                let spans: Vec<Span<'static>> = regions
                    .into_iter()
                    .map(|(style, text)| {
                        let fg = style.foreground;
                        Span::styled(
                            text.trim_end_matches('\n').to_string(),
                            Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                        )
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
            Err(_) => lines.push(Line::from(trimmed.to_string())),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_keeps_source_lines_and_text() {
        let code = "import pdfplumber\nprint(\"done\")";
        let lines = highlight_code(code, Some("python"), "base16-ocean.dark");
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "import pdfplumber");
        assert_eq!(text_of(&lines[1]), "print(\"done\")");
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let lines = highlight_code("whatever", Some("no-such-lang"), "base16-ocean.dark");
        assert_eq!(lines.len(), 1);
        assert_eq!(text_of(&lines[0]), "whatever");
    }

    #[test]
    fn test_same_input_highlights_identically() {
        let a = highlight_code("fn main() {}", Some("rust"), "base16-ocean.dark");
        let b = highlight_code("fn main() {}", Some("rust"), "base16-ocean.dark");
        assert_eq!(a, b);
    }
}
