// src/markup.rs
//
// Inline markup for AI rich-text parts. The producer is trusted to have
// sanitized this content already (see DESIGN.md); we map a small tag set
// onto terminal styles and pass everything else through verbatim.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    bold: bool,
    italic: bool,
    code: bool,
}

/// One styled run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    /// Runs after a literal newline start a new display line.
    pub line: usize,
}

/// Scans the markup once, tracking open tags. Attributes on a tag are
/// ignored (`<code class="...">` counts as `<code>`); an unknown tag is not
/// a tag to us and is emitted literally.
pub fn parse(markup: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut flags = Flags::default();
    let mut line = 0usize;
    let mut buf = String::new();

    let push_run = |buf: &mut String, flags: Flags, line: usize, runs: &mut Vec<InlineRun>| {
        if !buf.is_empty() {
            runs.push(InlineRun {
                text: std::mem::take(buf),
                bold: flags.bold,
                italic: flags.italic,
                code: flags.code,
                line,
            });
        }
    };

    let mut rest = markup;
    while !rest.is_empty() {
        if let Some(open) = rest.find('<') {
            let (before, tail) = rest.split_at(open);
            for ch in before.chars() {
                if ch == '\n' {
                    push_run(&mut buf, flags, line, &mut runs);
                    line += 1;
                } else {
                    buf.push(ch);
                }
            }
            match tail.find('>') {
                Some(close) => {
                    let raw = &tail[1..close];
                    let name = raw
                        .trim_start_matches('/')
                        .split_whitespace()
                        .next()
                        .unwrap_or("")
                        .to_ascii_lowercase();
                    let closing = raw.starts_with('/');
                    let recognized = match name.as_str() {
                        "b" | "strong" => {
                            push_run(&mut buf, flags, line, &mut runs);
                            flags.bold = !closing;
                            true
                        }
                        "i" | "em" => {
                            push_run(&mut buf, flags, line, &mut runs);
                            flags.italic = !closing;
                            true
                        }
                        "code" => {
                            push_run(&mut buf, flags, line, &mut runs);
                            flags.code = !closing;
                            true
                        }
                        _ => false,
                    };
                    if !recognized {
                        buf.push_str(&tail[..=close]);
                    }
                    rest = &tail[close + 1..];
                }
                None => {
                    // Unterminated '<': literal to the end.
                    buf.push_str(tail);
                    rest = "";
                }
            }
        } else {
            for ch in rest.chars() {
                if ch == '\n' {
                    push_run(&mut buf, flags, line, &mut runs);
                    line += 1;
                } else {
                    buf.push(ch);
                }
            }
            rest = "";
        }
    }
    push_run(&mut buf, flags, line, &mut runs);
    runs
}

/// Renders markup to display lines with the palette's inline styles.
pub fn render(markup: &str, palette: &Palette) -> Vec<Line<'static>> {
    let runs = parse(markup);
    let last_line = runs.last().map(|r| r.line).unwrap_or(0);
    let mut lines: Vec<Vec<Span<'static>>> = vec![Vec::new(); last_line + 1];

    for run in runs {
        let mut style = Style::default().fg(palette.text);
        if run.code {
            style = style.fg(palette.primary).bg(palette.code_bg);
        }
        if run.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if run.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        lines[run.line].push(Span::styled(run.text, style));
    }

    lines.into_iter().map(Line::from).collect()
}

/// Drops the recognized tags and returns the bare text, for copy payloads.
pub fn strip(markup: &str) -> String {
    let mut out = String::new();
    let mut current = 0usize;
    for run in parse(markup) {
        while current < run.line {
            out.push('\n');
            current += 1;
        }
        out.push_str(&run.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_run() {
        let runs = parse("hello world");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "hello world");
        assert!(!runs[0].bold && !runs[0].code);
    }

    #[test]
    fn test_code_span_with_attributes() {
        let runs = parse(r#"install <code class="font-mono">pdfplumber</code> first"#);
        assert_eq!(runs.len(), 3);
        assert!(runs[1].code);
        assert_eq!(runs[1].text, "pdfplumber");
        assert!(!runs[2].code);
    }

    #[test]
    fn test_bold_and_strong_are_equivalent() {
        for markup in ["<b>hi</b>", "<strong>hi</strong>"] {
            let runs = parse(markup);
            assert_eq!(runs.len(), 1);
            assert!(runs[0].bold, "bold not set for {}", markup);
        }
    }

    #[test]
    fn test_unknown_tag_passes_through_verbatim() {
        let runs = parse("a <blink>b</blink> c");
        let text: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(text, "a <blink>b</blink> c");
    }

    #[test]
    fn test_newline_starts_a_new_line() {
        let runs = parse("first\nsecond");
        assert_eq!(runs[0].line, 0);
        assert_eq!(runs[1].line, 1);
    }

    #[test]
    fn test_strip_recovers_bare_text() {
        assert_eq!(
            strip(r#"use <code class="x">pip install pdfplumber</code>."#),
            "use pip install pdfplumber."
        );
    }
}
