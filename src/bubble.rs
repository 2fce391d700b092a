// src/bubble.rs
//
// The message-content renderer: one Message in, one bubble's worth of
// display lines out. Pure with respect to the Message value; the copy
// actions it advertises live in clipboard.rs.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

use crate::highlight::highlight_code;
use crate::markup;
use crate::message::{FileData, Message, MessageContent, MessagePart, PartKind, Sender};
use crate::theme::Palette;

/// Decorative waveform bar heights for voice bubbles. Not derived from
/// any audio data.
const WAVEFORM_HEIGHTS: [u8; 12] = [2, 4, 3, 5, 3, 6, 4, 2, 3, 2, 2, 1];
const WAVEFORM_RAMP: [char; 6] = ['▁', '▂', '▃', '▄', '▅', '▆'];

const USER_AVATAR: &str = "👤";
const AI_AVATAR: &str = "AI";

/// Renders one message to display lines. User bubbles align right, AI
/// bubbles align left. Re-rendering the same message yields the same lines.
pub fn render(msg: &Message, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match &msg.content {
        MessageContent::Typing => render_typing(&mut lines, palette),
        MessageContent::File { file, caption } => {
            render_file_card(&mut lines, file, caption.as_deref(), width, palette);
            push_meta(&mut lines, msg, palette);
        }
        MessageContent::Voice { duration } => {
            render_voice(&mut lines, duration, palette);
            push_meta(&mut lines, msg, palette);
        }
        MessageContent::Plain(text) => {
            render_plain(&mut lines, msg.sender, text, width, palette);
            push_meta(&mut lines, msg, palette);
        }
        MessageContent::Rich(parts) => {
            render_parts(&mut lines, parts, width, palette);
            push_meta(&mut lines, msg, palette);
        }
    }
    lines
}

fn align_for(sender: Sender) -> Alignment {
    match sender {
        Sender::User => Alignment::Right,
        Sender::Ai => Alignment::Left,
    }
}

fn render_typing(lines: &mut Vec<Line<'static>>, palette: &Palette) {
    let dim = Style::default().fg(palette.text_dim);
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", AI_AVATAR),
            Style::default()
                .fg(palette.user_text)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("● ● ●", Style::default().fg(palette.text_dim).bg(palette.ai_bubble)),
    ]));
    lines.push(Line::from(Span::styled("AI is typing…", dim)));
}

fn render_file_card(
    lines: &mut Vec<Line<'static>>,
    file: &FileData,
    caption: Option<&str>,
    width: u16,
    palette: &Palette,
) {
    let bubble = Style::default().fg(palette.user_text).bg(palette.user_bubble);
    lines.push(
        Line::from(vec![
            Span::styled("🗎 ", bubble),
            Span::styled(file.name.clone(), bubble.add_modifier(Modifier::BOLD)),
        ])
        .alignment(Alignment::Right),
    );
    lines.push(
        Line::from(vec![
            Span::styled(
                format!("{} • {}", file.size, file.type_label),
                bubble.add_modifier(Modifier::DIM),
            ),
            Span::styled("  ⇩ download", bubble),
        ])
        .alignment(Alignment::Right),
    );
    if let Some(caption) = caption {
        for wrapped in wrap(caption, wrap_width(width)) {
            lines.push(
                Line::from(Span::styled(wrapped.to_string(), bubble))
                    .alignment(Alignment::Right),
            );
        }
    }
}

fn render_voice(lines: &mut Vec<Line<'static>>, duration: &str, palette: &Palette) {
    let bubble = Style::default().fg(palette.user_text).bg(palette.user_bubble);
    let waveform: String = WAVEFORM_HEIGHTS
        .iter()
        .map(|&h| WAVEFORM_RAMP[(h as usize - 1).min(WAVEFORM_RAMP.len() - 1)])
        .collect();
    lines.push(
        Line::from(vec![
            Span::styled("▶ ", bubble.add_modifier(Modifier::BOLD)),
            Span::styled(waveform, bubble),
            Span::styled(format!(" {}", duration), bubble.add_modifier(Modifier::DIM)),
        ])
        .alignment(Alignment::Right),
    );
}

fn render_plain(
    lines: &mut Vec<Line<'static>>,
    sender: Sender,
    text: &str,
    width: u16,
    palette: &Palette,
) {
    let style = match sender {
        Sender::User => Style::default().fg(palette.user_text).bg(palette.user_bubble),
        Sender::Ai => Style::default().fg(palette.ai_text).bg(palette.ai_bubble),
    };
    let alignment = align_for(sender);
    if text.is_empty() {
        lines.push(Line::from(Span::styled(String::new(), style)).alignment(alignment));
        return;
    }
    for wrapped in wrap(text, wrap_width(width)) {
        lines.push(Line::from(Span::styled(wrapped.to_string(), style)).alignment(alignment));
    }
}

fn render_parts(
    lines: &mut Vec<Line<'static>>,
    parts: &[MessagePart],
    width: u16,
    palette: &Palette,
) {
    for part in parts {
        match part.kind {
            PartKind::Text => lines.extend(markup::render(&part.content, palette)),
            PartKind::CodeBlock => render_code_block(lines, part, width, palette),
        }
    }
}

fn render_code_block(
    lines: &mut Vec<Line<'static>>,
    part: &MessagePart,
    width: u16,
    palette: &Palette,
) {
    let frame = Style::default().fg(palette.border);
    let label = part.language.as_deref().unwrap_or("code");
    let inner = (width as usize).saturating_sub(4).max(8);
    let rule_len = inner
        .saturating_sub(label.chars().count())
        .saturating_sub(10);

    lines.push(Line::from(vec![
        Span::styled("┌─ ", frame),
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(palette.text_dim)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", "─".repeat(rule_len)), frame),
        Span::styled(" ⧉ copy ", Style::default().fg(palette.text_dim)),
    ]));

    for code_line in highlight_code(&part.content, part.language.as_deref(), palette.code_theme) {
        let mut spans = vec![Span::styled("│ ", frame)];
        spans.extend(code_line.spans);
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("└{}", "─".repeat(inner)),
        frame,
    )));
}

fn push_meta(lines: &mut Vec<Line<'static>>, msg: &Message, palette: &Palette) {
    let dim = Style::default().fg(palette.text_dim);
    let meta = match msg.sender {
        Sender::User => Line::from(vec![
            Span::styled(msg.timestamp.clone(), dim),
            Span::styled(format!("  {}", USER_AVATAR), dim),
        ])
        .alignment(Alignment::Right),
        Sender::Ai => Line::from(vec![
            Span::styled(msg.timestamp.clone(), dim),
            Span::styled("  ⧉ copy  ↻ retry  👍", dim),
        ]),
    };
    lines.push(meta);
}

fn wrap_width(width: u16) -> usize {
    // Leave room for the bubble gutter; floor keeps textwrap sane on tiny
    // terminals.
    (width as usize).saturating_sub(6).max(16)
}
