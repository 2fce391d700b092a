// src/ui/input.rs

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub fn draw_input(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let separator = "─".repeat(area.width as usize);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(palette.border),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    // Static file-preview chip, part of the mock-up.
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("🗎 data_struct….pdf ", Style::default().fg(palette.text_dim)),
            Span::styled("✕", Style::default().fg(palette.text_dim)),
        ])),
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: 1,
        },
    );

    let text_area = Rect {
        x: area.x,
        y: area.y + 2,
        width: area.width,
        height: area.height.saturating_sub(2),
    };

    let mut lines: Vec<Line> = Vec::new();
    let input_lines: Vec<&str> = app.input.split('\n').collect();
    for (i, text) in input_lines.iter().enumerate() {
        let mut spans = Vec::new();
        if i == 0 {
            spans.push(Span::styled("📎 ", Style::default().fg(palette.text_dim)));
        } else {
            spans.push(Span::raw("   "));
        }
        if app.input.is_empty() {
            spans.push(Span::styled(
                "Write a message…",
                Style::default().fg(palette.text_dim),
            ));
        } else {
            spans.push(Span::styled(
                text.to_string(),
                Style::default().fg(palette.text),
            ));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), text_area);

    // Mic and send affordances, right edge of the first input row.
    let send_style = if app.input.trim().is_empty() {
        Style::default().fg(palette.text_dim)
    } else {
        Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
    };
    let controls = "🎤 ⬆ ";
    let controls_width = controls.width() as u16;
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(controls, send_style))),
        Rect {
            x: area.x + area.width.saturating_sub(controls_width + 1),
            y: text_area.y,
            width: controls_width,
            height: 1,
        },
    );

    let last_line = input_lines.last().copied().unwrap_or("");
    let cursor_x = text_area.x + 3 + last_line.width() as u16;
    let cursor_y = text_area.y + (input_lines.len() as u16 - 1).min(text_area.height.saturating_sub(1));
    f.set_cursor_position((cursor_x, cursor_y));
}
