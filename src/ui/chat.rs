// src/ui/chat.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::bubble;

pub fn draw_messages(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let mut lines = Vec::new();
    lines.push(
        Line::from(Span::styled(
            "· Today ·",
            Style::default().fg(palette.text_dim),
        ))
        .alignment(Alignment::Center),
    );
    for message in &app.messages {
        lines.push(Line::from(""));
        lines.extend(bubble::render(message, area.width, palette));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let scroll = app.scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(palette.background))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph.scroll((scroll, 0)), area);
}
