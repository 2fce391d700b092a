// src/ui/header.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(1),
            Constraint::Length(18),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ☰ history",
            Style::default().fg(palette.text_dim),
        ))),
        chunks[0],
    );

    let title = vec![
        Line::from(Span::styled(
            "AI Chat",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.user_handle.clone(),
            Style::default().fg(palette.text_dim),
        )),
    ];
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[1]);

    let toggle_hint = match app.theme {
        crate::theme::Theme::Light => "☀ light",
        crate::theme::Theme::Dark => "☾ dark",
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(toggle_hint, Style::default().fg(palette.text_dim)),
            Span::styled("  ＋ new ", Style::default().fg(palette.primary)),
        ]))
        .alignment(Alignment::Right),
        chunks[2],
    );
}
