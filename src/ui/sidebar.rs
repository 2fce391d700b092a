// src/ui/sidebar.rs
//
// The history drawer, drawn as a modal over the chat. Grouping comes from
// history::partition; this file is layout only.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;

use crate::app::App;
use crate::history::{self, HistoryFilter};

pub fn draw_sidebar(f: &mut Frame, size: Rect, app: &App) {
    let palette = app.theme.palette();
    let area = centered_rect(size, 60, 90);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Chat history ")
        .style(Style::default().bg(palette.surface).fg(palette.text));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // search
            Constraint::Length(2), // filter chips
            Constraint::Min(1),    // session list
            Constraint::Length(1), // footer
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "🔍 Search chats…",
            Style::default().fg(palette.text_dim),
        ))),
        chunks[0],
    );

    f.render_widget(Paragraph::new(filter_chips(app, palette)), chunks[1]);

    draw_session_list(f, chunks[2], app);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "⇪ Import / export history",
            Style::default().fg(palette.primary),
        )))
        .alignment(Alignment::Center),
        chunks[3],
    );
}

fn filter_chips(app: &App, palette: &crate::theme::Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (filter, label)) in HistoryFilter::CHIPS.iter().enumerate() {
        let style = if *filter == app.filter {
            Style::default()
                .fg(palette.user_text)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_dim)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn draw_session_list(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let preview_width = (area.width as usize).saturating_sub(4).max(16);

    let mut lines = Vec::new();
    for group in history::partition(&app.sessions, app.filter) {
        lines.push(Line::from(Span::styled(
            group.label.to_uppercase(),
            Style::default()
                .fg(palette.text_dim)
                .add_modifier(Modifier::BOLD),
        )));
        for session in group.sessions {
            let marker = if session.unread {
                Span::styled("● ", Style::default().fg(palette.primary))
            } else {
                Span::styled(
                    format!("{} ", session.kind.icon()),
                    Style::default().fg(palette.text_dim),
                )
            };
            let pin = if session.is_pinned { " ★" } else { "" };
            lines.push(Line::from(vec![
                marker,
                Span::styled(
                    session.title.clone(),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(pin, Style::default().fg(palette.primary)),
                Span::styled(
                    format!("  {}", session.date),
                    Style::default().fg(palette.text_dim),
                ),
            ]));
            // Preview is clamped to two lines.
            for preview_line in wrap(&session.preview, preview_width).into_iter().take(2) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", preview_line),
                    Style::default().fg(palette.text_dim),
                )));
            }
            lines.push(Line::from(""));
        }
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn centered_rect(size: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(size);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
