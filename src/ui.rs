// src/ui.rs

pub mod chat;
pub mod header;
pub mod input;
pub mod sidebar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;

/// Draws one frame: header, message list, input bar, and the history
/// drawer on top when it is open.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let size = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(app.input_height() + 1),
        ])
        .split(size);

    header::draw_header(f, chunks[0], app);
    chat::draw_messages(f, chunks[1], app);
    input::draw_input(f, chunks[2], app);

    if app.sidebar_open {
        sidebar::draw_sidebar(f, size, app);
    }
}
