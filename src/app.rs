// src/app.rs

use crate::config::Config;
use crate::fixtures;
use crate::history::{ChatSession, HistoryFilter};
use crate::message::Message;
use crate::theme::Theme;

/// Top-level UI state. Owns the message collection; everything below it
/// gets read-only borrows. All mutations are direct field assignments
/// driven by single key events.
pub struct App {
    pub messages: Vec<Message>,
    pub sessions: Vec<ChatSession>,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub filter: HistoryFilter,
    pub input: String,
    pub scroll: u16,
    pub user_handle: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> App {
        App {
            messages: fixtures::initial_messages(),
            sessions: fixtures::initial_sessions(),
            theme: config.theme.parse().unwrap_or(Theme::Light),
            sidebar_open: false,
            filter: HistoryFilter::All,
            input: String::new(),
            scroll: 0,
            user_handle: config.user_handle.clone(),
            should_quit: false,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Composer auto-grow: one row per input line, capped at five,
    /// plus the frame.
    pub fn input_height(&self) -> u16 {
        let rows = self.input.split('\n').count().clamp(1, 5) as u16;
        rows + 2
    }

    /// Most recent AI message, the target of the copy-message action.
    pub fn last_ai_message(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender == crate::message::Sender::Ai)
    }
}
