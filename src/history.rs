// src/history.rs
//
// History-drawer records and the filter that groups them. Sessions are
// disconnected summary data, not derived from the live message list.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Text,
    Code,
    Audio,
    Image,
}

impl SessionKind {
    /// Glyph shown at the head of a session row.
    pub fn icon(self) -> &'static str {
        match self {
            SessionKind::Text => "🗨",
            SessionKind::Code => "⌨",
            SessionKind::Audio => "🎤",
            SessionKind::Image => "🖼",
        }
    }
}

/// One history-list summary record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    /// Display label like "14:30", "Yesterday", "Oct 23".
    pub date: String,
    pub preview: String,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: SessionKind,
    #[serde(default)]
    pub unread: bool,
}

fn default_kind() -> SessionKind {
    SessionKind::Text
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Pinned,
    Recent,
}

impl HistoryFilter {
    pub const CHIPS: [(HistoryFilter, &'static str); 3] = [
        (HistoryFilter::All, "All"),
        (HistoryFilter::Pinned, "Pinned"),
        (HistoryFilter::Recent, "Last 7 days"),
    ];

    pub fn next(self) -> Self {
        match self {
            HistoryFilter::All => HistoryFilter::Pinned,
            HistoryFilter::Pinned => HistoryFilter::Recent,
            HistoryFilter::Recent => HistoryFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}

/// A labeled run of sessions as the drawer displays them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGroup<'a> {
    pub label: &'static str,
    pub sessions: Vec<&'a ChatSession>,
}

const PINNED_LABEL: &str = "Pinned";
const WEEK_LABEL: &str = "This week";

/// Groups `sessions` for display, preserving input order within each group.
///
/// - All: pinned group first, then everything else under "This week".
/// - Pinned: just the pinned set.
/// - Recent: a single group; the current eligibility rule admits every
///   record (there is no real date math behind the labels).
pub fn partition(sessions: &[ChatSession], filter: HistoryFilter) -> Vec<SessionGroup<'_>> {
    match filter {
        HistoryFilter::All => {
            let (pinned, rest): (Vec<_>, Vec<_>) =
                sessions.iter().partition(|s| s.is_pinned);
            vec![
                SessionGroup {
                    label: PINNED_LABEL,
                    sessions: pinned,
                },
                SessionGroup {
                    label: WEEK_LABEL,
                    sessions: rest,
                },
            ]
        }
        HistoryFilter::Pinned => vec![SessionGroup {
            label: PINNED_LABEL,
            sessions: sessions.iter().filter(|s| s.is_pinned).collect(),
        }],
        HistoryFilter::Recent => vec![SessionGroup {
            label: WEEK_LABEL,
            sessions: sessions.iter().collect(),
        }],
    }
}
