// src/message.rs

use serde::Deserialize;

/// Who authored a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// Non-authoritative content hint carried on the wire. Dispatch never
/// consults it; the populated fields decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTypeHint {
    Text,
    Code,
    File,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PartKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "code-block")]
    CodeBlock,
}

/// One fragment of a multi-part AI message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessagePart {
    #[serde(rename = "type")]
    pub kind: PartKind,
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Attachment metadata. All fields are display strings supplied by the
/// producer; nothing here is parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileData {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub type_label: String,
}

/// The closed content variant the renderer matches on. Built exactly once
/// per message by [`MessageDraft::classify`]; after that nothing re-derives
/// the shape from field presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    /// Placeholder shown while an AI reply is being composed.
    Typing,
    /// File attachment card, with an optional short caption below it.
    File {
        file: FileData,
        caption: Option<String>,
    },
    /// Voice message with a display duration like "0:14".
    Voice { duration: String },
    /// Plain inline text.
    Plain(String),
    /// Ordered AI-authored fragments (rich text and code blocks).
    Rich(Vec<MessagePart>),
}

/// One chat-log entry, fully classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub timestamp: String,
    pub content: MessageContent,
}

impl Message {
    /// Plain-text payload for the copy-message action. Markup is stripped
    /// from rich text; code blocks are kept verbatim.
    pub fn copy_text(&self) -> String {
        match &self.content {
            MessageContent::Typing => String::new(),
            MessageContent::File { file, caption } => caption
                .clone()
                .unwrap_or_else(|| file.name.clone()),
            MessageContent::Voice { duration } => duration.clone(),
            MessageContent::Plain(text) => text.clone(),
            MessageContent::Rich(parts) => {
                let mut out = String::new();
                for part in parts {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    match part.kind {
                        PartKind::Text => out.push_str(&crate::markup::strip(&part.content)),
                        PartKind::CodeBlock => out.push_str(&part.content),
                    }
                }
                out
            }
        }
    }
}

/// The `string | MessagePart[]` union the producer sends for `content`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DraftContent {
    Text(String),
    Parts(Vec<MessagePart>),
}

/// Wire-shaped message record as an external producer would supply it:
/// optional fields, camelCase names, at most one content shape populated.
/// This is the only place the implicit field-presence encoding exists.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDraft {
    pub id: String,
    pub sender: Sender,
    #[serde(default)]
    pub timestamp: String,
    #[serde(rename = "type", default)]
    pub type_hint: Option<MessageTypeHint>,
    #[serde(default)]
    pub content: Option<DraftContent>,
    #[serde(default)]
    pub file: Option<FileData>,
    #[serde(default)]
    pub audio_duration: Option<String>,
    #[serde(default)]
    pub is_typing: bool,
}

impl MessageDraft {
    /// Collapses the optional-field shape into a closed variant. Priority
    /// order, first match wins:
    ///
    /// 1. typing placeholder
    /// 2. file attachment (a non-empty content string becomes its caption)
    /// 3. voice clip
    /// 4. part sequence
    /// 5. plain text
    ///
    /// A draft with no populated shape at all falls through to empty plain
    /// text rather than failing; so does an empty part sequence.
    pub fn classify(self) -> Message {
        let content = if self.is_typing {
            MessageContent::Typing
        } else if let Some(file) = self.file {
            let caption = match self.content {
                Some(DraftContent::Text(text)) if !text.is_empty() => Some(text),
                _ => None,
            };
            MessageContent::File { file, caption }
        } else if let Some(duration) = self.audio_duration {
            MessageContent::Voice { duration }
        } else {
            match self.content {
                Some(DraftContent::Parts(parts)) if !parts.is_empty() => {
                    MessageContent::Rich(parts)
                }
                Some(DraftContent::Text(text)) => MessageContent::Plain(text),
                _ => MessageContent::Plain(String::new()),
            }
        };

        Message {
            id: self.id,
            sender: self.sender,
            timestamp: self.timestamp,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(sender: Sender) -> MessageDraft {
        MessageDraft {
            id: "m1".to_string(),
            sender,
            timestamp: "10:23".to_string(),
            type_hint: None,
            content: None,
            file: None,
            audio_duration: None,
            is_typing: false,
        }
    }

    fn sample_file() -> FileData {
        FileData {
            name: "tech_specs_v2.pdf".to_string(),
            size: "1.4 MB".to_string(),
            type_label: "PDF".to_string(),
        }
    }

    #[test]
    fn test_typing_wins_over_everything() {
        let mut d = draft(Sender::Ai);
        d.is_typing = true;
        d.file = Some(sample_file());
        d.audio_duration = Some("0:14".to_string());
        d.content = Some(DraftContent::Text("ignored".to_string()));
        assert_eq!(d.classify().content, MessageContent::Typing);
    }

    #[test]
    fn test_file_with_caption() {
        let mut d = draft(Sender::User);
        d.file = Some(sample_file());
        d.content = Some(DraftContent::Text("Here is the file.".to_string()));
        match d.classify().content {
            MessageContent::File { file, caption } => {
                assert_eq!(file.name, "tech_specs_v2.pdf");
                assert_eq!(caption.as_deref(), Some("Here is the file."));
            }
            other => panic!("expected file content, got {:?}", other),
        }
    }

    #[test]
    fn test_file_with_empty_caption_drops_it() {
        let mut d = draft(Sender::User);
        d.file = Some(sample_file());
        d.content = Some(DraftContent::Text(String::new()));
        match d.classify().content {
            MessageContent::File { caption, .. } => assert!(caption.is_none()),
            other => panic!("expected file content, got {:?}", other),
        }
    }

    #[test]
    fn test_file_takes_priority_over_audio() {
        let mut d = draft(Sender::User);
        d.file = Some(sample_file());
        d.audio_duration = Some("0:14".to_string());
        assert!(matches!(d.classify().content, MessageContent::File { .. }));
    }

    #[test]
    fn test_voice_duration_is_kept_verbatim() {
        let mut d = draft(Sender::User);
        d.audio_duration = Some("0:14".to_string());
        assert_eq!(
            d.classify().content,
            MessageContent::Voice {
                duration: "0:14".to_string()
            }
        );
    }

    #[test]
    fn test_parts_stay_in_order() {
        let mut d = draft(Sender::Ai);
        d.content = Some(DraftContent::Parts(vec![
            MessagePart {
                kind: PartKind::Text,
                content: "first".to_string(),
                language: None,
            },
            MessagePart {
                kind: PartKind::CodeBlock,
                content: "print('hi')".to_string(),
                language: Some("python".to_string()),
            },
            MessagePart {
                kind: PartKind::Text,
                content: "last".to_string(),
                language: None,
            },
        ]));
        match d.classify().content {
            MessageContent::Rich(parts) => {
                assert_eq!(parts.len(), 3);
                assert_eq!(parts[0].content, "first");
                assert_eq!(parts[1].kind, PartKind::CodeBlock);
                assert_eq!(parts[2].content, "last");
            }
            other => panic!("expected rich content, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_parts_fall_back_to_empty_text() {
        let mut d = draft(Sender::Ai);
        d.content = Some(DraftContent::Parts(Vec::new()));
        assert_eq!(d.classify().content, MessageContent::Plain(String::new()));
    }

    #[test]
    fn test_no_shape_at_all_is_empty_text() {
        let d = draft(Sender::Ai);
        assert_eq!(d.classify().content, MessageContent::Plain(String::new()));
    }

    #[test]
    fn test_type_hint_is_not_authoritative() {
        let mut d = draft(Sender::User);
        d.type_hint = Some(MessageTypeHint::Audio);
        d.content = Some(DraftContent::Text("just text".to_string()));
        assert_eq!(
            d.classify().content,
            MessageContent::Plain("just text".to_string())
        );
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let json = r#"{
            "id": "3",
            "sender": "user",
            "type": "file",
            "timestamp": "10:25",
            "content": "Here is the file I mentioned.",
            "file": { "name": "tech_specs_v2.pdf", "size": "1.4 MB", "type": "PDF" }
        }"#;
        let d: MessageDraft = serde_json::from_str(json).unwrap();
        let msg = d.classify();
        assert_eq!(msg.sender, Sender::User);
        assert!(matches!(msg.content, MessageContent::File { .. }));
    }

    #[test]
    fn test_deserializes_part_sequence() {
        let json = r#"{
            "id": "2",
            "sender": "ai",
            "timestamp": "10:24",
            "content": [
                { "type": "text", "content": "Sure, use <code>pdfplumber</code>:" },
                { "type": "code-block", "language": "python", "content": "import pdfplumber" }
            ]
        }"#;
        let d: MessageDraft = serde_json::from_str(json).unwrap();
        match d.classify().content {
            MessageContent::Rich(parts) => {
                assert_eq!(parts[1].language.as_deref(), Some("python"));
            }
            other => panic!("expected rich content, got {:?}", other),
        }
    }
}
