// src/fixtures.rs
//
// The hardcoded sample data the mock-up runs on. Drafts go through
// MessageDraft::classify so the boundary classification is the only place
// content shapes are decided, same as a real producer would be handled.

use crate::history::{ChatSession, SessionKind};
use crate::message::{
    DraftContent, FileData, Message, MessageDraft, MessagePart, MessageTypeHint, PartKind, Sender,
};

const PDFPLUMBER_EXAMPLE: &str = r#"import pdfplumber

def extract_text_from_pdf(pdf_path):
    with pdfplumber.open(pdf_path) as pdf:
        text = ""
        for page in pdf.pages:
            text += page.extract_text() + "\n"
    return text

# Usage
pdf_text = extract_text_from_pdf("document.pdf")
print(pdf_text)"#;

pub fn initial_messages() -> Vec<Message> {
    let drafts = vec![
        MessageDraft {
            id: "1".to_string(),
            sender: Sender::User,
            timestamp: "10:23".to_string(),
            type_hint: Some(MessageTypeHint::Text),
            content: Some(DraftContent::Text(
                "Hi! I need to write a Python script that parses a PDF file and \
                 extracts the text from it. Can you help?"
                    .to_string(),
            )),
            file: None,
            audio_duration: None,
            is_typing: false,
        },
        MessageDraft {
            id: "2".to_string(),
            sender: Sender::Ai,
            timestamp: "10:24".to_string(),
            type_hint: Some(MessageTypeHint::Text),
            content: Some(DraftContent::Parts(vec![
                MessagePart {
                    kind: PartKind::Text,
                    content: "Sure! For PDFs in Python the usual picks are \
                              <code>PyPDF2</code> or <code>pdfplumber</code>. Here is a \
                              small example with <code>pdfplumber</code>, since it copes \
                              better with complex layouts:"
                        .to_string(),
                    language: None,
                },
                MessagePart {
                    kind: PartKind::CodeBlock,
                    content: PDFPLUMBER_EXAMPLE.to_string(),
                    language: Some("python".to_string()),
                },
                MessagePart {
                    kind: PartKind::Text,
                    content: "You will need to install the library with \
                              <code>pip install pdfplumber</code>."
                        .to_string(),
                    language: None,
                },
            ])),
            file: None,
            audio_duration: None,
            is_typing: false,
        },
        MessageDraft {
            id: "3".to_string(),
            sender: Sender::User,
            timestamp: "10:25".to_string(),
            type_hint: Some(MessageTypeHint::File),
            content: Some(DraftContent::Text(
                "Here is the file I mentioned.".to_string(),
            )),
            file: Some(FileData {
                name: "tech_specs_v2.pdf".to_string(),
                size: "1.4 MB".to_string(),
                type_label: "PDF".to_string(),
            }),
            audio_duration: None,
            is_typing: false,
        },
        MessageDraft {
            id: "4".to_string(),
            sender: Sender::User,
            timestamp: "10:26".to_string(),
            type_hint: Some(MessageTypeHint::Audio),
            content: None,
            file: None,
            audio_duration: Some("0:14".to_string()),
            is_typing: false,
        },
        MessageDraft {
            id: "5".to_string(),
            sender: Sender::Ai,
            timestamp: String::new(),
            type_hint: None,
            content: None,
            file: None,
            audio_duration: None,
            is_typing: true,
        },
    ];

    drafts.into_iter().map(MessageDraft::classify).collect()
}

pub fn initial_sessions() -> Vec<ChatSession> {
    vec![
        ChatSession {
            id: "1".to_string(),
            title: "UI project plan".to_string(),
            date: "14:30".to_string(),
            preview: "Here is the structure for the design system we discussed. It \
                      covers the color palette..."
                .to_string(),
            is_pinned: true,
            kind: SessionKind::Text,
            unread: false,
        },
        ChatSession {
            id: "2".to_string(),
            title: "JSON structure review".to_string(),
            date: "Yesterday".to_string(),
            preview: "Checked your file. There is a mistake in the object array at \
                      line 42. Here is the corrected version."
                .to_string(),
            is_pinned: true,
            kind: SessionKind::Code,
            unread: false,
        },
        ChatSession {
            id: "3".to_string(),
            title: "Borscht recipe".to_string(),
            date: "Tuesday".to_string(),
            preview: "You will need beets, cabbage, potatoes, carrots, an onion and \
                      meat on the bone for the broth."
                .to_string(),
            is_pinned: false,
            kind: SessionKind::Text,
            unread: true,
        },
        ChatSession {
            id: "4".to_string(),
            title: "Untitled".to_string(),
            date: "Oct 23".to_string(),
            preview: "[Voice message] Transcript: how do I set up a Python \
                      environment on a Mac M1?"
                .to_string(),
            is_pinned: false,
            kind: SessionKind::Audio,
            unread: false,
        },
        ChatSession {
            id: "5".to_string(),
            title: "Logo ideas".to_string(),
            date: "Oct 20".to_string(),
            preview: "Generated four cyberpunk-style logo options. Which one do you \
                      like best?"
                .to_string(),
            is_pinned: false,
            kind: SessionKind::Image,
            unread: false,
        },
    ]
}
