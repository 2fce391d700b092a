// src/clipboard.rs
//
// The two copy actions the renderer advertises. Both take the textual
// payload and leave the message data untouched.

use copypasta::{ClipboardContext, ClipboardProvider};

use crate::errors::{ParlorError, ParlorResult};
use crate::message::{Message, MessagePart};

pub fn copy_to_clipboard(payload: &str) -> ParlorResult<()> {
    let mut ctx = ClipboardContext::new()
        .map_err(|e| ParlorError::clipboard_error(e.to_string()))?;
    ctx.set_contents(payload.to_owned())
        .map_err(|e| ParlorError::clipboard_error(e.to_string()))
}

/// Copies a message's plain-text rendition (markup stripped, code verbatim).
pub fn copy_message(msg: &Message) -> ParlorResult<()> {
    copy_to_clipboard(&msg.copy_text())
}

/// Copies one code block's source text.
pub fn copy_code(part: &MessagePart) -> ParlorResult<()> {
    copy_to_clipboard(&part.content)
}
