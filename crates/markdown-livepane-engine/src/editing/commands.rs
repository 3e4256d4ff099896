use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::editing::Document;

/// An edit to the document buffer.
///
/// Offsets are byte offsets into the current buffer. Out-of-range offsets
/// are clamped to the buffer and to the nearest earlier char boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Insert `text` at byte offset `at`.
    InsertText { at: usize, text: String },
    /// Remove the bytes in `range`.
    DeleteRange { range: Range<usize> },
    /// Replace the whole buffer, as when a file is opened or a new file started.
    ReplaceAll { text: String },
}

/// Clamps the command's offsets against `doc`; `None` if it would change nothing.
pub(crate) fn normalize_command(doc: &Document, cmd: &Cmd) -> Option<Cmd> {
    match cmd {
        Cmd::InsertText { text, .. } if text.is_empty() => None,
        Cmd::InsertText { at, text } => Some(Cmd::InsertText {
            at: doc.clamp_offset(*at),
            text: text.clone(),
        }),
        Cmd::DeleteRange { range } => {
            let start = doc.clamp_offset(range.start);
            let end = doc.clamp_offset(range.end.max(range.start));
            (end > start).then_some(Cmd::DeleteRange { range: start..end })
        }
        Cmd::ReplaceAll { text } if doc.buffer.is_empty() && text.is_empty() => None,
        Cmd::ReplaceAll { text } => Some(Cmd::ReplaceAll { text: text.clone() }),
    }
}

/// Compiles a normalized command into an xi-rope delta over the current buffer.
pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Delta<RopeInfo> {
    let len = doc.buffer.len();
    let mut builder = Builder::new(len);
    match cmd {
        Cmd::InsertText { at, text } => builder.replace(*at..*at, Rope::from(text.as_str())),
        Cmd::DeleteRange { range } => builder.delete(range.clone()),
        Cmd::ReplaceAll { text } => builder.replace(0..len, Rope::from(text.as_str())),
    }
    builder.build()
}

/// Where the caret lands after a normalized command.
pub(crate) fn selection_after(cmd: &Cmd) -> Range<usize> {
    let caret = match cmd {
        Cmd::InsertText { at, text } => at + text.len(),
        Cmd::DeleteRange { range } => range.start,
        Cmd::ReplaceAll { text } => text.len(),
    };
    caret..caret
}
