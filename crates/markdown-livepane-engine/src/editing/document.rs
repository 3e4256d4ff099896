use std::ops::Range;

use log::{debug, warn};
use xi_rope::{Delta, Rope, RopeInfo, delta::DeltaElement};

use crate::{
    editing::{
        Cmd, Patch,
        commands::{compile_command, normalize_command, selection_after},
    },
    parsing::{RenderPass, render_document},
};

/// The editing surface's buffer.
///
/// The whole document lives in one `xi_rope::Rope`. Edits arrive as
/// [`Cmd`]s, compile to deltas, and bump `version`; rendering reads a
/// snapshot of the rope and never mutates it. Saving writes the rope bytes
/// verbatim.
///
/// ```rust
/// # use markdown_livepane_engine::{Cmd, Document, StyleTag};
/// let mut doc = Document::from_bytes(b"# Hello\n").unwrap();
/// doc.apply(Cmd::InsertText { at: 8, text: "*hi*".to_string() });
///
/// let pass = doc.render();
/// assert_eq!(pass.runs()[0].tag, StyleTag::Heading1);
/// assert_eq!(pass.runs()[1].tag, StyleTag::Italic);
/// assert_eq!(doc.text(), "# Hello\n*hi*");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    /// xi-rope buffer containing the entire document as UTF-8
    pub(crate) buffer: Rope,
    /// Current selection/cursor position as byte offsets in buffer
    pub(crate) selection: Range<usize>,
    /// Incremented on each edit that changes the buffer
    pub(crate) version: u64,
}

impl Document {
    /// An empty, untitled document.
    pub fn new() -> Self {
        Self {
            buffer: Rope::from(""),
            selection: 0..0,
            version: 0,
        }
    }

    /// Create a new document from raw bytes, which must be valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);
        let len = buffer.len();
        Ok(Self {
            buffer,
            selection: len..len,
            version: 0,
        })
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }

    pub fn text(&self) -> String {
        self.buffer.slice_to_cow(..).into_owned()
    }

    /// A cheap immutable copy of the buffer for a render pass.
    pub fn snapshot(&self) -> Rope {
        self.buffer.clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of lines as an editor shows them: a trailing newline opens an
    /// empty last line, and an empty document has one line.
    pub fn line_count(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len()) + 1
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn set_selection(&mut self, selection: Range<usize>) {
        let start = self.clamp_offset(selection.start);
        let end = self.clamp_offset(selection.end.max(selection.start));
        self.selection = start..end;
    }

    /// Apply an edit command to the buffer.
    ///
    /// Commands that would change nothing (empty inserts, empty deletes)
    /// leave the version alone and return a patch with no changed ranges.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let Some(cmd) = normalize_command(self, &cmd) else {
            return Patch {
                changed: vec![],
                new_selection: self.selection(),
                version: self.version,
            };
        };

        let delta = compile_command(self, &cmd);
        let changed = changed_ranges(&delta);
        self.buffer = delta.apply(&self.buffer);
        self.selection = selection_after(&cmd);
        self.version += 1;

        debug!(
            "applied {cmd:?}: version {}, {} bytes",
            self.version,
            self.buffer.len()
        );
        Patch {
            changed,
            new_selection: self.selection(),
            version: self.version,
        }
    }

    /// Render the current buffer into styled runs.
    pub fn render(&self) -> RenderPass {
        render_document(&self.buffer)
    }

    /// Maps a byte offset to a `(line, byte column)` pair, both 0-based.
    pub fn offset_to_point(&self, offset: usize) -> (usize, usize) {
        let offset = self.clamp_offset(offset);
        let line = self.buffer.line_of_offset(offset);
        (line, offset - self.buffer.offset_of_line(line))
    }

    /// Maps a `(line, byte column)` pair to a byte offset.
    ///
    /// Lines past the end clamp to the last line; columns past the end of
    /// the line clamp to just before its newline.
    pub fn point_to_offset(&self, line: usize, col: usize) -> usize {
        let last = self.line_count() - 1;
        let line = line.min(last);
        let start = self.buffer.offset_of_line(line);
        let end = if line < last {
            self.buffer.offset_of_line(line + 1) - 1
        } else {
            self.buffer.len()
        };
        self.clamp_offset(start.saturating_add(col).min(end))
    }

    /// Clamps to the buffer and backs off to a char boundary.
    pub(crate) fn clamp_offset(&self, offset: usize) -> usize {
        let len = self.buffer.len();
        if offset > len {
            warn!("offset {offset} past end of buffer ({len} bytes), clamping");
        }
        let mut at = offset.min(len);
        while !self.buffer.is_codepoint_boundary(at) {
            at -= 1;
        }
        at
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Post-edit ranges touched by a delta: inserted text, plus an empty range
/// wherever bytes were removed.
fn changed_ranges(delta: &Delta<RopeInfo>) -> Vec<Range<usize>> {
    fn mark(changed: &mut Vec<Range<usize>>, r: Range<usize>) {
        if r.is_empty() && changed.last().is_some_and(|last| last.end == r.start) {
            return;
        }
        changed.push(r);
    }

    let mut changed = vec![];
    let mut old_pos = 0;
    let mut cursor = 0;
    for el in &delta.els {
        match el {
            DeltaElement::Copy(from, to) => {
                if *from > old_pos {
                    mark(&mut changed, cursor..cursor);
                }
                cursor += to - from;
                old_pos = *to;
            }
            DeltaElement::Insert(inserted) => {
                mark(&mut changed, cursor..cursor + inserted.len());
                cursor += inserted.len();
            }
        }
    }
    if old_pos < delta.base_len {
        mark(&mut changed, cursor..cursor);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::StyleTag;
    use pretty_assertions::assert_eq;

    fn doc(text: &str) -> Document {
        Document::from_bytes(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_document_from_bytes_valid_utf8() {
        let text = "# Hello World\n\nThis is a test document.";
        let d = doc(text);
        assert_eq!(d.to_bytes(), text.as_bytes());
        assert_eq!(d.version(), 0);
        assert_eq!(d.selection(), text.len()..text.len());
    }

    #[test]
    fn test_document_from_bytes_invalid_utf8() {
        let result = Document::from_bytes(&[0xFF, 0xFE, 0xFD]);
        assert!(result.is_err());
    }

    #[test]
    fn new_document_is_empty() {
        let d = Document::new();
        assert!(d.is_empty());
        assert_eq!(d.line_count(), 1);
        assert!(d.render().is_empty());
    }

    #[test]
    fn insert_updates_text_selection_and_version() {
        let mut d = doc("Hello");
        let patch = d.apply(Cmd::InsertText {
            at: 5,
            text: " there".into(),
        });
        assert_eq!(d.text(), "Hello there");
        assert_eq!(patch.changed, vec![5..11]);
        assert_eq!(patch.new_selection, 11..11);
        assert_eq!(patch.version, 1);
        assert_eq!(d.version(), 1);
    }

    #[test]
    fn delete_reports_empty_changed_range() {
        let mut d = doc("Hello World");
        let patch = d.apply(Cmd::DeleteRange { range: 5..11 });
        assert_eq!(d.text(), "Hello");
        assert_eq!(patch.changed, vec![5..5]);
        assert!(patch.is_edit());
        assert_eq!(d.selection(), 5..5);
    }

    #[test]
    fn replace_all_swaps_content() {
        let mut d = doc("old content");
        let patch = d.apply(Cmd::ReplaceAll {
            text: "new".into(),
        });
        assert_eq!(d.text(), "new");
        assert_eq!(patch.changed, vec![0..3]);
        assert_eq!(d.selection(), 3..3);
    }

    #[test]
    fn no_op_keeps_version() {
        let mut d = doc("abc");
        let patch = d.apply(Cmd::DeleteRange { range: 1..1 });
        assert!(!patch.is_edit());
        assert_eq!(patch.version, 0);
        assert_eq!(d.version(), 0);
    }

    #[test]
    fn round_trip_preserves_bytes() {
        let text = "# T\r\n\n```\n  code\t\n```\nünï *x*";
        assert_eq!(doc(text).text(), text);
    }

    #[test]
    fn render_follows_edits() {
        let mut d = doc("title\n");
        assert_eq!(d.render().runs()[0].tag, StyleTag::Plain);
        d.apply(Cmd::InsertText {
            at: 0,
            text: "# ".into(),
        });
        let pass = d.render();
        assert_eq!(pass.runs()[0].tag, StyleTag::Heading1);
        assert_eq!(pass.runs()[0].text, "title\n");
    }

    #[test]
    fn points_and_offsets() {
        let d = doc("ab\ncde\n");
        assert_eq!(d.line_count(), 3);
        assert_eq!(d.offset_to_point(0), (0, 0));
        assert_eq!(d.offset_to_point(4), (1, 1));
        assert_eq!(d.offset_to_point(7), (2, 0));
        assert_eq!(d.point_to_offset(1, 2), 5);
        // column past end of line clamps before the newline
        assert_eq!(d.point_to_offset(0, 10), 2);
        // line past end clamps to the last line
        assert_eq!(d.point_to_offset(9, 0), 7);
    }

    #[test]
    fn set_selection_clamps() {
        let mut d = doc("aé");
        d.set_selection(2..50);
        assert_eq!(d.selection(), 1..3);
    }
}
