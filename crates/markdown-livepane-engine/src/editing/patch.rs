use std::ops::Range;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges of inserted text, in post-edit offsets.
    pub changed: Vec<Range<usize>>,
    pub new_selection: Range<usize>,
    pub version: u64,
}

impl Patch {
    /// True when the command changed the buffer.
    pub fn is_edit(&self) -> bool {
        !self.changed.is_empty()
    }
}
