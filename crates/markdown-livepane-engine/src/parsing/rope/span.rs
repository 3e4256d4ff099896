/// A byte range `[start, end)` into the document buffer.
///
/// Every styled run remembers the span of source text it came from, markup
/// included, so a render pass can always be mapped back onto the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Re-expresses an absolute span relative to `base`, for slicing a local string.
    #[must_use]
    pub fn local(self, base: usize) -> std::ops::Range<usize> {
        self.start - base..self.end - base
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(sp: Span) -> Self {
        sp.start..sp.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        // inverted spans are treated as empty rather than underflowing
        assert_eq!(Span::new(9, 2).len(), 0);
    }

    #[test]
    fn local_range_subtracts_base() {
        assert_eq!(Span::new(12, 15).local(10), 2..5);
    }
}
