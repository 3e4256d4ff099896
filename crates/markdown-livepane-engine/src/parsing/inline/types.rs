use crate::parsing::{rope::span::Span, style::StyleTag};

use super::kinds::{CodeSpan, Emphasis, Strong};

/// The four delimited inline token shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// Triple-backtick code on a single line.
    CodeFence,
    /// `**bold**`
    Strong,
    /// `*italic*`
    Emphasis,
    /// Single-backtick code.
    CodeSpan,
}

impl InlineKind {
    /// Every kind, in the order they are tried at each scan position.
    pub const PRECEDENCE: [InlineKind; 4] = [
        InlineKind::CodeFence,
        InlineKind::Strong,
        InlineKind::Emphasis,
        InlineKind::CodeSpan,
    ];

    /// The delimiter that both opens and closes this kind.
    pub fn delimiter(self) -> &'static [u8] {
        match self {
            InlineKind::CodeFence => CodeSpan::FENCE,
            InlineKind::Strong => Strong::DELIM,
            InlineKind::Emphasis => Emphasis::DELIM,
            InlineKind::CodeSpan => CodeSpan::TICK,
        }
    }

    pub fn tag(self) -> StyleTag {
        match self {
            InlineKind::CodeFence | InlineKind::CodeSpan => StyleTag::Code,
            InlineKind::Strong => StyleTag::Bold,
            InlineKind::Emphasis => StyleTag::Italic,
        }
    }
}

/// A scanned inline node with byte spans into the buffer.
///
/// All variants store spans rather than text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Text that isn't part of any delimited token.
    Text(Span),
    /// A delimited token.
    Styled {
        kind: InlineKind,
        /// Full span including both delimiters.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Styled { full, .. } => *full,
        }
    }
}
