use log::trace;

use crate::parsing::{
    inline::scan_line,
    rope::{lines::LineRef, span::Span},
    style::{StyleTag, StyledRun},
};

use super::kinds::{CodeFence, FenceState, Heading};

/// Block-level category of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// A fence line; flips the fence state.
    FenceDelimiter,
    /// A line between fences, emitted verbatim.
    FencedContent,
    /// A heading line with the prefix byte length to strip.
    Heading { tag: StyleTag, prefix_len: usize },
    /// Anything else; handed to the inline scanner.
    Paragraph,
}

/// Classifies individual lines and emits their runs.
///
/// Rules in priority order: fence line, fenced content, heading
/// (`### `, `## `, `# `), then paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Decides the category of `line` given the fence state before it.
    pub fn classify(&self, line: &str, fence: FenceState) -> LineClass {
        if CodeFence::is_delimiter(line) {
            return LineClass::FenceDelimiter;
        }
        if fence.is_inside() {
            return LineClass::FencedContent;
        }
        match Heading::match_prefix(line) {
            Some((tag, prefix_len)) => LineClass::Heading { tag, prefix_len },
            None => LineClass::Paragraph,
        }
    }

    /// Classifies `line`, updates `fence`, and appends the line's runs to `out`.
    pub fn emit(&self, line: &LineRef, fence: &mut FenceState, out: &mut Vec<StyledRun>) {
        let class = self.classify(&line.text, *fence);
        trace!("line {:?}: {:?}", line.span, class);

        match class {
            LineClass::FenceDelimiter => {
                fence.toggle();
                out.push(StyledRun::new(line.text.as_str(), StyleTag::Code, line.span));
            }
            LineClass::FencedContent => {
                out.push(StyledRun::new(line.text.as_str(), StyleTag::Code, line.span));
            }
            LineClass::Heading { tag, prefix_len } => {
                out.push(StyledRun::new(&line.text[prefix_len..], tag, line.span));
            }
            LineClass::Paragraph => {
                out.extend(scan_line(line.span.start, &line.text));
            }
        }
    }

    /// Convenience for callers holding a bare line: emits at offset `base`.
    pub fn emit_str(&self, base: usize, line: &str, fence: &mut FenceState) -> Vec<StyledRun> {
        let lr = LineRef {
            span: Span::new(base, base + line.len()),
            text: line.to_string(),
        };
        let mut out = vec![];
        self.emit(&lr, fence, &mut out);
        out
    }
}
