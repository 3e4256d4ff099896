use log::debug;
use xi_rope::Rope;

use super::{
    blocks::{FenceState, MarkdownLineClassifier},
    rope::lines_with_spans,
    style::RenderPass,
};

/// Walks a document snapshot line by line and collects every run.
///
/// The whole document is re-tokenized on every call; there is no
/// incremental update and no state survives between passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderPipeline {
    classifier: MarkdownLineClassifier,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, rope: &Rope) -> RenderPass {
        let mut fence = FenceState::default();
        let mut runs = vec![];
        let mut lines = 0usize;

        for lr in lines_with_spans(rope) {
            self.classifier.emit(&lr, &mut fence, &mut runs);
            lines += 1;
        }

        debug!(
            "render pass: {lines} lines, {} runs, {} bytes{}",
            runs.len(),
            rope.len(),
            if fence.is_inside() {
                ", unterminated fence"
            } else {
                ""
            }
        );
        RenderPass { runs }
    }
}

/// Renders a rope snapshot into styled runs.
pub fn render_document(rope: &Rope) -> RenderPass {
    RenderPipeline::new().render(rope)
}

/// Renders plain text; convenience for hosts that keep a `String` buffer.
pub fn render_str(text: &str) -> RenderPass {
    render_document(&Rope::from(text))
}
