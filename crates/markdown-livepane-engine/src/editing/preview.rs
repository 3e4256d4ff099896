use log::debug;

use crate::{
    editing::Document,
    parsing::{RenderPass, RenderPipeline},
};

/// Keeps the preview in step with a document.
///
/// Each change to the document triggers one full render pass; asking again
/// without a change returns the previous pass. There is no debouncing.
#[derive(Debug, Default)]
pub struct LivePreview {
    pipeline: RenderPipeline,
    rendered_version: Option<u64>,
    pass: RenderPass,
    passes: u64,
}

impl LivePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-renders if `doc` changed since the last refresh.
    pub fn refresh(&mut self, doc: &Document) -> &RenderPass {
        if self.rendered_version != Some(doc.version()) {
            self.pass = self.pipeline.render(&doc.snapshot());
            self.rendered_version = Some(doc.version());
            self.passes += 1;
            debug!(
                "preview refreshed for version {} (pass {})",
                doc.version(),
                self.passes
            );
        }
        &self.pass
    }

    /// Forces the next refresh to re-render, e.g. after swapping in a
    /// different `Document`.
    pub fn invalidate(&mut self) {
        self.rendered_version = None;
    }

    /// How many full render passes have run.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
