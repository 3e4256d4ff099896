use std::ops::Range;

use xi_rope::Rope;

use crate::parsing::{
    rope::slice::preview,
    style::{RenderPass, StyleTag},
};

/// Snapshot of a single run for testing with `insta`.
///
/// `source` is a preview of the bytes the run came from, so snapshots show
/// which markup was consumed.
#[derive(Debug)]
pub struct RunSnap {
    pub tag: StyleTag,
    pub span: Range<usize>,
    pub text: String,
    pub source: String,
}

/// Converts a render pass into a stable, readable form for snapshot tests.
pub fn normalize(rope: &Rope, pass: &RenderPass) -> Vec<RunSnap> {
    pass.iter()
        .map(|run| RunSnap {
            tag: run.tag,
            span: run.source.into(),
            text: run.text.clone(),
            source: preview(rope, run.source, 60),
        })
        .collect()
}
