//! # Rendering
//!
//! Turns a plain-text markdown buffer into an ordered list of styled runs.
//!
//! 1. **Line classification** (`blocks`): each physical line becomes a fence
//!    line, fenced content, a heading, or a paragraph line
//! 2. **Inline styling** (`inline`): paragraph lines are split into plain,
//!    bold, italic, and code spans
//! 3. **Pipeline** (`pipeline`): walks the lines in order, threading the
//!    fence state, and concatenates all runs into a `RenderPass`
//!
//! Rendering is total: every input string renders, malformed markup included.

pub mod blocks;
pub mod inline;
pub mod pipeline;
pub mod rope;
pub mod snapshot;
pub mod style;

#[cfg(test)]
mod tests;

pub use pipeline::{RenderPipeline, render_document, render_str};
pub use style::{RenderPass, StyleTag, StyledRun};
