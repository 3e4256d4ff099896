//! # Block Classification
//!
//! Each physical line is classified on its own, with a single carried bit of
//! context: whether an odd number of fence lines came before it.
//!
//! ## Modules
//!
//! - **`kinds`**: Types that own their delimiters (`CodeFence`, `Heading`) and
//!   the `FenceState` carried between lines
//! - **`classify`**: `MarkdownLineClassifier` decides a `LineClass` and emits runs
//!
//! ## Key Invariants
//!
//! - A fence line wins over every other rule, inside or outside a fence
//! - Fenced content is a raw zone: no heading or inline interpretation
//! - Heading text is never inline-scanned

pub mod classify;
pub mod kinds;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::{CodeFence, FenceState, Heading};
