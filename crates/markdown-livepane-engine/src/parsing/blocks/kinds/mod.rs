//! # Block Kinds
//!
//! Line-level constructs that own their delimiters: fence lines and
//! heading prefixes. Classification code asks these types; it never
//! hardcodes backticks or hashes.

pub mod code_fence;
pub mod heading;

pub use code_fence::{CodeFence, FenceState};
pub use heading::Heading;
