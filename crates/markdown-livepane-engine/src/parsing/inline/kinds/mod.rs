//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `FENCE = b"```"` and `TICK = b"`"`, both raw zones
//! - **`Strong`**: `DELIM = b"**"`
//! - **`Emphasis`**: `DELIM = b"*"`
//!
//! All delimiter constants live here; the parser never hardcodes them.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
