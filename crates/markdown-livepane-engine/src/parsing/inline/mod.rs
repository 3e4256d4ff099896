//! # Inline Styling
//!
//! Cursor-based scanning of a single paragraph line into styled spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (Text, Styled) and `InlineKind`
//! - **`kinds`**: Types that own the delimiters (`CodeSpan`, `Strong`, `Emphasis`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` and `scan_line()` entry points
//!
//! ## Precedence
//!
//! At every position: triple-backtick code, then `**bold**`, then `*italic*`,
//! then single-backtick code. Tokens never nest and never cross a line.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, scan_line};
pub use types::{InlineKind, InlineNode};
