//! # Editing
//!
//! The document buffer owned by the editing surface, and the render-on-change
//! contract between it and the preview.
//!
//! - **`document`**: `Document`, an xi-rope buffer with a version counter
//! - **`commands`**: `Cmd` edits compiled to xi-rope deltas
//! - **`patch`**: what an applied command changed
//! - **`preview`**: `LivePreview`, one full render pass per document change
//!
//! The host calls `LivePreview::refresh` whenever it has applied a change;
//! nothing is scheduled implicitly.

pub mod commands;
pub mod document;
pub mod patch;
pub mod preview;

pub use commands::Cmd;
pub use document::Document;
pub use patch::Patch;
pub use preview::LivePreview;
