pub mod editing;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, LivePreview, Patch};
pub use io::{IoError, display_name, read_file, write_file};
pub use parsing::{RenderPass, RenderPipeline, StyleTag, StyledRun, render_document, render_str};
