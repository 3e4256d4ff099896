//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a `RenderPass` to `RunSnap`s whose `Debug` form
//!   is stored as an `insta` snapshot
//! - **`invariants`**: Runtime checks for renderer correctness (source spans
//!   contiguous and covering the document, run text drawn from its source)
//!
//! Rendering behaviour is pinned by fixture snapshots rather than a separate
//! formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{RunSnap, normalize};
