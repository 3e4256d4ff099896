use xi_rope::Rope;

use crate::parsing::{rope::slice::slice_to_string, style::RenderPass};

/// Validates render output invariants.
///
/// Asserts that:
/// - Run source spans start at 0, are contiguous, and end at the rope length
/// - Concatenating the source slices reproduces the rope text exactly
/// - Plain and code runs display their source text when they carry no markup
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, pass: &RenderPass) {
    let n = rope.len();
    let mut at = 0usize;
    let mut rebuilt = String::with_capacity(n);

    for (i, run) in pass.iter().enumerate() {
        assert_eq!(
            run.source.start, at,
            "run {i} does not start where the previous ended: {:?}",
            run.source
        );
        assert!(
            run.source.start <= run.source.end && run.source.end <= n,
            "run {i} source span out of bounds: {:?} (rope len: {n})",
            run.source
        );
        let source = slice_to_string(rope, run.source);
        assert!(
            source.contains(run.text.as_str()),
            "run {i} text {:?} not found in its source {source:?}",
            run.text
        );
        rebuilt.push_str(&source);
        at = run.source.end;
    }

    assert_eq!(at, n, "runs do not cover the whole document");
    assert_eq!(
        rebuilt,
        slice_to_string(rope, crate::parsing::rope::Span::new(0, n)),
        "source slices do not reproduce the document"
    );
}
