/// Fenced code delimiter lines.
///
/// A fence line toggles fenced-content mode; whatever follows the backticks
/// (an info string such as `rust`) is ignored, so any fence line both opens
/// and closes.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True if the line, ignoring surrounding whitespace, begins with three backticks.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }
}

/// Whether the render pass is currently inside a fenced code block.
///
/// Starts `Outside` at the top of every pass and only a fence line changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceState {
    #[default]
    Outside,
    Inside,
}

impl FenceState {
    pub fn toggle(&mut self) {
        *self = match self {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        };
    }

    pub fn is_inside(self) -> bool {
        self == FenceState::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_delimiter("```rust\n"));
        assert!(CodeFence::is_delimiter("```"));
    }

    #[test]
    fn indented_fence_counts() {
        assert!(CodeFence::is_delimiter("   ```  \n"));
        assert!(CodeFence::is_delimiter("\t```\n"));
    }

    #[test]
    fn tildes_and_short_runs_are_not_fences() {
        assert!(!CodeFence::is_delimiter("~~~\n"));
        assert!(!CodeFence::is_delimiter("``\n"));
        assert!(!CodeFence::is_delimiter("text ```\n"));
    }

    #[test]
    fn toggle_flips_state() {
        let mut st = FenceState::default();
        assert!(!st.is_inside());
        st.toggle();
        assert!(st.is_inside());
        st.toggle();
        assert_eq!(st, FenceState::Outside);
    }
}
