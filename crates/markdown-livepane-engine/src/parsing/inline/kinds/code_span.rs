/// Inline code, in its two delimiter shapes.
///
/// Code spans are raw zones: nothing inside them is reinterpreted.
pub struct CodeSpan;

impl CodeSpan {
    /// Single backtick, the lowest-priority inline token.
    pub const TICK: &'static [u8] = b"`";
    /// Triple backtick used inline, the highest-priority token.
    pub const FENCE: &'static [u8] = b"```";
}
