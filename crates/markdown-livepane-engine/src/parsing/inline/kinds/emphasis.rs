/// Bold text: `**strong**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8] = b"**";
}

/// Italic text: `*emphasis*`.
///
/// Tried after [`Strong`], so a `**` pair is never read as two italics.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static [u8] = b"*";
}
