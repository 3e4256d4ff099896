use crate::parsing::style::StyleTag;

/// ATX-style heading prefixes, levels 1 to 3 only.
///
/// A heading needs the hashes followed by exactly one literal space.
/// `#Title`, `#### Title` and tab-separated markers are ordinary lines.
pub struct Heading;

impl Heading {
    /// Tested in this order, longest first.
    pub const PREFIXES: [(&'static str, StyleTag); 3] = [
        ("### ", StyleTag::Heading3),
        ("## ", StyleTag::Heading2),
        ("# ", StyleTag::Heading1),
    ];

    /// Returns the heading tag and the byte length of the prefix to strip.
    pub fn match_prefix(line: &str) -> Option<(StyleTag, usize)> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(prefix, tag)| (*tag, prefix.len()))
    }
}
