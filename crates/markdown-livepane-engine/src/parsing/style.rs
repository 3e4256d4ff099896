use super::rope::Span;

/// Semantic label attached to a run. The view decides what each tag looks like.
///
/// Tags never compose: a run is bold or italic or code, never a mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleTag {
    Plain,
    Heading1,
    Heading2,
    Heading3,
    Bold,
    Italic,
    Code,
}

impl StyleTag {
    pub const ALL: [StyleTag; 7] = [
        StyleTag::Plain,
        StyleTag::Heading1,
        StyleTag::Heading2,
        StyleTag::Heading3,
        StyleTag::Bold,
        StyleTag::Italic,
        StyleTag::Code,
    ];

    /// Stable lower-case name, also used as the palette key in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Plain => "plain",
            StyleTag::Heading1 => "heading1",
            StyleTag::Heading2 => "heading2",
            StyleTag::Heading3 => "heading3",
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::Code => "code",
        }
    }

    /// Maps a heading level to its tag; only levels 1 to 3 exist.
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(StyleTag::Heading1),
            2 => Some(StyleTag::Heading2),
            3 => Some(StyleTag::Heading3),
            _ => None,
        }
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The atomic unit of render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Text to display, with markup delimiters and heading prefixes removed.
    pub text: String,
    pub tag: StyleTag,
    /// Source bytes this run was derived from, consumed markup included.
    pub source: Span,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, tag: StyleTag, source: Span) -> Self {
        Self {
            text: text.into(),
            tag,
            source,
        }
    }
}

/// The complete output of one render pass over a document snapshot.
///
/// A pass is a fresh value: nothing carries over from the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPass {
    pub runs: Vec<StyledRun>,
}

impl RenderPass {
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledRun> {
        self.runs.iter()
    }

    /// Concatenated display text of every run, in order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl IntoIterator for RenderPass {
    type Item = StyledRun;
    type IntoIter = std::vec::IntoIter<StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderPass {
    type Item = &'a StyledRun;
    type IntoIter = std::slice::Iter<'a, StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
