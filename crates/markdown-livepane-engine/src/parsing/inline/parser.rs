use crate::parsing::{
    rope::span::Span,
    style::{StyleTag, StyledRun},
};

use super::{
    cursor::Cursor,
    types::{InlineKind, InlineNode},
};

/// Scans one line into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the buffer where `s` begins (for absolute span positions)
/// - `s`: The line to scan, newline included
///
/// # Precedence
/// At each position the kinds in [`InlineKind::PRECEDENCE`] are tried in
/// order; the first that closes wins. A token closes at the *first* later
/// occurrence of its delimiter, and scanning resumes after that delimiter,
/// so delimiters inside a token are never reinterpreted. An opener that
/// never closes on this line is plain text.
///
/// # Returns
/// Nodes covering the entire input. Text between tokens is merged into
/// `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_token(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Scans one line straight into styled runs.
///
/// Token delimiters are dropped from the run text but stay inside each
/// run's `source` span.
pub fn scan_line(base: usize, s: &str) -> Vec<StyledRun> {
    parse_inline(base, s)
        .into_iter()
        .map(|node| match node {
            InlineNode::Text(sp) => StyledRun::new(&s[sp.local(base)], StyleTag::Plain, sp),
            InlineNode::Styled { kind, full, inner } => {
                StyledRun::new(&s[inner.local(base)], kind.tag(), full)
            }
        })
        .collect()
}

/// Tries each kind in precedence order at the current position.
///
/// On success the cursor sits after the closing delimiter; on failure it
/// has not moved.
fn try_parse_token(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    InlineKind::PRECEDENCE
        .iter()
        .find_map(|&kind| try_parse_delimited(cur, kind))
}

/// Attempts to scan `kind` starting at the current position.
///
/// Returns `None` if the opener is absent or never closes.
fn try_parse_delimited(cur: &mut Cursor<'_>, kind: InlineKind) -> Option<InlineNode> {
    let delim = kind.delimiter();
    if !cur.starts_with(delim) {
        return None;
    }

    let mut probe = cur.clone();
    let start = probe.pos();
    probe.bump_n(delim.len());
    let inner_start = probe.pos();

    let close = probe.find(delim)?;
    probe.seek(close);
    let inner_end = probe.pos();
    probe.bump_n(delim.len());
    let end = probe.pos();

    *cur = probe;
    Some(InlineNode::Styled {
        kind,
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn runs(s: &str) -> Vec<(String, StyleTag)> {
        scan_line(0, s)
            .into_iter()
            .map(|r| (r.text, r.tag))
            .collect()
    }

    fn r(text: &str, tag: StyleTag) -> (String, StyleTag) {
        (text.to_string(), tag)
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 11 })]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline(0, "`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::Styled {
                kind: InlineKind::CodeSpan,
                full: Span { start: 0, end: 6 },
                inner: Span { start: 1, end: 5 },
            }]
        );
    }

    #[test]
    fn spans_are_absolute() {
        let nodes = parse_inline(100, "a *b*");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(Span { start: 100, end: 102 }),
                InlineNode::Styled {
                    kind: InlineKind::Emphasis,
                    full: Span { start: 102, end: 105 },
                    inner: Span { start: 103, end: 104 },
                },
            ]
        );
    }

    #[test]
    fn bold_suppresses_inner_italic() {
        use StyleTag::*;
        assert_eq!(
            runs("a **b *c* d** e"),
            vec![r("a ", Plain), r("b *c* d", Bold), r(" e", Plain)]
        );
    }

    #[test]
    fn unmatched_asterisk_is_plain() {
        assert_eq!(runs("a *b"), vec![r("a *b", StyleTag::Plain)]);
    }

    #[test]
    fn code_fence_token_beats_everything() {
        use StyleTag::*;
        assert_eq!(
            runs("x ```a **b** c``` y"),
            vec![r("x ", Plain), r("a **b** c", Code), r(" y", Plain)]
        );
    }

    #[test]
    fn code_span_is_raw_zone() {
        use StyleTag::*;
        assert_eq!(
            runs("`*not italic*` *yes*"),
            vec![r("*not italic*", Code), r(" ", Plain), r("yes", Italic)]
        );
    }

    #[rstest]
    #[case::empty_bold_pair("****", vec![r("", StyleTag::Bold)])]
    #[case::lone_double_star_is_empty_italic("a ** b", vec![
        r("a ", StyleTag::Plain), r("", StyleTag::Italic), r(" b", StyleTag::Plain),
    ])]
    #[case::empty_tick_pair("``", vec![r("", StyleTag::Code)])]
    #[case::unclosed_triple_falls_back_to_ticks("```a", vec![
        r("", StyleTag::Code), r("`a", StyleTag::Plain),
    ])]
    #[case::shortest_span_wins("*a* b*", vec![
        r("a", StyleTag::Italic), r(" b*", StyleTag::Plain),
    ])]
    #[case::triple_star_is_bold_then_text("***a***", vec![
        r("*a", StyleTag::Bold), r("*", StyleTag::Plain),
    ])]
    #[case::bold_unclosed_italic_closes("**a*", vec![
        r("", StyleTag::Italic), r("a*", StyleTag::Plain),
    ])]
    fn delimiter_edge_cases(#[case] input: &str, #[case] expected: Vec<(String, StyleTag)>) {
        assert_eq!(runs(input), expected);
    }

    #[test]
    fn empty_line_has_no_runs() {
        assert!(scan_line(0, "").is_empty());
    }

    #[test]
    fn newline_stays_in_trailing_plain_run() {
        use StyleTag::*;
        assert_eq!(
            runs("Some **bold** and `code`.\n"),
            vec![
                r("Some ", Plain),
                r("bold", Bold),
                r(" and ", Plain),
                r("code", Code),
                r(".\n", Plain),
            ]
        );
    }

    #[test]
    fn multibyte_text_survives() {
        use StyleTag::*;
        assert_eq!(
            runs("héllo *wörld* ✓"),
            vec![r("héllo ", Plain), r("wörld", Italic), r(" ✓", Plain)]
        );
    }

    #[test]
    fn source_spans_cover_line_contiguously() {
        let line = "p **b** `c` *i* ```f``` q\n";
        let out = scan_line(7, line);
        let mut at = 7;
        for run in &out {
            assert_eq!(run.source.start, at);
            at = run.source.end;
        }
        assert_eq!(at, 7 + line.len());
    }
}
