//! Whole-pipeline properties of the renderer.

use pretty_assertions::assert_eq;
use regex::Regex;
use xi_rope::Rope;

use crate::parsing::{
    blocks::CodeFence,
    inline::{InlineNode, parse_inline},
    render_document, render_str,
    rope::{Span, lines_with_spans},
    snapshot,
    style::{StyleTag, StyledRun},
};

fn tagged(src: &str) -> Vec<(String, StyleTag)> {
    render_str(src)
        .into_iter()
        .map(|r| (r.text, r.tag))
        .collect()
}

fn r(text: &str, tag: StyleTag) -> (String, StyleTag) {
    (text.to_string(), tag)
}

#[test]
fn scenario_document() {
    use StyleTag::*;
    let md = "# Title\n\nSome **bold** and `code`.\n```\nraw *text*\n```\n";
    assert_eq!(
        tagged(md),
        vec![
            r("Title\n", Heading1),
            r("\n", Plain),
            r("Some ", Plain),
            r("bold", Bold),
            r(" and ", Plain),
            r("code", Code),
            r(".\n", Plain),
            r("```\n", Code),
            r("raw *text*\n", Code),
            r("```\n", Code),
        ]
    );
}

#[test]
fn heading_priority() {
    assert_eq!(tagged("### Title\n"), vec![r("Title\n", StyleTag::Heading3)]);
    assert_eq!(tagged("## Title\n"), vec![r("Title\n", StyleTag::Heading2)]);
    assert_eq!(tagged("#Title\n"), vec![r("#Title\n", StyleTag::Plain)]);
}

#[test]
fn fence_suppresses_inline_scanning() {
    let runs = render_str("```\n**not bold**\n");
    assert_eq!(
        runs.runs()[1],
        StyledRun::new("**not bold**\n", StyleTag::Code, Span::new(4, 17))
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    use StyleTag::*;
    assert_eq!(
        tagged("```\n# still code\n*x*"),
        vec![r("```\n", Code), r("# still code\n", Code), r("*x*", Code)]
    );
}

#[test]
fn plain_documents_render_losslessly() {
    for md in [
        "",
        "\n",
        "just text",
        "line one\nline two\n\n\nlast",
        "#Hashtag and #### four\n a *b\n",
        "```\nfenced **x**\n```\nafter\n",
        "crlf line\r\nnext\r\n",
    ] {
        assert_eq!(render_str(md).text(), md, "display text differs for {md:?}");
    }
}

#[test]
fn source_spans_always_cover_document() {
    for md in [
        "# H\n## H2\n### H3\n#### H4\n",
        "a **b *c* d** e\n`x` ```y``` *z*\n",
        "```\n```\n```\nopen",
        "****\n``\n***a***\n",
        "ünïcødé *ïtalic* `cødé`\n",
    ] {
        let rope = Rope::from(md);
        snapshot::invariants(&rope, &render_document(&rope));
    }
}

#[test]
fn rendering_is_idempotent() {
    let md = "# T\n\n**b** *i* `c`\n```\nx\n";
    let rope = Rope::from(md);
    assert_eq!(render_document(&rope), render_document(&rope));
}

#[test]
fn fence_parity_decides_containment() {
    let lines = [
        "**x**\n", "```\n", "**x**\n", "**x**\n", "```\n", "**x**\n", "  ```py\n", "**x**\n",
    ];
    let md: String = lines.concat();
    let rope = Rope::from(md.as_str());
    let pass = render_document(&rope);

    let mut fences_before = 0;
    for lr in lines_with_spans(&rope) {
        let line_runs: Vec<_> = pass
            .iter()
            .filter(|run| run.source.start >= lr.span.start && run.source.end <= lr.span.end)
            .collect();

        if CodeFence::is_delimiter(&lr.text) {
            fences_before += 1;
            continue;
        }
        if fences_before % 2 == 1 {
            assert_eq!(line_runs.len(), 1, "fenced line {:?}", lr.span);
            assert_eq!(line_runs[0].tag, StyleTag::Code);
            assert_eq!(line_runs[0].text, lr.text);
        } else {
            assert_eq!(line_runs[0].tag, StyleTag::Bold, "open line {:?}", lr.span);
        }
    }
}

#[test]
fn each_pass_starts_outside_fence() {
    // A previous pass ending inside a fence must not leak into the next one.
    let _ = render_str("```\nopen");
    assert_eq!(tagged("*x*"), vec![r("x", StyleTag::Italic)]);
}

/// Token boundaries from the explicit scanner match a leftmost-first
/// alternation with lazy bodies, tried in the same precedence order.
#[test]
fn scanner_agrees_with_alternation_pattern() {
    let re = Regex::new(r"```.*?```|\*\*.*?\*\*|\*.*?\*|`.*?`").unwrap();

    let alphabet = ['a', '*', '`', ' '];
    let mut inputs = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..6 {
        frontier = frontier
            .iter()
            .flat_map(|s| alphabet.iter().map(move |c| format!("{s}{c}")))
            .collect();
        inputs.extend(frontier.iter().cloned());
    }

    for s in &inputs {
        let expected: Vec<_> = re.find_iter(s).map(|m| m.start()..m.end()).collect();
        let actual: Vec<_> = parse_inline(0, s)
            .into_iter()
            .filter_map(|n| match n {
                InlineNode::Styled { full, .. } => Some(full.start..full.end),
                InlineNode::Text(_) => None,
            })
            .collect();
        assert_eq!(actual, expected, "token boundaries differ for {s:?}");
    }
}
