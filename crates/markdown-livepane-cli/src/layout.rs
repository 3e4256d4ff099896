//! Soft-wraps text into display rows of a fixed cell width.
//!
//! Both panes go through the same wrapper, so the caret's screen position
//! comes from the same arithmetic that placed the glyphs.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

pub const TAB_WIDTH: usize = 4;

/// Accumulates glyphs into rows no wider than `width` cells.
struct Rows {
    width: usize,
    col: usize,
    done: Vec<Line<'static>>,
    row: Vec<Span<'static>>,
    buf: String,
    style: Style,
}

impl Rows {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            col: 0,
            done: Vec::new(),
            row: Vec::new(),
            buf: String::new(),
            style: Style::default(),
        }
    }

    fn set_style(&mut self, style: Style) {
        if style != self.style {
            self.flush();
            self.style = style;
        }
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            let text = std::mem::take(&mut self.buf);
            self.row.push(Span::styled(text, self.style));
        }
    }

    fn break_row(&mut self) {
        self.flush();
        self.done.push(Line::from(std::mem::take(&mut self.row)));
        self.col = 0;
    }

    /// Tabs expand to the next tab stop; other control characters take no cells.
    fn put(&mut self, c: char) {
        if c == '\t' {
            for _ in 0..TAB_WIDTH - self.col % TAB_WIDTH {
                self.put_cell(' ', 1);
            }
        } else if !c.is_control() {
            self.put_cell(c, c.width().unwrap_or(0));
        }
    }

    fn put_cell(&mut self, c: char, w: usize) {
        if self.col > 0 && self.col + w > self.width {
            self.break_row();
        }
        self.buf.push(c);
        self.col += w;
    }

    /// Row and column the next glyph would be drawn at. On a full row this
    /// is the last cell, as a terminal's pending wrap shows it.
    fn position(&self) -> (usize, usize) {
        (self.done.len(), self.col.min(self.width - 1))
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.break_row();
        self.done
    }
}

/// Wraps one logical line, given as styled pieces, into display rows.
/// An empty line still takes one row.
pub fn wrap_line<'a>(
    pieces: impl IntoIterator<Item = (&'a str, Style)>,
    width: usize,
) -> Vec<Line<'static>> {
    let mut rows = Rows::new(width);
    for (text, style) in pieces {
        rows.set_style(style);
        text.chars().for_each(|c| rows.put(c));
    }
    rows.finish()
}

/// `(row, column)` of the caret when it sits after `prefix` on its line.
pub fn caret_cell(prefix: &str, width: usize) -> (usize, usize) {
    let mut rows = Rows::new(width);
    prefix.chars().for_each(|c| rows.put(c));
    rows.position()
}

/// Wrapped rows for a list of logical lines, plus the first row of each line.
pub struct Wrapped {
    pub rows: Vec<Line<'static>>,
    pub line_starts: Vec<usize>,
}

impl Wrapped {
    pub fn new(lines: impl IntoIterator<Item = Vec<Line<'static>>>) -> Self {
        let mut rows = Vec::new();
        let mut line_starts = Vec::new();
        for wrapped in lines {
            line_starts.push(rows.len());
            rows.extend(wrapped);
        }
        Self { rows, line_starts }
    }

    /// Logical line shown on display row `row`.
    pub fn line_at_row(&self, row: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= row)
            .saturating_sub(1)
    }

    /// First display row of logical line `line`, clamped to the last line.
    pub fn row_of_line(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .or(self.line_starts.last())
            .copied()
            .unwrap_or(0)
    }

    /// `height` rows starting at `scroll`.
    pub fn window(&self, scroll: usize, height: usize) -> Vec<Line<'static>> {
        self.rows.iter().skip(scroll).take(height).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(rows: &[Line]) -> Vec<String> {
        rows.iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn plain(text: &str, width: usize) -> Vec<String> {
        texts(&wrap_line([(text, Style::default())], width))
    }

    #[test]
    fn test_short_line_is_one_row() {
        assert_eq!(plain("abc", 10), vec!["abc"]);
        assert_eq!(plain("", 10), vec![""]);
    }

    #[test]
    fn test_long_line_wraps_at_width() {
        assert_eq!(plain("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_tabs_expand_to_tab_stops() {
        assert_eq!(plain("a\tb", 20), vec!["a   b"]);
        assert_eq!(plain("\tx", 20), vec!["    x"]);
    }

    #[test]
    fn test_wide_chars_take_two_cells() {
        assert_eq!(plain("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_carriage_return_is_not_drawn() {
        assert_eq!(plain("line\r", 10), vec!["line"]);
    }

    #[test]
    fn test_styles_survive_a_wrap() {
        let bold = Style::default().add_modifier(ratatui::style::Modifier::BOLD);
        let rows = wrap_line([("ab", Style::default()), ("cd", bold)], 3);

        assert_eq!(texts(&rows), vec!["abc", "d"]);
        assert_eq!(rows[0].spans[1].style, bold);
        assert_eq!(rows[1].spans[0].style, bold);
    }

    #[test]
    fn test_caret_cell_follows_wrapping_and_tabs() {
        assert_eq!(caret_cell("", 5), (0, 0));
        assert_eq!(caret_cell("abc", 5), (0, 3));
        assert_eq!(caret_cell("abcdefg", 5), (1, 2));
        // A full row keeps the caret on its last cell
        assert_eq!(caret_cell("abcde", 5), (0, 4));
        assert_eq!(caret_cell("abcdef", 5), (1, 1));
        assert_eq!(caret_cell("\t", 10), (0, 4));
        assert_eq!(caret_cell("ab\t", 10), (0, 4));
    }

    #[test]
    fn test_wrapped_line_lookup() {
        let wrapped = Wrapped::new(vec![
            wrap_line([("abcdef", Style::default())], 3),
            wrap_line([("", Style::default())], 3),
            wrap_line([("xy", Style::default())], 3),
        ]);

        assert_eq!(wrapped.line_starts, vec![0, 2, 3]);
        assert_eq!(wrapped.line_at_row(0), 0);
        assert_eq!(wrapped.line_at_row(1), 0);
        assert_eq!(wrapped.line_at_row(2), 1);
        assert_eq!(wrapped.line_at_row(9), 2);
        assert_eq!(wrapped.row_of_line(2), 3);
        assert_eq!(wrapped.row_of_line(7), 3);
        assert_eq!(texts(&wrapped.window(1, 2)), vec!["def", ""]);
    }
}
