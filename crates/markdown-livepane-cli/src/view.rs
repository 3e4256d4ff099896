use log::warn;
use markdown_livepane_config::{Palette, TagStyle};
use markdown_livepane_engine::{RenderPass, StyleTag};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::str::FromStr;

/// Palette resolved into ratatui styles, one per tag.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: [Style; StyleTag::ALL.len()],
}

impl Theme {
    pub fn from_palette(palette: &Palette) -> Self {
        let styles = StyleTag::ALL.map(|tag| {
            palette
                .get(tag.as_str())
                .map(to_style)
                .unwrap_or_default()
        });
        Self { styles }
    }

    pub fn style(&self, tag: StyleTag) -> Style {
        self.styles[tag as usize]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

fn to_style(tag_style: &TagStyle) -> Style {
    let mut style = Style::default();
    if let Some(fg) = tag_style.fg.as_deref().and_then(parse_colour) {
        style = style.fg(fg);
    }
    if let Some(bg) = tag_style.bg.as_deref().and_then(parse_colour) {
        style = style.bg(bg);
    }
    if tag_style.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if tag_style.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

fn parse_colour(s: &str) -> Option<Color> {
    match Color::from_str(s) {
        Ok(colour) => Some(colour),
        Err(_) => {
            warn!("ignoring unknown colour {s:?} in palette");
            None
        }
    }
}

/// Lay styled runs out as display lines.
///
/// A run may span several lines (fenced code, for one); each `\n` in a run's
/// text ends the current line.
pub fn preview_lines(pass: &RenderPass, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for run in pass {
        let style = theme.style(run.tag);
        let mut pieces = run.text.split('\n');
        if let Some(first) = pieces.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first.to_string(), style));
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}
