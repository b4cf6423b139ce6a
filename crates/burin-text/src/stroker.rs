//! Multi-line text layout.
//!
//! Pure computation over an already-loaded font: split into lines,
//! advance a cursor per character, place lines by alignment. Safe to
//! run concurrently against the same font; the only synchronization is
//! the font's own first-query materialization.

use crate::builder::build_paths;
use burin_font::StrokeFont;
use burin_geometry::{paths_bounding_box, Alignment, HAlign, Path, Point, VAlign};

/// Strokes text with a borrowed font.
#[derive(Debug, Clone, Copy)]
pub struct TextStroker<'a> {
    font: &'a StrokeFont,
}

impl<'a> TextStroker<'a> {
    pub fn new(font: &'a StrokeFont) -> Self {
        TextStroker { font }
    }

    /// Render a whole text block into positioned stroke paths.
    ///
    /// Never fails: unresolvable characters are skipped and a font that
    /// failed to load produces an empty collection. Mirroring is not
    /// applied here; callers mirror the returned paths if needed.
    pub fn stroke(
        &self,
        text: &str,
        height: f64,
        line_spacing_factor: f64,
        align: Alignment,
    ) -> Vec<Path> {
        let mut total_width = 0.0;
        let lines = self.stroke_lines(text, height, &mut total_width);
        let count = lines.len();
        let line_spacing = self.font.line_spacing(height, line_spacing_factor);

        let mut paths = Vec::new();
        for (i, (line_paths, line_width)) in lines.into_iter().enumerate() {
            let x = match align.h {
                HAlign::Left => 0.0,
                // Kept in the form the reference arithmetic uses; do
                // not "simplify" to -line_width without checking the
                // reference rendering.
                HAlign::Right => (total_width - line_width) - total_width,
                HAlign::Center => -line_width / 2.0,
            };
            let y = match align.v {
                VAlign::Bottom => line_spacing * (count - i - 1) as f64,
                VAlign::Top => -height - line_spacing * i as f64,
                VAlign::Middle => {
                    let from_bottom = line_spacing * (count - i - 1) as f64;
                    let total_height = height + line_spacing * (count - 1) as f64;
                    from_bottom - total_height / 2.0
                }
            };
            let position = Point::new(x, y);
            paths.extend(line_paths.iter().map(|path| path.translated(position)));
        }
        paths
    }

    /// Stroke each logical line and record the widest line's width.
    fn stroke_lines(
        &self,
        text: &str,
        height: f64,
        total_width: &mut f64,
    ) -> Vec<(Vec<Path>, f64)> {
        text.split('\n')
            .map(|line| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                let stroked = self.stroke_line(line, height);
                if stroked.1 > *total_width {
                    *total_width = stroked.1;
                }
                stroked
            })
            .collect()
    }

    /// Stroke a single line; returns its paths and its width.
    ///
    /// `width` trails `offset` by one letter spacing: spacing is added
    /// after each glyph's visible width, so trailing spacing never
    /// inflates the reported line width. Whitespace advances by the
    /// word spacing and always counts fully toward the width. Glyphs
    /// without geometry (empty or unresolvable) advance nothing.
    pub fn stroke_line(&self, line: &str, height: f64) -> (Vec<Path>, f64) {
        let mut paths = Vec::new();
        let mut offset = 0.0;
        let mut width = 0.0;
        for ch in line.chars() {
            if ch.is_whitespace() {
                offset += self.font.word_spacing(height);
                width = offset;
                continue;
            }
            let glyph_paths = self.stroke_glyph(ch, height);
            if glyph_paths.is_empty() {
                // no letter spacing for empty glyphs
                continue;
            }
            let right_edge = paths_bounding_box(&glyph_paths)
                .map(|(_, top_right)| top_right.x.abs())
                .unwrap_or(0.0);
            let shift = Point::new(offset, 0.0);
            paths.extend(glyph_paths.iter().map(|path| path.translated(shift)));
            width = offset + right_edge;
            offset = width + self.font.letter_spacing(height);
        }
        (paths, width)
    }

    /// Stroke one character's glyph at the origin.
    pub fn stroke_glyph(&self, ch: char, height: f64) -> Vec<Path> {
        match self.font.glyph(ch) {
            Some(polylines) => build_paths(polylines, height),
            None => {
                tracing::warn!(
                    font = %self.font.name(),
                    "stroke font glyph U+{:04X} not found",
                    ch as u32
                );
                Vec::new()
            }
        }
    }
}
