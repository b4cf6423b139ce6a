//! In-memory representation of a parsed stroke font.

use std::collections::HashMap;

/// The font design cap height, in design units.
///
/// Glyphs are drawn in a square of this height; all spacing metrics are
/// expressed relative to it. Fixed by the font format.
pub const DESIGN_HEIGHT: f64 = 9.0;

/// Font-wide spacing metrics, in design units relative to
/// [`DESIGN_HEIGHT`]. Immutable once loaded.
///
/// Actual spacing in output units is `height * metric / 9.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontHeader {
    pub letter_spacing: f64,
    pub word_spacing: f64,
    pub line_spacing: f64,
}

/// A polyline vertex in font design space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontVertex {
    pub x: f64,
    pub y: f64,
    /// Signed arc curvature of the segment leading to the next vertex,
    /// as a fraction of a half circle. Zero means a straight segment.
    pub bulge: f64,
}

impl FontVertex {
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        FontVertex { x, y, bulge }
    }

    /// X position scaled to the given cap height.
    pub fn scaled_x(&self, height: f64) -> f64 {
        self.x * height / DESIGN_HEIGHT
    }

    /// Y position scaled to the given cap height.
    pub fn scaled_y(&self, height: f64) -> f64 {
        self.y * height / DESIGN_HEIGHT
    }

    /// Arc sweep in degrees. Bulge values outside [-1, 1] are clamped
    /// to the maximum semicircle sweep of +/-180 degrees.
    pub fn sweep_deg(&self) -> f64 {
        self.bulge.clamp(-1.0, 1.0) * 180.0
    }
}

/// An ordered, open sequence of font-space vertices.
pub type Polyline = Vec<FontVertex>;

/// One glyph: an ordered collection of polylines.
///
/// A glyph with zero polylines is valid (a font-defined blank) and
/// contributes no geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glyph {
    pub polylines: Vec<Polyline>,
}

impl Glyph {
    pub fn new(polylines: Vec<Polyline>) -> Self {
        Glyph { polylines }
    }
}

/// A parsed stroke font: header metrics plus the glyph table.
#[derive(Debug, Clone, Default)]
pub struct Font {
    pub header: FontHeader,
    pub glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// The placeholder substituted when loading fails: zero glyphs and
    /// zero-valued metrics, so every query degrades gracefully.
    pub fn empty() -> Self {
        Font::default()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_scaling() {
        let v = FontVertex::new(4.5, 9.0, 0.0);
        assert_eq!(v.scaled_x(18.0), 9.0);
        assert_eq!(v.scaled_y(18.0), 18.0);
    }

    #[test]
    fn test_sweep_is_bulge_times_half_circle() {
        assert_eq!(FontVertex::new(0.0, 0.0, 0.5).sweep_deg(), 90.0);
        assert_eq!(FontVertex::new(0.0, 0.0, -1.0).sweep_deg(), -180.0);
    }

    #[test]
    fn test_sweep_clamps_out_of_range_bulge() {
        assert_eq!(FontVertex::new(0.0, 0.0, 3.0).sweep_deg(), 180.0);
        assert_eq!(FontVertex::new(0.0, 0.0, -2.5).sweep_deg(), -180.0);
    }

    #[test]
    fn test_empty_font_has_zero_metrics() {
        let font = Font::empty();
        assert_eq!(font.glyph_count(), 0);
        assert_eq!(font.header, FontHeader::default());
    }
}
