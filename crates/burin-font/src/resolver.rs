//! Glyph lookup with replacement-table fallback.

use crate::store::{Glyph, Polyline};
use std::collections::HashMap;

/// Maps a Unicode code point to a glyph's polyline set.
///
/// Lookup order: direct table hit, then a single replacement-table hop
/// (no chained replacements), then "not found". Missing glyphs are a
/// recoverable condition for callers: skip the geometry, keep going.
#[derive(Debug, Clone)]
pub struct GlyphResolver {
    glyphs: HashMap<char, Glyph>,
    replacements: HashMap<char, char>,
}

impl GlyphResolver {
    pub fn new(glyphs: HashMap<char, Glyph>) -> Self {
        GlyphResolver {
            glyphs,
            replacements: HashMap::new(),
        }
    }

    /// Resolver with the replacements every stroke font is expected to
    /// honor: micro sign -> Greek small mu, ohm sign -> Greek capital
    /// omega.
    pub fn with_default_replacements(glyphs: HashMap<char, Glyph>) -> Self {
        let mut resolver = Self::new(glyphs);
        resolver.add_replacement('\u{00B5}', '\u{03BC}');
        resolver.add_replacement('\u{2126}', '\u{03A9}');
        resolver
    }

    /// Map `missing` to `present` when `missing` has no glyph of its own.
    pub fn add_replacement(&mut self, missing: char, present: char) {
        self.replacements.insert(missing, present);
    }

    /// Resolve a code point to its polylines.
    ///
    /// `Some(&[])` is a present-but-empty glyph; `None` means the code
    /// point is unresolvable even through the replacement table.
    pub fn resolve(&self, code_point: char) -> Option<&[Polyline]> {
        if let Some(glyph) = self.glyphs.get(&code_point) {
            return Some(&glyph.polylines);
        }
        self.replacements
            .get(&code_point)
            .and_then(|replacement| self.glyphs.get(replacement))
            .map(|glyph| glyph.polylines.as_slice())
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
