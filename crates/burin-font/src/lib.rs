//! Burin Font
//!
//! Stroke-font handling for the Burin engine:
//! - In-memory font store (header metrics + glyph table)
//! - FontoBene-style text format parser
//! - Glyph resolution with a replacement table for missing code points
//! - Asynchronous font loading with lazy one-shot materialization
//! - A font registry owned by the session context
//!
//! Font parse failures never reach query callers: a font that failed to
//! load answers every query as an empty font.

mod format;
mod loader;
mod pool;
mod resolver;
mod store;

pub use format::parse_font;
pub use loader::{FontData, FontSource, LazySource, StrokeFont};
pub use pool::StrokeFontPool;
pub use resolver::GlyphResolver;
pub use store::{Font, FontHeader, FontVertex, Glyph, Polyline, DESIGN_HEIGHT};

/// Font loading/parsing error types.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("invalid code point on line {line}: {value:?}")]
    InvalidCodePoint { line: usize, value: String },

    #[error("glyph {glyph:?} references unknown glyph {reference:?}")]
    UnknownReference { glyph: char, reference: char },

    #[error("cyclic glyph reference involving {glyph:?}")]
    CyclicReference { glyph: char },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FontError>;
