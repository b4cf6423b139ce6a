//! Burin Text
//!
//! Turns Unicode text into positioned stroke geometry:
//! - Path builder: one font polyline (with arc bulge) -> one stroke path
//! - Layout engine: line splitting, cursor advance, per-line widths,
//!   horizontal/vertical alignment
//! - Stroke-text item model: an immutable spec value plus derived,
//!   cached geometry recomputed on every property change
//!
//! `stroke` never fails: a missing glyph is skipped (and logged), and a
//! font that failed to load yields an empty path collection.

mod builder;
mod item;
mod stroker;

pub use builder::{build_path, build_paths};
pub use item::{StrokeText, StrokeTextItem};
pub use stroker::TextStroker;
