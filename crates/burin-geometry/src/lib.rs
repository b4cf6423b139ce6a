//! Burin Geometry
//!
//! Geometry primitives shared by the Burin stroke-text engine:
//! - Points, angles and stroke paths (line/arc segment sequences)
//! - Text alignment value types
//! - Arc-aware axis-aligned bounding boxes
//!
//! All lengths are in output units (typically millimeters); all angles
//! are in degrees, positive counter-clockwise.

mod align;
mod bbox;
mod path;

pub use align::{Alignment, HAlign, VAlign};
pub use bbox::{paths_bounding_box, segment_bounds, BoundingBox};
pub use path::{Angle, Path, Point, Vertex};
