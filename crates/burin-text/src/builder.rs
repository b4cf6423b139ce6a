//! Polyline-to-path conversion.

use burin_font::Polyline;
use burin_geometry::{Angle, Path, Point, Vertex};

/// Convert one font-space polyline into a stroke path scaled to the
/// requested cap height.
///
/// The sweep stored on vertex `i` comes from the bulge of vertex
/// `(i + 1) % n`: a renderer can draw "arc ending at vertex i+1 with
/// the sweep stored on vertex i" without looking ahead. The wrap-around
/// only feeds the (unused) sweep of the last vertex; it does not add a
/// closing segment.
pub fn build_path(polyline: &Polyline, height: f64) -> Path {
    let n = polyline.len();
    let mut path = Path::new();
    for (i, vertex) in polyline.iter().enumerate() {
        let next = &polyline[(i + 1) % n];
        path.push(Vertex::new(
            Point::new(vertex.scaled_x(height), vertex.scaled_y(height)),
            Angle::from_deg(next.sweep_deg()),
        ));
    }
    path
}

/// Convert a glyph's polylines, dropping zero-vertex polylines so no
/// degenerate paths are produced.
pub fn build_paths(polylines: &[Polyline], height: f64) -> Vec<Path> {
    polylines
        .iter()
        .filter(|polyline| !polyline.is_empty())
        .map(|polyline| build_path(polyline, height))
        .collect()
}
