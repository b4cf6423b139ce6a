//! Axis-aligned bounding box computation.
//!
//! Bounds cover the true geometric extent of rendered segments: for arc
//! segments the axis-extreme points of the swept circle are included,
//! not just the two endpoints.

use crate::path::{Angle, Path, Point};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// An empty (inverted) bounding box.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// True if at least one point has been included.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn merge(&mut self, other: &BoundingBox) {
        if other.is_valid() {
            self.include(Point::new(other.min_x, other.min_y));
            self.include(Point::new(other.max_x, other.max_y));
        }
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }
}

/// Bounds of one segment from `start` to `end` with the given arc sweep.
///
/// A zero sweep is a straight line. A nonzero sweep is a circular arc;
/// its center lies on the chord's perpendicular bisector, to the left of
/// the travel direction for a positive (counter-clockwise) sweep.
pub fn segment_bounds(start: Point, end: Point, sweep: Angle) -> BoundingBox {
    let mut bounds = BoundingBox::EMPTY;
    bounds.include(start);
    bounds.include(end);

    let theta = sweep.to_rad();
    let chord = end - start;
    let chord_len = (chord.x * chord.x + chord.y * chord.y).sqrt();
    if theta.abs() < 1e-9 || chord_len < 1e-12 {
        return bounds;
    }

    // Center: chord midpoint plus the left normal scaled by the apothem
    // (which is zero for a semicircle and negative for clockwise arcs).
    let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
    let apothem = (chord_len / 2.0) / (theta / 2.0).tan();
    let left_normal = Point::new(-chord.y / chord_len, chord.x / chord_len);
    let center = Point::new(
        mid.x + left_normal.x * apothem,
        mid.y + left_normal.y * apothem,
    );
    let radius = (chord_len / 2.0) / (theta / 2.0).sin().abs();

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let tau = std::f64::consts::TAU;
    for quadrant in 0..4 {
        let axis = quadrant as f64 * std::f64::consts::FRAC_PI_2;
        let crossed = if theta > 0.0 {
            (axis - start_angle).rem_euclid(tau) <= theta
        } else {
            (start_angle - axis).rem_euclid(tau) <= -theta
        };
        if crossed {
            bounds.include(Point::new(
                center.x + radius * axis.cos(),
                center.y + radius * axis.sin(),
            ));
        }
    }
    bounds
}

/// Bounding box of a collection of stroke paths, or `None` if the
/// collection contains no vertices at all.
///
/// Returns `(bottom_left, top_right)`.
pub fn paths_bounding_box(paths: &[Path]) -> Option<(Point, Point)> {
    let mut bounds = BoundingBox::EMPTY;
    for path in paths {
        let vertices = path.vertices();
        if vertices.len() == 1 {
            bounds.include(vertices[0].position);
        }
        for pair in vertices.windows(2) {
            bounds.merge(&segment_bounds(
                pair[0].position,
                pair[1].position,
                pair[0].angle,
            ));
        }
    }
    bounds
        .is_valid()
        .then(|| (bounds.bottom_left(), bounds.top_right()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Vertex;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_straight_segment_bounds_are_endpoints() {
        let b = segment_bounds(Point::new(1.0, 2.0), Point::new(-3.0, 5.0), Angle::ZERO);
        assert_close(b.min_x, -3.0);
        assert_close(b.min_y, 2.0);
        assert_close(b.max_x, 1.0);
        assert_close(b.max_y, 5.0);
    }

    #[test]
    fn test_ccw_semicircle_passes_below_the_chord() {
        // Center (1,0), radius 1; CCW rotation from 180 deg to 360 deg
        // passes through (1,-1).
        let b = segment_bounds(Point::ZERO, Point::new(2.0, 0.0), Angle::from_deg(180.0));
        assert_close(b.min_x, 0.0);
        assert_close(b.max_x, 2.0);
        assert_close(b.min_y, -1.0);
        assert_close(b.max_y, 0.0);
    }

    #[test]
    fn test_cw_semicircle_passes_above_the_chord() {
        let b = segment_bounds(Point::ZERO, Point::new(2.0, 0.0), Angle::from_deg(-180.0));
        assert_close(b.min_y, 0.0);
        assert_close(b.max_y, 1.0);
    }

    #[test]
    fn test_quarter_arc_includes_axis_extreme() {
        // CCW quarter circle from (1,0) to (0,1) around the origin:
        // stays in the first quadrant, no axis crossing beyond endpoints.
        let b = segment_bounds(
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Angle::from_deg(90.0),
        );
        assert_close(b.min_x, 0.0);
        assert_close(b.max_x, 1.0);
        assert_close(b.min_y, 0.0);
        assert_close(b.max_y, 1.0);
    }

    #[test]
    fn test_paths_bounding_box_empty() {
        assert_eq!(paths_bounding_box(&[]), None);
        assert_eq!(paths_bounding_box(&[Path::new()]), None);
    }

    #[test]
    fn test_paths_bounding_box_merges_paths() {
        let a = Path::from_vertices(vec![
            Vertex::new(Point::ZERO, Angle::ZERO),
            Vertex::new(Point::new(2.0, 3.0), Angle::ZERO),
        ]);
        let b = Path::from_vertices(vec![
            Vertex::new(Point::new(-1.0, 1.0), Angle::ZERO),
            Vertex::new(Point::new(0.5, -2.0), Angle::ZERO),
        ]);
        let (bl, tr) = paths_bounding_box(&[a, b]).unwrap();
        assert_eq!(bl, Point::new(-1.0, -2.0));
        assert_eq!(tr, Point::new(2.0, 3.0));
    }
}
