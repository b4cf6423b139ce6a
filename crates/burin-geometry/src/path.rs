//! Points, angles and stroke paths.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub};

/// A 2D point in output units.
///
/// The coordinate system has Y pointing up, matching the font design
/// space (engraving output, not screen space).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An angle in degrees, positive counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub fn from_deg(deg: f64) -> Self {
        Angle(deg)
    }

    pub fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    /// True if the angle is (numerically) zero, i.e. a straight segment.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

/// A stroke-path vertex: an absolute position plus the arc sweep of the
/// segment *ending at the next vertex*.
///
/// A renderer consumes a path as "move to v0, then for each subsequent
/// vertex draw an arc (or line, if the stored sweep is zero) to it using
/// the sweep stored on the previous vertex". The sweep on the last
/// vertex is unused by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point,
    pub angle: Angle,
}

impl Vertex {
    pub fn new(position: Point, angle: Angle) -> Self {
        Vertex { position, angle }
    }
}

/// An ordered sequence of stroke-space vertices.
///
/// The path exclusively owns its vertices. Transformations are pure:
/// they return a new path and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    vertices: Vec<Vertex>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Path { vertices }
    }

    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Return a copy of this path with every vertex offset by `delta`.
    pub fn translated(&self, delta: Point) -> Path {
        Path {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex::new(v.position + delta, v.angle))
                .collect(),
        }
    }

    /// Return a copy reflected about the vertical axis (x = 0).
    ///
    /// Mirroring flips arc handedness, so every sweep angle is negated
    /// along with the X coordinates.
    pub fn mirrored(&self) -> Path {
        Path {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex::new(Point::new(-v.position.x, v.position.y), -v.angle))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_offsets_all_vertices() {
        let path = Path::from_vertices(vec![
            Vertex::new(Point::new(1.0, 2.0), Angle::from_deg(90.0)),
            Vertex::new(Point::new(3.0, 4.0), Angle::ZERO),
        ]);

        let moved = path.translated(Point::new(10.0, -1.0));

        assert_eq!(moved.vertices()[0].position, Point::new(11.0, 1.0));
        assert_eq!(moved.vertices()[1].position, Point::new(13.0, 3.0));
        // angles untouched
        assert_eq!(moved.vertices()[0].angle, Angle::from_deg(90.0));
        // original untouched
        assert_eq!(path.vertices()[0].position, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_mirrored_negates_x_and_sweep() {
        let path = Path::from_vertices(vec![
            Vertex::new(Point::new(2.0, 1.0), Angle::from_deg(45.0)),
            Vertex::new(Point::new(-3.0, 0.5), Angle::from_deg(-90.0)),
        ]);

        let mirrored = path.mirrored();

        assert_eq!(mirrored.vertices()[0].position, Point::new(-2.0, 1.0));
        assert_eq!(mirrored.vertices()[0].angle, Angle::from_deg(-45.0));
        assert_eq!(mirrored.vertices()[1].position, Point::new(3.0, 0.5));
        assert_eq!(mirrored.vertices()[1].angle, Angle::from_deg(90.0));
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        let path = Path::from_vertices(vec![
            Vertex::new(Point::new(2.0, 1.0), Angle::from_deg(45.0)),
            Vertex::new(Point::new(7.5, -2.0), Angle::ZERO),
        ]);

        assert_eq!(path.mirrored().mirrored(), path);
    }
}
