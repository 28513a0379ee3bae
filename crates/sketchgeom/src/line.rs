//! Line segment between two points.
//!
//! A zero-length segment is legal. Metrics that divide by the squared length
//! (`distance_to`, `nearest_point_to`, `project`) fall back to `p1` for it.

use serde::{Deserialize, Serialize};

use crate::cfg::MAX_SAFE_INTEGER;
use crate::error::{GeomError, Result};
use crate::geometry::{Geometry, Shape};
use crate::matrix::{AngleUnit, Matrix, Transform};
use crate::point::Point;

/// Segment `p1 → p2`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Segment from `origin` reaching 2^53 - 1 units along `direction`.
    pub fn ray(origin: Point, direction: Point) -> Line {
        Line::new(origin, origin + direction.normalize() * MAX_SAFE_INTEGER)
    }

    /// First two points of `points`.
    pub fn from(points: &[Point]) -> Result<Line> {
        match points {
            [p1, p2, ..] => Ok(Line::new(*p1, *p2)),
            _ => Err(GeomError::InvalidLineSource(points.len())),
        }
    }

    /// Unit direction `p1 → p2` (zero for a degenerate line).
    pub fn direction(&self) -> Point {
        self.to_vector().normalize()
    }

    pub fn length(&self) -> f64 {
        self.to_vector().magnitude()
    }

    pub fn mid(&self) -> Point {
        Point::new((self.p1.x + self.p2.x) / 2.0, (self.p1.y + self.p2.y) / 2.0)
    }

    pub fn reverse(&self) -> Line {
        Line::new(self.p2, self.p1)
    }

    pub fn transform(&self, m: &Matrix) -> Line {
        Line::new(m.apply_point(self.p1), m.apply_point(self.p2))
    }

    /// Rotate by `by` radians around `origin`.
    pub fn rotate(&self, origin: Point, by: f64) -> Line {
        let m = Matrix::IDENTITY
            .translate_by(origin)
            .rotate(by, AngleUnit::Radians)
            .translate_by(-origin);
        self.transform(&m)
    }

    /// Push both endpoints outward by `amount` along the direction.
    pub fn extend(&self, amount: f64) -> Line {
        let v = self.direction();
        Line::new(self.p1 - v * amount, self.p2 + v * amount)
    }

    /// Quad offset by `lhs` along the perp normal and by `rhs` against it:
    /// `[p1 + n·lhs, p2 + n·lhs, p2 - n·rhs, p1 - n·rhs]`.
    pub fn extrude(&self, lhs: f64, rhs: f64) -> [Point; 4] {
        let n = self.to_vector().perp().normalize();
        [
            self.p1 + n * lhs,
            self.p2 + n * lhs,
            self.p2 - n * rhs,
            self.p1 - n * rhs,
        ]
    }

    /// Clamped projection parameter of `p` onto the segment (`0` when degenerate).
    fn clamped_param(&self, p: Point) -> f64 {
        let v = self.to_vector();
        let vv = v.x * v.x + v.y * v.y;
        if vv == 0.0 {
            return 0.0;
        }
        (((p.x - self.p1.x) * v.x + (p.y - self.p1.y) * v.y) / vv).clamp(0.0, 1.0)
    }

    /// Distance from `p` to the segment (not the infinite line).
    pub fn distance_to(&self, p: Point) -> f64 {
        self.nearest_point_to(p).distance_to(p)
    }

    /// Signed distance from `p` to the infinite line; the sign gives the side.
    ///
    /// NaN for a degenerate line.
    pub fn perp_distance_to(&self, p: Point) -> f64 {
        let (a, b) = (self.p1, self.p2);
        let len2 = (b.x - a.x) * (b.x - a.x) + (b.y - a.y) * (b.y - a.y);
        let s = ((a.y - p.y) * (b.x - a.x) - (a.x - p.x) * (b.y - a.y)) / len2;
        s * len2.sqrt()
    }

    /// Point of the segment closest to `p`.
    pub fn nearest_point_to(&self, p: Point) -> Point {
        let t = self.clamped_param(p);
        if t == 0.0 {
            self.p1
        } else if t == 1.0 {
            self.p2
        } else {
            self.p1.lerp(self.p2, t)
        }
    }

    /// Clamped projection of `p` onto the segment.
    pub fn project(&self, p: Point) -> Point {
        self.p1 + self.to_vector() * self.clamped_param(p)
    }

    /// Same endpoints in either order.
    pub fn coincident_with(&self, other: &Line) -> bool {
        self == other || *self == other.reverse()
    }

    /// Shares at least one endpoint with `other`.
    pub fn connects_with(&self, other: &Line) -> bool {
        [self.p1, self.p2]
            .iter()
            .any(|p| *p == other.p1 || *p == other.p2)
    }

    /// First intersection point with another line.
    pub fn intersect_point(&self, other: &Line) -> Option<Point> {
        self.intersect_points(other).first()
    }

    /// `p2 - p1`.
    pub fn to_vector(&self) -> Point {
        self.p2 - self.p1
    }

    pub fn to_array(&self) -> [Point; 2] {
        [self.p1, self.p2]
    }

    pub fn to_tuple(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }
}

impl Geometry for Line {
    fn to_shape(&self) -> Shape {
        Shape::Line(self.p1, self.p2)
    }
}

impl Transform for Line {
    type Output = Line;
    fn transform(&self, m: &Matrix) -> Line {
        Line::transform(self, m)
    }
}

impl From<(Point, Point)> for Line {
    fn from((p1, p2): (Point, Point)) -> Self {
        Line::new(p1, p2)
    }
}
