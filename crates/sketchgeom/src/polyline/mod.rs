//! Ordered point chain.
//!
//! The points are frozen at construction (shared `Arc<[Point]>`); "closed" is
//! derived from `first == last`. Zero-length steps between repeated points are
//! not segments.
//!
//! Containment
//! - Fast reject on the bounding box.
//! - Points within `EDGE_EPS` of an edge are inside.
//! - Otherwise a horizontal ray from the right of the bounds to the point
//!   counts edge crossings; an edge counts only if it straddles the ray's `y`
//!   half-open (`(a.y > y) != (b.y > y)`), so a vertex on the ray is one
//!   crossing, not two.

use std::sync::Arc;

use crate::cfg::{EDGE_EPS, KAPPA};
use crate::error::{GeomError, Result};
use crate::geometry::{segment_intersection, Geometry, Shape};
use crate::line::Line;
use crate::matrix::{Matrix, Transform};
use crate::path::{Path, PathCommand};
use crate::point::{Point, PointSource};
use crate::rect::Rect;

/// Corner shape emitted by [`Polyline::to_rounded_path`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMethod {
    /// One quadratic through the original vertex.
    Quadratic,
    /// One cubic with controls pulled toward the vertex by `kappa`.
    #[default]
    Cubic,
}

/// Rounding radius, for every corner or per corner (missing entries are 0).
#[derive(Clone, Debug, PartialEq)]
pub enum CornerRadii {
    Uniform(f64),
    PerCorner(Vec<f64>),
}

impl CornerRadii {
    fn at(&self, i: usize) -> f64 {
        match self {
            CornerRadii::Uniform(r) => *r,
            CornerRadii::PerCorner(rs) => rs.get(i).copied().unwrap_or(0.0),
        }
    }

    /// No corner would be rounded.
    fn is_flat(&self) -> bool {
        match self {
            CornerRadii::Uniform(r) => !positive(*r),
            CornerRadii::PerCorner(rs) => rs.iter().all(|r| !positive(*r)),
        }
    }
}

/// False for NaN as well as for non-positive radii.
fn positive(r: f64) -> bool {
    r > 0.0
}

impl From<f64> for CornerRadii {
    fn from(r: f64) -> Self {
        CornerRadii::Uniform(r)
    }
}

impl From<Vec<f64>> for CornerRadii {
    fn from(rs: Vec<f64>) -> Self {
        CornerRadii::PerCorner(rs)
    }
}

impl From<&[f64]> for CornerRadii {
    fn from(rs: &[f64]) -> Self {
        CornerRadii::PerCorner(rs.to_vec())
    }
}

/// Non-empty, immutable chain of points.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    points: Arc<[Point]>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Result<Polyline> {
        if points.is_empty() {
            return Err(GeomError::EmptyPolyline);
        }
        Ok(Polyline::from_nonempty(points))
    }

    /// Chain through `points`; with `close`, the first point is appended unless already last.
    pub fn from(points: &[Point], close: bool) -> Result<Polyline> {
        let mut pts = points.to_vec();
        if close && pts.len() > 1 && pts.first() != pts.last() {
            pts.push(pts[0]);
        }
        Polyline::new(pts)
    }

    /// Like [`Polyline::from`] for any point representation.
    pub fn from_sources<I, S>(sources: I, close: bool) -> Result<Polyline>
    where
        I: IntoIterator<Item = S>,
        S: Into<PointSource>,
    {
        let pts = sources
            .into_iter()
            .map(Point::from_source)
            .collect::<Result<Vec<_>>>()?;
        Polyline::from(&pts, close)
    }

    pub(crate) fn from_nonempty(points: Vec<Point>) -> Polyline {
        debug_assert!(!points.is_empty());
        Polyline {
            points: points.into(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(&self.points)
    }

    /// Vertex average.
    pub fn center(&self) -> Point {
        Point::average(&self.points)
    }

    /// Smallest `x`; first wins ties.
    pub fn left(&self) -> Point {
        self.first_by(|p, best| p.x < best.x)
    }

    pub fn right(&self) -> Point {
        self.first_by(|p, best| p.x > best.x)
    }

    pub fn top(&self) -> Point {
        self.first_by(|p, best| p.y < best.y)
    }

    pub fn bottom(&self) -> Point {
        self.first_by(|p, best| p.y > best.y)
    }

    fn first_by(&self, better: impl Fn(&Point, &Point) -> bool) -> Point {
        let mut best = self.points[0];
        for p in self.points.iter().skip(1) {
            if better(p, &best) {
                best = *p;
            }
        }
        best
    }

    pub fn closed(&self) -> bool {
        self.points.first() == self.points.last()
    }

    /// Segments between consecutive distinct points.
    pub fn lines(&self) -> Vec<Line> {
        self.points
            .windows(2)
            .filter(|w| w[0] != w[1])
            .map(|w| Line::new(w[0], w[1]))
            .collect()
    }

    pub fn length(&self) -> f64 {
        self.lines().iter().map(Line::length).sum()
    }

    /// Distance to the nearest segment (to the single point if there are none).
    pub fn distance_to(&self, p: Point) -> f64 {
        self.nearest_point_to(p).distance_to(p)
    }

    pub fn nearest_point_to(&self, p: Point) -> Point {
        let candidates: Vec<Point> = self
            .lines()
            .iter()
            .map(|ln| ln.nearest_point_to(p))
            .collect();
        if candidates.is_empty() {
            return self.points[0];
        }
        p.nearest_of(&candidates)
    }

    /// Move every vertex `amount` away from the vertex average (radial, not an edge offset).
    pub fn inflate(&self, amount: f64) -> Polyline {
        let c = self.center();
        Polyline::from_nonempty(
            self.points
                .iter()
                .map(|p| *p + (*p - c).normalize() * amount)
                .collect(),
        )
    }

    pub fn transform(&self, m: &Matrix) -> Polyline {
        Polyline::from_nonempty(self.points.transform(m))
    }

    /// Inside or on the boundary (within `EDGE_EPS`).
    pub fn contains(&self, p: Point) -> bool {
        let bounds = self.bounds();
        if !bounds.contains(p) {
            return false;
        }
        let lines = self.lines();
        if lines.iter().any(|ln| ln.distance_to(p) < EDGE_EPS) {
            return true;
        }
        let from = Point::new(bounds.right() + 1.0, p.y);
        let crossings = lines
            .iter()
            .filter(|ln| (ln.p1.y > p.y) != (ln.p2.y > p.y))
            .filter(|ln| segment_intersection(from, p, ln.p1, ln.p2).is_some())
            .count();
        crossings % 2 == 1
    }

    /// Every point is [contained](Polyline::contains).
    pub fn contains_all(&self, points: &[Point]) -> bool {
        points.iter().all(|p| self.contains(*p))
    }

    /// `M p0 L p1 ... [Z]`
    pub fn to_path(&self, close: bool) -> Path {
        let mut cmds: Vec<PathCommand> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathCommand::Move(*p)
                } else {
                    PathCommand::Line(*p)
                }
            })
            .collect();
        if close {
            cmds.push(PathCommand::Close);
        }
        Path::from_commands_unchecked(cmds)
    }

    /// Replace each corner with a curve.
    ///
    /// Corner `i` joins segment `i` to segment `i + 1` (wrapping to the first).
    /// Its curve starts and ends `min(len_i / 2, len_i+1 / 2, radius_i)` away
    /// from the vertex. Without any positive radius this is [`Polyline::to_path`].
    pub fn to_rounded_path(
        &self,
        method: RoundingMethod,
        radii: impl Into<CornerRadii>,
        close: bool,
    ) -> Path {
        let radii = radii.into();
        let lines = self.lines();
        if radii.is_flat() || lines.is_empty() {
            return self.to_path(close);
        }

        let mut cmds = Vec::with_capacity(lines.len() * 2 + 1);
        for (i, a) in lines.iter().enumerate() {
            let b = &lines[(i + 1) % lines.len()];
            let l = (a.length() / 2.0).min(b.length() / 2.0).min(radii.at(i));

            let vertex = a.p2;
            let sp = vertex + Point::vector(vertex, a.p1).normalize() * l;
            let ep = vertex + Point::vector(vertex, b.p2).normalize() * l;

            cmds.push(if i == 0 {
                PathCommand::Move(sp)
            } else {
                PathCommand::Line(sp)
            });
            cmds.push(match method {
                RoundingMethod::Quadratic => PathCommand::Quadratic {
                    ctrl: vertex,
                    end: ep,
                },
                RoundingMethod::Cubic => PathCommand::Cubic {
                    c1: sp + Point::vector(sp, vertex).normalize() * (l * KAPPA),
                    c2: ep + Point::vector(ep, vertex).normalize() * (l * KAPPA),
                    end: ep,
                },
            });
        }
        if close {
            cmds.push(PathCommand::Close);
        }
        Path::from_commands_unchecked(cmds)
    }
}

impl Geometry for Polyline {
    fn to_shape(&self) -> Shape {
        Shape::Polyline(self.points.to_vec())
    }
}

impl Transform for Polyline {
    type Output = Polyline;
    fn transform(&self, m: &Matrix) -> Polyline {
        Polyline::transform(self, m)
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
