//! Shared intersection capability for lines, rects, polylines and paths.
//!
//! Every shape exports a [`Shape`] descriptor; the actual math is delegated to
//! an [`IntersectionEngine`]. The adapter here dedups the engine's points by a
//! fixed-precision string key and reports "no hit" as [`Intersection::None`].

mod curves;
mod engine;

use std::collections::HashSet;

use crate::cfg::DEDUP_DECIMALS;
use crate::path::PathCommand;
use crate::point::Point;
use crate::rect::Rect;

pub use engine::{DefaultEngine, IntersectionEngine};
pub(crate) use curves::crossings_left_of;
pub(crate) use engine::{lower_path, segment_intersection};

/// Engine-facing description of a shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line(Point, Point),
    /// Closed outline of the four edges.
    Rect(Rect),
    /// Open chain through the points.
    Polyline(Vec<Point>),
    Path(Vec<PathCommand>),
}

/// Outcome of intersecting two shapes.
///
/// `Points` is never empty; touching without a returned point is not representable.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    None,
    Points(Vec<Point>),
}

impl Intersection {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Intersection::None)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Hit points (empty for `None`).
    pub fn points(&self) -> &[Point] {
        match self {
            Intersection::None => &[],
            Intersection::Points(p) => p,
        }
    }

    pub fn first(&self) -> Option<Point> {
        self.points().first().copied()
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_points(self) -> Option<Vec<Point>> {
        match self {
            Intersection::None => None,
            Intersection::Points(p) => Some(p),
        }
    }
}

/// Anything that can be intersected with anything else.
pub trait Geometry {
    fn to_shape(&self) -> Shape;

    fn intersect_points(&self, other: &dyn Geometry) -> Intersection {
        intersect_shapes(&DefaultEngine::default(), &self.to_shape(), &other.to_shape())
    }

    fn intersects(&self, other: &dyn Geometry) -> bool {
        self.intersect_points(other).is_some()
    }
}

/// Intersect two shapes with the default engine.
pub fn intersect(a: &dyn Geometry, b: &dyn Geometry) -> Intersection {
    intersect_with(&DefaultEngine::default(), a, b)
}

/// Intersect two shapes with a caller-supplied engine.
pub fn intersect_with<E>(engine: &E, a: &dyn Geometry, b: &dyn Geometry) -> Intersection
where
    E: IntersectionEngine + ?Sized,
{
    intersect_shapes(engine, &a.to_shape(), &b.to_shape())
}

fn intersect_shapes<E>(engine: &E, a: &Shape, b: &Shape) -> Intersection
where
    E: IntersectionEngine + ?Sized,
{
    let raw = engine.intersect(a, b);
    if raw.is_empty() {
        return Intersection::None;
    }
    Intersection::Points(dedup(raw))
}

/// Keep the first point per `x,y` key (fixed decimals), preserving order.
fn dedup(points: Vec<Point>) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .into_iter()
        .filter(|p| {
            // rounding first sends tiny negatives to -0, and `+ 0.0` folds -0 into 0
            let (x, y) = (key_component(p.x), key_component(p.y));
            seen.insert(format!("{x:.prec$},{y:.prec$}", prec = DEDUP_DECIMALS))
        })
        .collect()
}

fn key_component(v: f64) -> f64 {
    let scale = 10f64.powi(DEDUP_DECIMALS as i32);
    (v * scale).round() / scale + 0.0
}
