//! Axis-aligned rectangle `{left, top, width, height}`.
//!
//! Width and height may be negative; [`Rect::normalize`] gives the canonical
//! form. `right` and `bottom` are derived, never stored. Containment tests are
//! boundary-inclusive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};
use crate::geometry::{segment_intersection, Geometry, Intersection, Shape};
use crate::line::Line;
use crate::matrix::{Matrix, Transform};
use crate::num::{fmt_num, round};
use crate::path::Path;
use crate::point::{numeric_tokens, Point};
use crate::polyline::{CornerRadii, Polyline, RoundingMethod};

/// Rectangle edge selector for [`Rect::edge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Anchor of [`Rect::from_size`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeOrigin {
    #[default]
    TopLeft,
    Center,
}

/// Argument of [`Rect::contains`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RectTarget {
    Point(Point),
    Rect(Rect),
}

impl From<Point> for RectTarget {
    fn from(p: Point) -> Self {
        RectTarget::Point(p)
    }
}

impl From<Rect> for RectTarget {
    fn from(r: Rect) -> Self {
        RectTarget::Rect(r)
    }
}

impl From<(f64, f64)> for RectTarget {
    fn from(xy: (f64, f64)) -> Self {
        RectTarget::Point(xy.into())
    }
}

/// CSS box in px.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssRect {
    pub left: String,
    pub top: String,
    pub width: String,
    pub height: String,
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const EMPTY: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// `[left, top, width, height]`
    pub fn from_array(ltwh: [f64; 4]) -> Rect {
        let [l, t, w, h] = ltwh;
        Rect::new(l, t, w, h)
    }

    /// Box spanning `center ± radius` (a scalar radius is used on both axes).
    pub fn from_center(center: Point, radius: impl Into<Point>) -> Rect {
        let r = radius.into();
        Rect::from_points(&[center + r, center - r])
    }

    /// Square spanning `center ± diameter` on both axes.
    pub fn from_circle(center: Point, diameter: f64) -> Rect {
        Rect::from_center(center, diameter)
    }

    pub fn from_dims(position: Point, size: Point) -> Rect {
        Rect::new(position.x, position.y, size.w(), size.h())
    }

    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Read `{left, top, width, height}` from a JSON value.
    pub fn from_like(value: &serde_json::Value) -> Result<Rect> {
        Rect::deserialize(value).map_err(|_| GeomError::InvalidRect(value.to_string()))
    }

    /// Bounding box of several rects; rects with zero width and height are skipped.
    pub fn from_many(rects: &[Rect]) -> Rect {
        let points: Vec<Point> = rects
            .iter()
            .filter(|r| r.width != 0.0 || r.height != 0.0)
            .flat_map(|r| r.points())
            .collect();
        Rect::from_points(&points)
    }

    /// Bounding box of `points`; [`Rect::EMPTY`] for none.
    pub fn from_points(points: &[Point]) -> Rect {
        Rect::from_point_buffer(points, None, None)
    }

    /// Bounding box of `points[index..][..len]`.
    pub fn from_point_buffer(points: &[Point], index: Option<usize>, len: Option<usize>) -> Rect {
        let start = index.unwrap_or(0).min(points.len());
        let rest = &points[start..];
        let window = &rest[..len.unwrap_or(rest.len()).min(rest.len())];
        if window.is_empty() {
            return Rect::EMPTY;
        }
        let (mut l, mut t) = (f64::INFINITY, f64::INFINITY);
        let (mut r, mut b) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in window {
            l = l.min(p.x);
            t = t.min(p.y);
            r = r.max(p.x);
            b = b.max(p.y);
        }
        Rect::from_edges(l, t, r, b)
    }

    /// Box of the given size anchored at the origin.
    pub fn from_size(size: impl Into<Point>, origin: SizeOrigin) -> Rect {
        let s = size.into();
        match origin {
            SizeOrigin::TopLeft => Rect::new(0.0, 0.0, s.w(), s.h()),
            SizeOrigin::Center => Rect::new(s.w() / -2.0, s.h() / -2.0, s.w(), s.h()),
        }
    }

    /// First four numbers of `text` as `left, top, width, height`.
    pub fn parse(text: &str) -> Result<Rect> {
        let nums: Vec<f64> = numeric_tokens(text).take(4).collect();
        match nums[..] {
            [l, t, w, h] => Ok(Rect::new(l, t, w, h)),
            _ => Err(GeomError::InvalidRect(format!("{text:?}"))),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right(),
            Edge::Bottom => self.bottom(),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Corners clockwise (on screen) from the top-left.
    pub fn points(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// The four edges, following [`Rect::points`].
    pub fn lines(&self) -> [Line; 4] {
        let p = self.points();
        std::array::from_fn(|i| Line::new(p[i], p[(i + 1) % 4]))
    }

    /// Point at fractions `xp`, `yp` of the width and height.
    pub fn point_at(&self, xp: f64, yp: f64) -> Point {
        Point::new(self.left + self.width * xp, self.top + self.height * yp)
    }

    /// Edge-range intersection; negative size when disjoint.
    pub fn clamp(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        )
    }

    /// Overlap rect from the middle two of the sorted edges on each axis.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let mut x = [other.left, other.right(), self.left, self.right()];
        let mut y = [other.top, other.bottom(), self.top, self.bottom()];
        x.sort_by(f64::total_cmp);
        y.sort_by(f64::total_cmp);
        Rect::new(x[1], y[1], x[2] - x[1], y[2] - y[1])
    }

    /// Inclusive containment of a point or a whole rect.
    pub fn contains(&self, target: impl Into<RectTarget>) -> bool {
        match target.into() {
            RectTarget::Point(p) => {
                p.x >= self.left && p.y >= self.top && p.x <= self.right() && p.y <= self.bottom()
            }
            RectTarget::Rect(r) => {
                r.left >= self.left
                    && r.top >= self.top
                    && r.right() <= self.right()
                    && r.bottom() <= self.bottom()
            }
        }
    }

    /// Move an outside point onto the boundary edge crossed on the way to the center.
    pub fn project(&self, p: Point) -> Point {
        if self.contains(p) {
            return p;
        }
        let center = self.center();
        self.lines()
            .iter()
            .find(|ln| segment_intersection(ln.p1, ln.p2, p, center).is_some())
            .map_or(p, |ln| ln.project(p))
    }

    /// Shortest distance from the filled rect to any of `points` (0 when one is inside).
    pub fn distance_to(&self, points: &[Point]) -> f64 {
        let n = self.normalize();
        let min = n.top_left();
        let max = n.bottom_right();
        points
            .iter()
            .map(|p| p.distance_to(p.clamp(min, max)))
            .fold(f64::INFINITY, f64::min)
    }

    /// Minimal translation that moves `rect`'s farthest corner onto this rect's boundary.
    ///
    /// Zero when `rect` is already inside or is not smaller on both axes.
    pub fn encapsulation_vector(&self, rect: &Rect) -> Point {
        if self.contains(*rect) || rect.width >= self.width || rect.height >= self.height {
            return Point::ZERO;
        }
        let a = self.center().farthest_of(&rect.points());
        let candidates = self.lines().map(|ln| ln.nearest_point_to(a));
        Point::vector(a, a.nearest_of(&candidates))
    }

    /// Grow width and height by `size`.
    pub fn extend(&self, size: impl Into<Point>) -> Rect {
        let s = size.into();
        Rect::new(self.left, self.top, self.width + s.x, self.height + s.y)
    }

    /// Push every edge outward by `size`.
    pub fn inflate(&self, size: impl Into<Point>) -> Rect {
        let s = size.into();
        Rect::from_edges(
            self.left - s.x,
            self.top - s.y,
            self.right() + s.x,
            self.bottom() + s.y,
        )
    }

    pub fn offset(&self, by: impl Into<Point>) -> Rect {
        let d = by.into();
        Rect::new(self.left + d.x, self.top + d.y, self.width, self.height)
    }

    /// Round the four edges to `dp` decimals.
    pub fn round(&self, dp: i32) -> Rect {
        Rect::from_edges(
            round(self.left, dp),
            round(self.top, dp),
            round(self.right(), dp),
            round(self.bottom(), dp),
        )
    }

    /// Corners mapped by `m` (the image of a rect is not axis-aligned in general).
    pub fn transform(&self, m: &Matrix) -> [Point; 4] {
        self.points().map(|p| m.apply_point(p))
    }

    /// Same point set with non-negative width and height.
    pub fn normalize(&self) -> Rect {
        let (mut l, mut t, mut w, mut h) = (self.left, self.top, self.width, self.height);
        if w < 0.0 {
            l += w;
            w = -w;
        }
        if h < 0.0 {
            t += h;
            h = -h;
        }
        Rect::new(l, t, w, h)
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.top, self.width, self.height]
    }

    pub fn to_css(&self) -> CssRect {
        let px = |v: f64| format!("{}px", fmt_num(v));
        CssRect {
            left: px(self.left),
            top: px(self.top),
            width: px(self.width),
            height: px(self.height),
        }
    }

    /// Perimeter points no farther apart than `factor`, starting at each corner.
    pub fn to_dot_frame(&self, factor: f64) -> Vec<Point> {
        let mut frame = Vec::new();
        for ln in self.lines() {
            frame.push(ln.p1);
            let len = ln.length();
            let n = (len / factor).ceil();
            if n <= 1.0 || !n.is_finite() {
                continue;
            }
            let step = len / n;
            let v = ln.direction();
            for i in 1..n as usize {
                frame.push(ln.p1 + v * (step * i as f64));
            }
        }
        frame
    }

    /// Closed ring through the corners.
    pub fn to_polyline(&self) -> Polyline {
        let [a, b, c, d] = self.points();
        Polyline::from_nonempty(vec![a, b, c, d, a])
    }

    /// Closed cubic outline with every corner rounded by half the adjacent side.
    ///
    /// Exact-ish circle for a square; a stadium when the sides differ.
    pub fn to_oval(&self) -> Path {
        let (hw, hh) = (self.width.abs() / 2.0, self.height.abs() / 2.0);
        self.to_polyline().to_rounded_path(
            RoundingMethod::Cubic,
            CornerRadii::PerCorner(vec![hw, hh, hw, hh]),
            true,
        )
    }
}

impl Geometry for Rect {
    fn to_shape(&self) -> Shape {
        Shape::Rect(*self)
    }

    /// Rect against rect is an inclusive overlap test; anything else goes to the engine.
    fn intersects(&self, other: &dyn Geometry) -> bool {
        match other.to_shape() {
            Shape::Rect(r) => {
                !(r.left > self.right()
                    || r.right() < self.left
                    || r.top > self.bottom()
                    || r.bottom() < self.top)
            }
            _ => self.intersect_points(other) != Intersection::None,
        }
    }
}

impl Transform for Rect {
    type Output = [Point; 4];
    fn transform(&self, m: &Matrix) -> [Point; 4] {
        Rect::transform(self, m)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            fmt_num(self.left),
            fmt_num(self.top),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}
