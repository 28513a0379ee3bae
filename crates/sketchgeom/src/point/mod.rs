//! Immutable 2D point / vector value.
//!
//! A `Point` is either a location or a displacement; the arithmetic does not
//! distinguish the two. Equality is exact component equality.
//!
//! Sign convention
//! - `cross` is the negated perp-dot product: positive means clockwise on a
//!   y-down screen. `angle` and `quadrant` inherit this convention.

mod source;

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::{COORD_MAX, NORMALIZE_EPS};
use crate::error::{GeomError, Result};
use crate::num::{fmt_num, round};

pub use source::PointSource;
pub(crate) use source::numeric_tokens;

/// 2D coordinate or vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// String layouts accepted by [`Point::format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointFormat {
    /// `{x:1, y:2}`
    Object,
    /// `[1, 2]`
    Array,
    /// `1x2`
    Size,
    /// `1 2`
    Svg,
    /// `[1,2]`, same as `Display`.
    #[default]
    Plain,
}

/// CSS absolute position (`left`/`top` in px).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssPosition {
    pub left: String,
    pub top: String,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);
    pub const ORIGIN: Point = Point::new(0.0, 0.0);
    pub const MAX: Point = Point::new(COORD_MAX, COORD_MAX);
    pub const MIN: Point = Point::new(-COORD_MAX, -COORD_MAX);
    pub const UP: Point = Point::new(0.0, -1.0);
    pub const DOWN: Point = Point::new(0.0, 1.0);
    pub const LEFT: Point = Point::new(-1.0, 0.0);
    pub const RIGHT: Point = Point::new(1.0, 0.0);
    pub const X_AXIS: Point = Point::new(1.0, 0.0);
    pub const Y_AXIS: Point = Point::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert any accepted point representation.
    pub fn from_source(src: impl Into<PointSource>) -> Result<Point> {
        src.into().resolve()
    }

    /// Parse the first two numbers found in `text`: `"(100 100)"`, `"50,50"`, `"[1.5, -2]"`.
    pub fn parse(text: &str) -> Result<Point> {
        let mut nums = numeric_tokens(text);
        match (nums.next(), nums.next()) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(GeomError::InvalidPointSource(format!("{text:?}"))),
        }
    }

    /// Read the point stored at `buffer[index]`, `buffer[index + 1]`.
    pub fn from_buffer(buffer: &[f64], index: usize) -> Result<Point> {
        let window = index.checked_add(2).and_then(|end| buffer.get(index..end));
        match window {
            Some(&[x, y]) => Ok(Point::new(x, y)),
            _ => Err(GeomError::BufferTooShort {
                len: buffer.len(),
                index,
            }),
        }
    }

    /// True for JSON values shaped like `{x: number, y: number}`.
    pub fn is_point_like(value: &serde_json::Value) -> bool {
        value.get("x").is_some_and(serde_json::Value::is_number)
            && value.get("y").is_some_and(serde_json::Value::is_number)
    }

    /// Mean of `points`; zero for an empty slice.
    pub fn average(points: &[Point]) -> Point {
        if points.is_empty() {
            return Point::ZERO;
        }
        let sum = points.iter().fold(Point::ZERO, |acc, p| acc + *p);
        sum / points.len() as f64
    }

    /// `[x0, y0, x1, y1, ...]`
    pub fn flatten(points: &[Point]) -> Vec<f64> {
        points.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Vector from `origin` to `dest`.
    #[inline]
    pub fn vector(origin: Point, dest: Point) -> Point {
        dest - origin
    }

    /// Width alias of `x`.
    #[inline]
    pub fn w(&self) -> f64 {
        self.x
    }

    /// Height alias of `y`.
    #[inline]
    pub fn h(&self) -> f64 {
        self.y
    }

    /// Apply `f` to both components.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Point {
        Point::new(f(self.x), f(self.y))
    }

    pub fn add(self, other: impl Into<Point>) -> Point {
        self + other.into()
    }

    pub fn subtract(self, other: impl Into<Point>) -> Point {
        self - other.into()
    }

    /// Elementwise product; a scalar broadcasts.
    pub fn multiply(self, other: impl Into<Point>) -> Point {
        self * other.into()
    }

    /// Elementwise quotient; a scalar broadcasts.
    pub fn divide(self, other: impl Into<Point>) -> Point {
        self / other.into()
    }

    #[inline]
    pub fn dot(self, other: impl Into<Point>) -> f64 {
        let o = other.into();
        self.x * o.x + self.y * o.y
    }

    /// Negated perp-dot product (positive is clockwise on screen).
    #[inline]
    pub fn cross(self, other: impl Into<Point>) -> f64 {
        let o = other.into();
        -(self.x * o.y - self.y * o.x)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Alias of [`Point::magnitude`].
    #[inline]
    pub fn length(self) -> f64 {
        self.magnitude()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns zero when the magnitude is at or below `1e-5`, and `self` when it
    /// is already 1 (to within rounding), which makes the operation idempotent.
    pub fn normalize(self) -> Point {
        let len = self.magnitude();
        if (len - 1.0).abs() <= 4.0 * f64::EPSILON {
            self
        } else if len > NORMALIZE_EPS {
            self * (1.0 / len)
        } else {
            Point::ZERO
        }
    }

    /// Rotate by 90°: `(y, -x)`.
    #[inline]
    pub fn perp(self) -> Point {
        Point::new(self.y, -self.x)
    }

    /// Rotate by -90°: `(-y, x)`.
    #[inline]
    pub fn perpcw(self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Angle from `+X` in `[-π, π]`; see [`Point::angle_to`].
    #[inline]
    pub fn angle(self) -> f64 {
        self.angle_to(Point::RIGHT)
    }

    /// Signed angle between `self` and `relative_to`, `atan2(cross, dot)`.
    pub fn angle_to(self, relative_to: impl Into<Point>) -> f64 {
        let to = relative_to.into();
        self.cross(to).atan2(self.dot(to))
    }

    /// Quadrant of the vector, numbered clockwise from south-east: 0..=3.
    pub fn quadrant(self) -> u8 {
        let a = self.angle();
        if a > 0.0 {
            if a < 1.5708 {
                0
            } else {
                1
            }
        } else if a < -1.5708 {
            2
        } else {
            3
        }
    }

    pub fn rotate(self, radians: f64) -> Point {
        let (sin, cos) = radians.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Linear interpolation; `t = 0` is `self`, `t = 1` is `to`.
    pub fn lerp(self, to: Point, t: f64) -> Point {
        let omt = 1.0 - t;
        Point::new(self.x * omt + to.x * t, self.y * omt + to.y * t)
    }

    /// Projection of `self` onto `axis`.
    pub fn project(self, axis: Point) -> Point {
        let na = axis.normalize();
        let nv = self.normalize();
        na * (self.length() * na.dot(nv))
    }

    #[inline]
    pub fn distance_to(self, to: Point) -> f64 {
        (self - to).magnitude()
    }

    /// Closest of `points`; first wins ties, `self` when empty.
    pub fn nearest_of(self, points: &[Point]) -> Point {
        self.extreme_of(points, |nd, sd| nd < sd)
    }

    /// Farthest of `points`; first wins ties, `self` when empty.
    pub fn farthest_of(self, points: &[Point]) -> Point {
        self.extreme_of(points, |nd, sd| nd > sd)
    }

    fn extreme_of(self, points: &[Point], better: impl Fn(f64, f64) -> bool) -> Point {
        let mut best: Option<(Point, f64)> = None;
        for &p in points {
            let d = self.distance_to(p);
            if best.as_ref().is_none_or(|&(_, bd)| better(d, bd)) {
                best = Some((p, d));
            }
        }
        best.map_or(self, |(p, _)| p)
    }

    /// Componentwise clamp into `[min, max]`.
    pub fn clamp(self, min: Point, max: Point) -> Point {
        Point::new(
            self.x.max(min.x).min(max.x),
            self.y.max(min.y).min(max.y),
        )
    }

    pub fn round(self, precision: i32) -> Point {
        self.map(|c| round(c, precision))
    }

    pub fn ceil(self) -> Point {
        self.map(f64::ceil)
    }

    pub fn floor(self) -> Point {
        self.map(f64::floor)
    }

    /// Both components negated.
    pub fn inverse(self) -> Point {
        -self
    }

    /// Replace NaN and infinite components with 1.
    pub fn fix_nan(self) -> Point {
        self.fix_nan_with(1.0)
    }

    /// Replace NaN and infinite components with `replacement`.
    pub fn fix_nan_with(self, replacement: f64) -> Point {
        self.map(|c| if c.is_finite() { c } else { replacement })
    }

    pub fn format(self, fmt: PointFormat) -> String {
        let (x, y) = (fmt_num(self.x), fmt_num(self.y));
        match fmt {
            PointFormat::Object => format!("{{x:{x}, y:{y}}}"),
            PointFormat::Array => format!("[{x}, {y}]"),
            PointFormat::Size => format!("{x}x{y}"),
            PointFormat::Svg => format!("{x} {y}"),
            PointFormat::Plain => self.to_string(),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn to_css(self) -> CssPosition {
        CssPosition {
            left: format!("{}px", fmt_num(self.x)),
            top: format!("{}px", fmt_num(self.y)),
        }
    }

    /// `{"x": .., "y": ..}`
    pub fn to_object(self) -> serde_json::Value {
        serde_json::json!({ "x": self.x, "y": self.y })
    }

    #[inline]
    pub fn to_vector2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", fmt_num(self.x), fmt_num(self.y))
    }
}

impl From<f64> for Point {
    /// Broadcast to both axes.
    fn from(v: f64) -> Self {
        Point::new(v, v)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.to_vector2()
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: Point) -> Point {
        Point::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
