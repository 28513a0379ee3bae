//! 2D geometry kernel: points, affine matrices, segments, rects, polylines and paths.
//!
//! All values are immutable; every operation returns a new value. Failures are
//! raised as [`GeomError`] at the point of invalid input.
//!
//! Conventions
//! - Screen coordinates: `y` grows downward. `Point::cross` is negated so that
//!   positive means clockwise on screen.
//! - Tolerances are fixed constants in [`cfg`]; only the intersection engine is tunable.
//! - Shapes intersect through the [`Geometry`] trait, backed by [`DefaultEngine`].

pub mod cfg;
pub mod error;
pub mod geometry;
pub mod line;
pub mod matrix;
pub mod num;
pub mod path;
pub mod point;
pub mod polyline;
pub mod rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::EngineCfg;
pub use error::{GeomError, Result};
pub use geometry::{intersect, intersect_with, DefaultEngine, Geometry, Intersection, IntersectionEngine, Shape};
pub use line::Line;
pub use matrix::{AngleUnit, Decomposition, Matrix, Transform};
pub use path::{Path, PathBuilder, PathCommand};
pub use point::{Point, PointFormat, PointSource};
pub use polyline::{CornerRadii, Polyline, RoundingMethod};
pub use rect::{Edge, Rect, RectTarget, SizeOrigin};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{intersect, Geometry, Intersection};
    pub use crate::line::Line;
    pub use crate::matrix::{AngleUnit, Matrix, Transform};
    pub use crate::path::{Path, PathCommand};
    pub use crate::point::{Point, PointSource};
    pub use crate::polyline::{CornerRadii, Polyline, RoundingMethod};
    pub use crate::rect::Rect;
    pub use nalgebra::{Matrix2 as Mat2, Matrix3 as Mat3, Vector2 as Vec2};
}
