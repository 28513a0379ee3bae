//! Immutable 2×3 affine matrix.
//!
//! Layout follows the CSS/canvas convention: a point maps as
//! `(x, y) ↦ (x·m11 + y·m21 + m31, x·m12 + y·m22 + m32)`.
//! Composition right-multiplies: `a.multiply(&b)` applies `b` first, then `a`.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use nalgebra::{Matrix2, Matrix3, Vector2, SVD};
use serde::{Deserialize, Serialize};

use crate::cfg::DET_EPS;
use crate::error::{GeomError, Result};
use crate::num::{fmt_num, to_radians};
use crate::point::Point;

/// Unit of an angle argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Values a [`Matrix`] can be applied to.
///
/// The output keeps the shape of the input where the shape survives an affine
/// map (a point stays a point, a path stays a path).
pub trait Transform {
    type Output;
    fn transform(&self, m: &Matrix) -> Self::Output;
}

/// Scale, rotation (radians) and translation extracted by [`Matrix::decomposition`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Decomposition {
    pub scale: Point,
    pub rotate: f64,
    pub translate: Point,
}

/// 2D affine transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub m31: f64,
    pub m32: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            m11: a,
            m12: b,
            m21: c,
            m22: d,
            m31: e,
            m32: f,
        }
    }

    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Self::IDENTITY.scale(sx, sy)
    }

    pub fn from_translation(tx: f64, ty: f64) -> Self {
        Self::IDENTITY.translate(tx, ty)
    }

    pub fn from_rotation(angle: f64, unit: AngleUnit) -> Self {
        Self::IDENTITY.rotate(angle, unit)
    }

    /// Homogeneous 3×3 form (column-vector convention).
    pub fn from_matrix3(m: &Matrix3<f64>) -> Self {
        Self::new(m[(0, 0)], m[(1, 0)], m[(0, 1)], m[(1, 1)], m[(0, 2)], m[(1, 2)])
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.m11
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.m12
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.m21
    }
    #[inline]
    pub fn d(&self) -> f64 {
        self.m22
    }
    #[inline]
    pub fn e(&self) -> f64 {
        self.m31
    }
    #[inline]
    pub fn f(&self) -> f64 {
        self.m32
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() >= DET_EPS
    }

    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY)
    }

    /// Componentwise equality within `1e-14`.
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() < DET_EPS)
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.determinant() > 0.0
    }

    /// `self × [a2 b2 c2 d2 e2 f2]`; the new matrix is applied first.
    pub fn transform(&self, a2: f64, b2: f64, c2: f64, d2: f64, e2: f64, f2: f64) -> Matrix {
        let Matrix {
            m11: a1,
            m12: b1,
            m21: c1,
            m22: d1,
            m31: e1,
            m32: f1,
        } = *self;
        Matrix::new(
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        )
    }

    pub fn multiply(&self, m: &Matrix) -> Matrix {
        self.transform(m.m11, m.m12, m.m21, m.m22, m.m31, m.m32)
    }

    /// Alias of [`Matrix::multiply`].
    pub fn concat(&self, m: &Matrix) -> Matrix {
        self.multiply(m)
    }

    /// `self × m⁻¹`.
    pub fn divide(&self, m: &Matrix) -> Result<Matrix> {
        Ok(self.multiply(&m.inverse()?))
    }

    /// Every coefficient divided by `dv`.
    pub fn divide_scalar(&self, dv: f64) -> Matrix {
        let [a, b, c, d, e, f] = self.to_array().map(|v| v / dv);
        Matrix::new(a, b, c, d, e, f)
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Matrix {
        self.transform(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn scale_uniform(&self, f: f64) -> Matrix {
        self.scale(f, f)
    }

    pub fn scale_by(&self, s: Point) -> Matrix {
        self.scale(s.x, s.y)
    }

    pub fn translate(&self, tx: f64, ty: f64) -> Matrix {
        self.transform(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn translate_by(&self, t: Point) -> Matrix {
        self.translate(t.x, t.y)
    }

    pub fn rotate(&self, angle: f64, unit: AngleUnit) -> Matrix {
        let radians = match unit {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => to_radians(angle),
        };
        let (sin, cos) = radians.sin_cos();
        self.transform(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Inverse transform; fails when `|det| < 1e-14`.
    pub fn inverse(&self) -> Result<Matrix> {
        let dt = self.determinant();
        if dt.abs() < DET_EPS {
            tracing::debug!(det = dt, "rejecting singular matrix");
            return Err(GeomError::NotInvertible { det: dt });
        }
        Ok(Matrix::new(
            self.m22 / dt,
            -self.m12 / dt,
            -self.m21 / dt,
            self.m11 / dt,
            (self.m21 * self.m32 - self.m22 * self.m31) / dt,
            -(self.m11 * self.m32 - self.m12 * self.m31) / dt,
        ))
    }

    /// `(scale, rotation, translation)`, see [`Matrix::decomposition`].
    pub fn decompose(&self) -> (Point, f64, Point) {
        let d = self.decomposition();
        (d.scale, d.rotate, d.translate)
    }

    /// Split into scale, rotation and translation, folding shear into the y scale.
    pub fn decomposition(&self) -> Decomposition {
        let rotation = self.m12.atan2(self.m11);
        let shear = self.m22.atan2(self.m21) - FRAC_PI_2 - rotation;
        let scale_x = self.m11.hypot(self.m12);
        let scale_y = self.m21.hypot(self.m22) * shear.cos();
        Decomposition {
            scale: Point::new(scale_x, scale_y),
            rotate: rotation,
            translate: Point::new(self.m31, self.m32),
        }
    }

    /// Angle (radians) of the rotation factor `Q` of the polar decomposition `L = Q S`
    /// of the linear part. `None` if orientation-reversing.
    pub fn polar_rotation(&self) -> Option<f64> {
        let svd = SVD::new(self.linear(), true, true);
        let q = svd.u? * svd.v_t?;
        let det_q = q.determinant();
        if !det_q.is_finite() || det_q < 0.0 {
            return None;
        }
        Some(q[(1, 0)].atan2(q[(0, 0)]))
    }

    /// Apply to anything [`Transform`]able.
    pub fn apply<T: Transform + ?Sized>(&self, target: &T) -> T::Output {
        target.transform(self)
    }

    #[inline]
    pub fn apply_point(&self, p: Point) -> Point {
        let (x, y) = self.apply_xy(p.x, p.y);
        Point::new(x, y)
    }

    #[inline]
    pub fn apply_xy(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.m11 + y * self.m21 + self.m31,
            x * self.m12 + y * self.m22 + self.m32,
        )
    }

    /// Linear part in column-vector form.
    pub fn linear(&self) -> Matrix2<f64> {
        Matrix2::new(self.m11, self.m21, self.m12, self.m22)
    }

    pub fn translation(&self) -> Vector2<f64> {
        Vector2::new(self.m31, self.m32)
    }

    pub fn to_matrix3(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.m11, self.m21, self.m31, //
            self.m12, self.m22, self.m32, //
            0.0, 0.0, 1.0,
        )
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.m31, self.m32]
    }

    /// CSS 2D form: `matrix(a,b,c,d,e,f)`.
    pub fn to_css(&self) -> String {
        let parts: Vec<String> = self.to_array().into_iter().map(fmt_num).collect();
        format!("matrix({})", parts.join(","))
    }

    /// CSS 3D form with the identity z row.
    pub fn to_css3d(&self) -> String {
        let [a, b, c, d, e, f] = self.to_array().map(fmt_num);
        format!("matrix3d({a}, {b}, 0, 0, {c}, {d}, 0, 0, 0, 0, 1, 0, {e}, {f}, 0, 1)")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Transform for Point {
    type Output = Point;
    fn transform(&self, m: &Matrix) -> Point {
        m.apply_point(*self)
    }
}

impl Transform for [Point] {
    type Output = Vec<Point>;
    fn transform(&self, m: &Matrix) -> Vec<Point> {
        self.iter().map(|p| m.apply_point(*p)).collect()
    }
}

impl Transform for Vec<Point> {
    type Output = Vec<Point>;
    fn transform(&self, m: &Matrix) -> Vec<Point> {
        self.as_slice().transform(m)
    }
}

#[cfg(test)]
mod tests;
