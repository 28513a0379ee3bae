//! Tolerances and fixed constants.
//!
//! Policy
//! - Kernel tolerances are fixed constants; call sites never pass epsilons.
//! - The only tunable surface is the intersection engine (`EngineCfg`).

/// Vectors at or below this magnitude normalize to zero.
pub const NORMALIZE_EPS: f64 = 1e-5;
/// `|det|` below this makes a matrix singular; also the component tolerance of `Matrix::approx_eq`.
pub const DET_EPS: f64 = 1e-14;
/// Points closer than this to a polyline edge count as inside.
pub const EDGE_EPS: f64 = 1e-5;

/// Cubic Bezier control distance factor for a quarter circle.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Largest coordinate of `Point::MAX` (i32 range).
pub const COORD_MAX: f64 = 2_147_483_647.0;
/// Largest integer exactly representable in an f64 (2^53 - 1); rays are this long.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Decimal places of the key used to dedup intersection points.
pub const DEDUP_DECIMALS: usize = 9;

/// Intersection engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct EngineCfg {
    /// Curves closer than this to their chord are treated as straight.
    pub flatness: f64,
    /// Recursion limit for curve/curve subdivision.
    pub max_depth: u32,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            flatness: 1e-7,
            max_depth: 40,
        }
    }
}
