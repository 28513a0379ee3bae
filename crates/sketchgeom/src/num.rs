//! Scalar helpers: rounding, angle units and number formatting.

use std::f64::consts::TAU;

/// Round `val` to a multiple of `factor`.
#[inline]
pub fn round_clamp(val: f64, factor: f64) -> f64 {
    js_round(val / factor) * factor
}

/// Round `val` to `precision` decimal places (negative precision rounds to tens, hundreds, ...).
#[inline]
pub fn round(val: f64, precision: i32) -> f64 {
    let f = 10f64.powi(precision);
    js_round(val * f) / f
}

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (TAU / 360.0)
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (360.0 / TAU)
}

/// Snap an angle to the nearest multiple of `factor` whole degrees.
pub fn round_radians(radians: f64, factor: f64) -> f64 {
    let d = js_round(to_degrees(radians));
    to_radians(js_round(d / factor) * factor)
}

/// Half-up rounding (`-2.5 -> -2`), unlike `f64::round` which rounds half away from zero.
#[inline]
pub(crate) fn js_round(v: f64) -> f64 {
    let f = v.floor();
    if v - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

/// Shortest round-trip decimal for `v`, with `-0` printed as `0` and non-finite values spelled out.
pub fn fmt_num(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}
