use super::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn close(a: Point, b: Point, tol: f64) -> bool {
    (a - b).magnitude() < tol
}

#[test]
fn identity_is_default_and_noop() {
    let m = Matrix::default();
    assert!(m.is_identity());
    assert_eq!(m.apply_point(Point::new(3.0, -4.0)), Point::new(3.0, -4.0));
    assert_eq!(m.determinant(), 1.0);
}

#[test]
fn builders_compose_in_application_order() {
    // translate is applied first, then scale
    let m = Matrix::from_scale(2.0, 3.0).translate(1.0, 1.0);
    assert_eq!(m.apply_point(Point::new(1.0, 1.0)), Point::new(4.0, 6.0));

    let r = Matrix::from_rotation(90.0, AngleUnit::Degrees);
    assert!(close(r.apply_point(Point::RIGHT), Point::DOWN, 1e-12));
    let r2 = Matrix::from_rotation(FRAC_PI_2, AngleUnit::Radians);
    assert!(r.approx_eq(&r2));
}

#[test]
fn multiply_matches_nalgebra_product() {
    let a = Matrix::new(1.2, 0.1, -0.05, 0.9, 0.3, -0.2);
    let b = Matrix::from_rotation(0.7, AngleUnit::Radians).translate(5.0, -1.0);
    let ab = a.multiply(&b);
    let expect = Matrix::from_matrix3(&(a.to_matrix3() * b.to_matrix3()));
    for (x, y) in ab.to_array().iter().zip(expect.to_array()) {
        assert!((x - y).abs() < 1e-12);
    }
    assert_eq!(a.concat(&b), ab);
    let p = Point::new(2.0, 7.0);
    assert!(close(ab.apply_point(p), a.apply_point(b.apply_point(p)), 1e-12));
}

#[test]
fn inverse_round_trip() {
    let m = Matrix::from_translation(10.0, -4.0)
        .rotate(30.0, AngleUnit::Degrees)
        .scale(2.0, 0.5);
    let inv = m.inverse().unwrap();
    let p = Point::new(3.5, -8.25);
    assert!(close(inv.apply_point(m.apply_point(p)), p, 1e-9));
    assert!(close(m.divide(&m).unwrap().apply_point(p), p, 1e-9));
}

#[test]
fn singular_matrix_rejected() {
    let m = Matrix::from_scale(0.0, 1.0);
    assert!(!m.is_invertible());
    assert!(matches!(m.inverse(), Err(GeomError::NotInvertible { .. })));
    assert!(Matrix::IDENTITY.divide(&m).is_err());
    // just above the threshold still inverts
    assert!(Matrix::new(1e-6, 0.0, 0.0, 1e-6, 0.0, 0.0).inverse().is_ok());
}

#[test]
fn decompose_recovers_trs() {
    let m = Matrix::from_translation(5.0, 6.0)
        .rotate(FRAC_PI_4, AngleUnit::Radians)
        .scale(2.0, 3.0);
    let (scale, rotation, translation) = m.decompose();
    assert!(close(scale, Point::new(2.0, 3.0), 1e-12));
    assert!((rotation - FRAC_PI_4).abs() < 1e-12);
    assert_eq!(translation, Point::new(5.0, 6.0));
    let d = m.decomposition();
    assert_eq!(d.scale, scale);
    assert_eq!(d.rotate, rotation);
}

#[test]
fn polar_rotation_matches_pure_rotation() {
    let r = Matrix::from_rotation(0.4, AngleUnit::Radians).scale(3.0, 3.0);
    assert!((r.polar_rotation().unwrap() - 0.4).abs() < 1e-12);
    let reflect = Matrix::from_scale(-1.0, 1.0);
    assert!(!reflect.is_orientation_preserving());
    assert!(reflect.polar_rotation().is_none());
}

#[test]
fn apply_keeps_input_shape() {
    let m = Matrix::from_translation(1.0, 2.0);
    let pts = vec![Point::ZERO, Point::new(1.0, 1.0)];
    assert_eq!(
        m.apply(&pts),
        vec![Point::new(1.0, 2.0), Point::new(2.0, 3.0)]
    );
    assert_eq!(m.apply(&pts[..1]), vec![Point::new(1.0, 2.0)]);
    assert_eq!(m.apply(&Point::ZERO), Point::new(1.0, 2.0));
    assert_eq!(m.apply_xy(0.0, 0.0), (1.0, 2.0));
}

#[test]
fn css_serialization() {
    let m = Matrix::new(1.0, 0.0, 0.0, 1.0, 10.5, -20.0);
    assert_eq!(m.to_css(), "matrix(1,0,0,1,10.5,-20)");
    assert_eq!(m.to_string(), m.to_css());
    assert_eq!(
        m.to_css3d(),
        "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 10.5, -20, 0, 1)"
    );
}

#[test]
fn divide_scalar_and_accessors() {
    let m = Matrix::new(2.0, 4.0, 6.0, 8.0, 10.0, 12.0).divide_scalar(2.0);
    assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!((m.a(), m.b(), m.c(), m.d(), m.e(), m.f()), (1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    assert_eq!(m.translation(), Vector2::new(5.0, 6.0));
    assert_eq!(m.linear(), Matrix2::new(1.0, 3.0, 2.0, 4.0));
}
