use super::*;
use crate::geometry::Intersection;
use crate::polyline::Polyline;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square() -> Path {
    Path::from_points(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)])
}

#[test]
fn first_command_must_move_or_close() {
    assert_eq!(
        Path::new(vec![PathCommand::Line(p(1.0, 1.0))]),
        Err(GeomError::InvalidPathStart)
    );
    assert_eq!(Path::new(vec![]), Err(GeomError::InvalidPathStart));
    assert!(Path::new(vec![PathCommand::Close]).is_ok());
    assert!(Path::try_from(vec![PathCommand::Move(p(0.0, 0.0))]).is_ok());
    assert_eq!(Path::parse(""), Err(GeomError::InvalidPathStart));
}

#[test]
fn ellipse_is_closed_and_bounded() {
    let e = Path::ellipse(0.0, 0.0, 10.0, 10.0);
    assert!(matches!(e.commands()[0], PathCommand::Move(_)));
    assert!(e.closed());
    assert_eq!(e.commands().len(), 6);
    assert_eq!(e.bounds(), Rect::from_edges(-10.0, -10.0, 10.0, 10.0));
    let wide = Path::ellipse(5.0, 5.0, 4.0, 2.0);
    assert_eq!(wide.bounds(), Rect::from_edges(1.0, 3.0, 9.0, 7.0));
}

#[test]
fn svg_serialization() {
    let sq = square();
    assert_eq!(sq.to_svg(false), "M 0 0 L 10 0 L 10 10 L 0 10 Z");
    assert_eq!(sq.to_svg(true), "M 0 0 L 10 0 L 10 10 L 0 10");
    assert_eq!(sq.to_string(), sq.to_svg(false));

    let arc = Path::move_to(p(0.0, 0.0))
        .arc_to(p(5.0, 5.0), 30.0, true, false, p(10.0, -2.5))
        .quad_to(p(1.0, 1.0), p(2.0, 0.0))
        .build(false);
    assert_eq!(arc.to_string(), "M 0 0 A 5 5 30 1 0 10 -2.5 Q 1 1 2 0");
}

#[test]
fn parse_then_print() {
    let d = "M 0 0 C 1 2 3 4 5 6 A 2 3 0 0 1 9 9 Z";
    let path: Path = d.parse().unwrap();
    assert_eq!(path.to_string(), d);
    assert!(Path::parse("L 1 1").is_err());
}

#[test]
fn bounds_include_controls_but_not_radii() {
    let path = Path::move_to(p(0.0, 0.0))
        .quad_to(p(5.0, 20.0), p(10.0, 0.0))
        .arc_to(p(100.0, 100.0), 0.0, false, true, p(12.0, 1.0))
        .build(false);
    assert_eq!(path.bounds(), Rect::from_edges(0.0, 0.0, 12.0, 20.0));
}

#[test]
fn closed_and_concat() {
    let a = Path::move_to(p(0.0, 0.0)).line_to(p(1.0, 0.0)).build(false);
    let b = Path::move_to(p(5.0, 5.0)).line_to(p(6.0, 5.0)).build(true);
    assert!(!a.closed());
    let ab = a.concat(&[b.clone()]);
    assert!(ab.closed());
    assert_eq!(ab.commands().len(), a.commands().len() + b.commands().len());
    assert_eq!(ab.commands()[2], PathCommand::Move(p(5.0, 5.0)));
}

#[test]
fn polygon_containment() {
    let sq = square();
    assert!(sq.contains(p(5.0, 5.0)));
    assert!(sq.contains(p(1.0, 8.5)));
    assert!(!sq.contains(p(15.0, 5.0)));
    assert!(!sq.contains(p(5.0, -1.0)));
}

#[test]
fn ray_through_reflex_vertex() {
    // notch vertex (5, 5) lies on the leftward ray from (8, 5)
    let pts = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(5.0, 5.0), p(0.0, 10.0)];
    let notched = Path::from_points(&pts);
    assert!(notched.contains(p(8.0, 5.0)));
    assert!(notched.contains(p(3.0, 5.0)));
    assert!(!notched.contains(p(5.0, 8.0)));
    assert_eq!(notched.contains(p(8.0, 5.0)), Polyline::from(&pts, true).unwrap().contains(p(8.0, 5.0)));
}

#[test]
fn curved_containment() {
    let circle = Path::ellipse(0.0, 0.0, 10.0, 10.0);
    assert!(circle.contains(p(3.0, 2.0)));
    assert!(circle.contains(p(-6.0, -6.5)));
    // the ray runs through the joint at (-10, 0)
    assert!(circle.contains(p(3.0, 0.0)));
    assert!(circle.contains(p(-3.0, 0.0)));
    // inside the bounds, outside the curve
    assert!(!circle.contains(p(9.0, 9.0)));
    assert!(!circle.contains(p(-9.5, 8.5)));
}

#[test]
fn nearest_point_along_center_ray() {
    let circle = Path::ellipse(0.0, 0.0, 10.0, 10.0);
    let hit = circle.nearest_point(p(20.0, 20.0)).unwrap();
    assert!((hit.magnitude() - 10.0).abs() < 0.01);
    assert!((hit.x - hit.y).abs() < 1e-6);
    // from inside, still the boundary along the same direction
    let inner = circle.nearest_point(p(1.0, 1.0)).unwrap();
    assert!((inner - hit).magnitude() < 1e-6);
    assert_eq!(circle.nearest_point(p(0.0, 0.0)), None);
}

#[test]
fn transform_maps_points_and_scales_radii() {
    let path = Path::move_to(p(1.0, 1.0))
        .arc_to(p(2.0, 3.0), 0.0, false, true, p(5.0, 1.0))
        .build(true);
    let m = Matrix::IDENTITY.translate(10.0, 0.0).scale(2.0, 3.0);
    let t = m.apply(&path);
    assert_eq!(t.commands()[0], PathCommand::Move(p(12.0, 3.0)));
    assert_eq!(
        t.commands()[1],
        PathCommand::Arc {
            radii: p(4.0, 9.0),
            rotation: 0.0,
            large_arc: false,
            sweep: true,
            end: p(20.0, 3.0)
        }
    );
    assert_eq!(t.commands()[2], PathCommand::Close);

    let mirrored = Matrix::from_scale(-1.0, 1.0).apply(&path);
    let PathCommand::Arc { sweep, radii, .. } = mirrored.commands()[1] else {
        panic!("expected arc");
    };
    assert!(!sweep);
    assert_eq!(radii, p(2.0, 3.0));
}

#[test]
fn intersects_lines_and_curves() {
    let circle = Path::ellipse(0.0, 0.0, 10.0, 10.0);
    let chord = Line::new(p(-20.0, 1.0), p(20.0, 1.0));
    let hits = circle.intersect_points(&chord);
    assert_eq!(hits.len(), 2);
    for h in hits.points() {
        assert!((h.y - 1.0).abs() < 1e-9);
        assert!((h.magnitude() - 10.0).abs() < 0.01);
    }
    let miss = Line::new(p(-20.0, 11.0), p(20.0, 11.0));
    assert_eq!(circle.intersect_points(&miss), Intersection::None);
    assert!(!circle.intersects(&miss));
}

#[test]
fn commands_serialize_tagged() {
    let v = serde_json::to_value(PathCommand::Move(p(1.0, 2.0))).unwrap();
    assert_eq!(v, serde_json::json!({"move": {"x": 1.0, "y": 2.0}}));
    let path: Path = serde_json::from_value(serde_json::json!(["close"])).unwrap();
    assert!(path.closed());
    assert!(serde_json::from_value::<Path>(serde_json::json!([{"line": {"x": 1, "y": 1}}])).is_err());
}
