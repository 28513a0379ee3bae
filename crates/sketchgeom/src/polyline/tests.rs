use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square() -> Polyline {
    Polyline::new(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 0.0)])
        .unwrap()
}

#[test]
fn construction() {
    assert_eq!(Polyline::new(vec![]), Err(GeomError::EmptyPolyline));
    let open = Polyline::from(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], false).unwrap();
    assert!(!open.closed());
    let closed = Polyline::from(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], true).unwrap();
    assert!(closed.closed());
    assert_eq!(closed.points().len(), 4);
    // already closed: nothing appended
    assert_eq!(Polyline::from(closed.points(), true).unwrap(), closed);
    // a single point is its own closed chain
    assert!(Polyline::from(&[p(3.0, 3.0)], true).unwrap().closed());
}

#[test]
fn from_sources_accepts_mixed_input() {
    let poly = Polyline::from_sources(
        vec![
            PointSource::from("0,0"),
            PointSource::from((4.0, 0.0)),
            PointSource::from(vec![4.0, 3.0]),
        ],
        true,
    )
    .unwrap();
    assert_eq!(poly.points(), &[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(0.0, 0.0)]);
    assert_eq!(poly.length(), 12.0);
    assert!(Polyline::from_sources(vec!["nope"], false).is_err());
}

#[test]
fn lines_skip_repeated_points() {
    let poly = Polyline::new(vec![p(0.0, 0.0), p(0.0, 0.0), p(3.0, 4.0), p(3.0, 4.0)]).unwrap();
    assert_eq!(poly.lines(), vec![Line::new(p(0.0, 0.0), p(3.0, 4.0))]);
    assert_eq!(poly.length(), 5.0);
}

#[test]
fn extremes_prefer_first() {
    let poly = Polyline::new(vec![p(0.0, 5.0), p(0.0, 1.0), p(7.0, 1.0), p(7.0, 9.0)]).unwrap();
    assert_eq!(poly.left(), p(0.0, 5.0));
    assert_eq!(poly.right(), p(7.0, 1.0));
    assert_eq!(poly.top(), p(0.0, 1.0));
    assert_eq!(poly.bottom(), p(7.0, 9.0));
    assert_eq!(poly.bounds(), Rect::new(0.0, 1.0, 7.0, 8.0));
    assert_eq!(poly.center(), p(3.5, 4.0));
}

#[test]
fn square_containment() {
    let sq = square();
    assert!(sq.contains(p(5.0, 5.0)));
    assert!(!sq.contains(p(15.0, 5.0)));
    assert!(sq.contains(p(0.0, 5.0)));
    assert!(sq.contains(p(10.0, 10.0)));
    assert!(sq.contains(p(5.0, 1e-6)));
    assert!(sq.contains_all(&[p(1.0, 1.0), p(9.0, 9.0)]));
    assert!(!sq.contains_all(&[p(1.0, 1.0), p(-1.0, 9.0)]));
}

#[test]
fn concave_containment_through_vertex_height() {
    // "M" shape; the ray at y = 5 passes exactly through the notch vertex
    let m = Polyline::from(
        &[p(0.0, 0.0), p(5.0, 5.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)],
        true,
    )
    .unwrap();
    assert!(m.contains(p(2.0, 5.0)));
    assert!(m.contains(p(5.0, 8.0)));
    assert!(!m.contains(p(5.0, 2.0)));
    assert!(m.contains(p(8.0, 5.0)));
}

#[test]
fn nearest_and_distance() {
    let sq = square();
    assert_eq!(sq.nearest_point_to(p(5.0, -3.0)), p(5.0, 0.0));
    assert_eq!(sq.distance_to(p(13.0, 5.0)), 3.0);
    assert_eq!(sq.distance_to(p(5.0, 4.0)), 4.0);
    let dot = Polyline::new(vec![p(1.0, 1.0)]).unwrap();
    assert_eq!(dot.distance_to(p(4.0, 5.0)), 5.0);
}

#[test]
fn inflate_is_radial() {
    let diamond = Polyline::new(vec![p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0), p(0.0, -1.0)]).unwrap();
    let grown = diamond.inflate(1.0);
    assert_eq!(grown.points(), &[p(2.0, 0.0), p(0.0, 2.0), p(-2.0, 0.0), p(0.0, -2.0)]);
}

#[test]
fn transform_maps_every_point() {
    let sq = square();
    let moved = Matrix::IDENTITY.translate(1.0, 2.0).apply(&sq);
    assert_eq!(moved.points()[2], p(11.0, 12.0));
    assert_eq!(moved.points().len(), 5);
}

#[test]
fn to_path_and_zero_radius() {
    let sq = square();
    let plain = sq.to_path(true);
    assert_eq!(plain.commands().len(), 6);
    assert_eq!(plain.commands()[0], PathCommand::Move(p(0.0, 0.0)));
    assert_eq!(plain.commands()[5], PathCommand::Close);
    for method in [RoundingMethod::Quadratic, RoundingMethod::Cubic] {
        assert_eq!(sq.to_rounded_path(method, 0.0, true), plain);
        assert_eq!(sq.to_rounded_path(method, Vec::<f64>::new(), true), plain);
        assert_eq!(sq.to_rounded_path(method, -2.0, false), sq.to_path(false));
    }
}

#[test]
fn rounded_square_corners() {
    let sq = square();
    let path = sq.to_rounded_path(RoundingMethod::Quadratic, 2.0, true);
    let cmds = path.commands();
    // corner 0 is the vertex at (10, 0)
    assert_eq!(cmds[0], PathCommand::Move(p(8.0, 0.0)));
    assert_eq!(
        cmds[1],
        PathCommand::Quadratic {
            ctrl: p(10.0, 0.0),
            end: p(10.0, 2.0)
        }
    );
    assert_eq!(cmds.len(), 4 * 2 + 1);

    let cubic = sq.to_rounded_path(RoundingMethod::Cubic, 2.0, false);
    let PathCommand::Cubic { c1, c2, end } = cubic.commands()[1] else {
        panic!("expected cubic, got {:?}", cubic.commands()[1]);
    };
    assert_eq!(end, p(10.0, 2.0));
    assert!((c1 - p(8.0 + 2.0 * KAPPA, 0.0)).magnitude() < 1e-12);
    assert!((c2 - p(10.0, 2.0 - 2.0 * KAPPA)).magnitude() < 1e-12);
    assert!(!cubic.closed());
}

#[test]
fn radius_is_capped_by_half_segments() {
    let sq = square();
    let path = sq.to_rounded_path(RoundingMethod::Quadratic, vec![100.0, 1.0], false);
    assert_eq!(path.commands()[0], PathCommand::Move(p(5.0, 0.0)));
    assert_eq!(path.commands()[2], PathCommand::Line(p(10.0, 9.0)));
    // missing per-corner entries mean a sharp corner
    assert_eq!(path.commands()[4], PathCommand::Line(p(0.0, 10.0)));
}

#[test]
fn iterates_points() {
    let sq = square();
    assert_eq!(sq.iter().count(), 5);
    let xs: Vec<f64> = (&sq).into_iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 10.0, 10.0, 0.0, 0.0]);
}

#[test]
fn crossing_polylines() {
    let sq = square();
    let diag = Polyline::new(vec![p(-5.0, 5.0), p(5.0, 5.0), p(5.0, 15.0)]).unwrap();
    let hits = sq.intersect_points(&diag);
    assert_eq!(hits.points(), &[p(5.0, 10.0), p(0.0, 5.0)]);
}
