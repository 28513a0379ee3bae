//! Segment helpers on top of `kurbo` curve primitives.
//!
//! Paths lower to `kurbo::PathSeg`; arcs become cubics through `kurbo::Arc`.
//! Root finding and extrema come from kurbo; only the crossing rule and the
//! subdivision tests used by the engine live here.

use kurbo::{
    Arc as ArcCurve, CubicBez, Line as Chord, ParamCurve, ParamCurveExtrema, PathSeg,
    Rect as Bounds, SvgArc, Vec2,
};

use crate::num::to_radians;
use crate::point::Point;

/// Deviation allowed between an arc and its cubic pieces.
const ARC_TOLERANCE: f64 = 1e-9;

/// Straight segment, `None` when both ends coincide.
pub(crate) fn line_seg(a: Point, b: Point) -> Option<PathSeg> {
    (a != b).then(|| PathSeg::Line(Chord::new(a, b)))
}

/// SVG endpoint arc as cubic segments; radii too small to reach `to` are scaled up.
///
/// A zero radius is a straight line and `from == to` draws nothing.
pub(crate) fn arc_segments(
    from: Point,
    radii: Point,
    rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
    to: Point,
) -> Vec<PathSeg> {
    let svg = SvgArc {
        from: from.into(),
        to: to.into(),
        radii: Vec2::new(radii.x.abs(), radii.y.abs()),
        x_rotation: to_radians(rotation_deg),
        large_arc,
        sweep,
    };
    let Some(arc) = ArcCurve::from_svg_arc(&svg) else {
        return line_seg(from, to).into_iter().collect();
    };
    let mut out = Vec::new();
    let mut prev: kurbo::Point = from.into();
    arc.to_cubic_beziers(ARC_TOLERANCE, |c1, c2, end| {
        out.push(PathSeg::Cubic(CubicBez::new(prev, c1, c2, end)));
        prev = end;
    });
    if let Some(PathSeg::Cubic(last)) = out.last_mut() {
        last.p3 = to.into();
    }
    out
}

/// Cubic form of a curve (quadratics are degree-raised); lines have none.
pub(crate) fn to_cubic(seg: PathSeg) -> Option<CubicBez> {
    match seg {
        PathSeg::Line(_) => None,
        PathSeg::Quad(q) => Some(q.raise()),
        PathSeg::Cubic(c) => Some(c),
    }
}

/// Control points of a segment, in order.
pub(crate) fn controls(seg: &PathSeg) -> Vec<Point> {
    let pts: Vec<kurbo::Point> = match *seg {
        PathSeg::Line(l) => vec![l.p0, l.p1],
        PathSeg::Quad(q) => vec![q.p0, q.p1, q.p2],
        PathSeg::Cubic(c) => vec![c.p0, c.p1, c.p2, c.p3],
    };
    pts.into_iter().map(Point::from).collect()
}

/// Largest distance of the inner control points from the chord.
pub(crate) fn flatness(c: &CubicBez) -> f64 {
    let chord = c.p3 - c.p0;
    let len = chord.hypot();
    if len == 0.0 {
        return c.p0.distance(c.p1).max(c.p0.distance(c.p2));
    }
    let off = |p: kurbo::Point| (p - c.p0).cross(chord).abs() / len;
    off(c.p1).max(off(c.p2))
}

/// Diagonal of the curve's bounding box.
pub(crate) fn extent(c: &CubicBez) -> f64 {
    let b = c.bounding_box();
    b.width().hypot(b.height())
}

pub(crate) fn boxes_overlap(a: Bounds, b: Bounds, slack: f64) -> bool {
    a.x0 <= b.x1 + slack && b.x0 <= a.x1 + slack && a.y0 <= b.y1 + slack && b.y0 <= a.y1 + slack
}

/// Crossings of the leftward horizontal ray from `p` with `segments`.
///
/// Each segment is cut into pieces monotone in `y`; a piece crosses when its
/// ends straddle `p.y` half-open (`(a.y > y) != (b.y > y)`), so a vertex or a
/// tangent point touching the ray is counted twice or not at all, never once.
pub(crate) fn crossings_left_of(segments: &[PathSeg], p: Point) -> usize {
    let mut count = 0;
    for seg in segments {
        for range in seg.extrema_ranges() {
            let piece = seg.subsegment(range);
            let (a, b) = (piece.start(), piece.end());
            if (a.y > p.y) != (b.y > p.y) && crossing_x(&piece, p.y) < p.x {
                count += 1;
            }
        }
    }
    count
}

/// `x` where a piece monotone in `y` meets the horizontal line at `y`.
fn crossing_x(piece: &PathSeg, y: f64) -> f64 {
    let (a, b) = (piece.start(), piece.end());
    let chord_x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
    if let PathSeg::Line(_) = piece {
        return chord_x;
    }
    let bb = piece.bounding_box();
    let across = Chord::new((bb.x0 - 1.0, y), (bb.x1 + 1.0, y));
    piece
        .intersect_line(across)
        .first()
        .map_or(chord_x, |hit| piece.eval(hit.segment_t).x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn quarter_arc_stays_on_the_circle() {
        let segs = arc_segments(p(10.0, 0.0), p(10.0, 10.0), 0.0, false, true, p(0.0, 10.0));
        assert!(!segs.is_empty());
        for seg in &segs {
            for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let q: Point = seg.eval(t).into();
                assert!((q.magnitude() - 10.0).abs() < 1e-6);
            }
        }
        assert_eq!(controls(&segs[0])[0], p(10.0, 0.0));
        assert_eq!(*controls(&segs[segs.len() - 1]).last().unwrap(), p(0.0, 10.0));
    }

    #[test]
    fn arc_degenerate_cases() {
        let a = p(1.0, 1.0);
        assert!(arc_segments(a, p(5.0, 5.0), 0.0, false, false, a).is_empty());
        let line = arc_segments(a, Point::ZERO, 0.0, false, false, p(4.0, 1.0));
        assert_eq!(line.len(), 1);
        assert_eq!(controls(&line[0]), vec![a, p(4.0, 1.0)]);
        // radius too small: scaled up to a half circle through (0, -10)
        let half = arc_segments(p(-10.0, 0.0), p(1.0, 1.0), 0.0, false, true, p(10.0, 0.0));
        let top = half
            .iter()
            .flat_map(|s| (0..=8).map(move |i| Point::from(s.eval(i as f64 / 8.0))))
            .fold(f64::INFINITY, |m, q| m.min(q.y));
        assert!((top + 10.0).abs() < 1e-6);
    }

    #[test]
    fn quadratics_raise_to_cubics() {
        let quad = PathSeg::Quad(kurbo::QuadBez::new(p(0.0, 0.0), p(5.0, 10.0), p(10.0, 0.0)));
        let cubic = to_cubic(quad).unwrap();
        for t in [0.1, 0.5, 0.9] {
            assert!(quad.eval(t).distance(cubic.eval(t)) < 1e-12);
        }
        assert!(to_cubic(line_seg(p(0.0, 0.0), p(1.0, 0.0)).unwrap()).is_none());
        assert!(line_seg(p(1.0, 1.0), p(1.0, 1.0)).is_none());
    }

    #[test]
    fn subdivision_flattens() {
        let c = CubicBez::new(p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0));
        let (l, r) = c.subdivide();
        assert_eq!(l.p3, r.p0);
        assert!(flatness(&l) < flatness(&c));
        assert!(extent(&l) < extent(&c));
        assert_eq!(flatness(&CubicBez::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0))), 0.0);
    }

    #[test]
    fn ray_crossings_skip_touching_vertices() {
        // reflex vertex (5, 5) touches the ray at y = 5 from below
        let ring = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(5.0, 5.0), p(0.0, 10.0), p(0.0, 0.0)];
        let segs: Vec<PathSeg> = ring.windows(2).filter_map(|w| line_seg(w[0], w[1])).collect();
        assert_eq!(crossings_left_of(&segs, p(8.0, 5.0)) % 2, 1);
        assert_eq!(crossings_left_of(&segs, p(3.0, 5.0)) % 2, 1);
        assert_eq!(crossings_left_of(&segs, p(5.0, 8.0)) % 2, 0);
    }

    #[test]
    fn ray_crossings_on_curves() {
        // bump with its apex at y = 5, tangent to the ray through the apex
        let bump = PathSeg::Quad(kurbo::QuadBez::new(p(0.0, 0.0), p(5.0, 10.0), p(10.0, 0.0)));
        assert_eq!(crossings_left_of(&[bump], p(20.0, 5.0)) % 2, 0);
        assert_eq!(crossings_left_of(&[bump], p(20.0, 6.0)), 0);
        assert_eq!(crossings_left_of(&[bump], p(20.0, 2.5)), 2);
        assert_eq!(crossings_left_of(&[bump], p(5.0, 2.5)), 1);
    }
}
