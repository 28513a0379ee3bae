//! Built-in intersection engine.
//!
//! Shapes are lowered to `kurbo` line / quadratic / cubic segments and
//! intersected pairwise:
//! - line x line: closed-interval parametric test, parallel lines never hit;
//! - line x curve: `PathSeg::intersect_line`;
//! - curve x curve: subdivision with box pruning down to flat chords.
//!
//! Coincident or overlapping pieces report no points.

use kurbo::{CubicBez, Line as Chord, ParamCurve, ParamCurveExtrema, PathSeg};

use crate::cfg::EngineCfg;
use crate::path::PathCommand;
use crate::point::Point;

use super::curves::{arc_segments, boxes_overlap, controls, extent, flatness, line_seg, to_cubic};
use super::Shape;

/// Subdivision hits closer than this (or ten flatness tolerances) are one point.
const MERGE_DIST: f64 = 1e-6;
/// Upper bound on chord tests per curve pair (overlapping curves never prune).
const PAIR_BUDGET: usize = 1 << 16;

/// Computes raw intersection points of two shapes.
///
/// An empty vector means "no intersection"; callers dedup.
pub trait IntersectionEngine {
    fn intersect(&self, a: &Shape, b: &Shape) -> Vec<Point>;
}

/// Segment-lowering engine used by [`Geometry`](super::Geometry).
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEngine {
    pub cfg: EngineCfg,
}

impl DefaultEngine {
    pub fn new(cfg: EngineCfg) -> Self {
        Self { cfg }
    }

    fn intersect_segments(&self, a: &PathSeg, b: &PathSeg, out: &mut Vec<Point>) {
        match (a, b) {
            (PathSeg::Line(la), PathSeg::Line(lb)) => {
                out.extend(segment_intersection(
                    la.p0.into(),
                    la.p1.into(),
                    lb.p0.into(),
                    lb.p1.into(),
                ));
            }
            (PathSeg::Line(line), curve) | (curve, PathSeg::Line(line)) => {
                line_curve(*line, curve, out);
            }
            (ca, cb) => {
                let (Some(ca), Some(cb)) = (to_cubic(*ca), to_cubic(*cb)) else {
                    return;
                };
                let mut hits = Vec::new();
                let mut budget = PAIR_BUDGET;
                self.curve_curve(ca, cb, 0, &mut budget, &mut hits);
                out.extend(hits);
            }
        }
    }

    fn curve_curve(&self, a: CubicBez, b: CubicBez, depth: u32, budget: &mut usize, out: &mut Vec<Point>) {
        if *budget == 0 || !boxes_overlap(a.bounding_box(), b.bounding_box(), self.cfg.flatness) {
            return;
        }
        let a_flat = flatness(&a) <= self.cfg.flatness;
        let b_flat = flatness(&b) <= self.cfg.flatness;
        if (a_flat && b_flat) || depth >= self.cfg.max_depth {
            *budget -= 1;
            if let Some(p) = segment_intersection(a.p0.into(), a.p3.into(), b.p0.into(), b.p3.into()) {
                let merge = (self.cfg.flatness * 10.0).max(MERGE_DIST);
                if out.iter().all(|q| q.distance_to(p) > merge) {
                    out.push(p);
                }
            }
            return;
        }
        if !a_flat && (b_flat || extent(&a) >= extent(&b)) {
            let (l, r) = a.subdivide();
            self.curve_curve(l, b, depth + 1, budget, out);
            self.curve_curve(r, b, depth + 1, budget, out);
        } else {
            let (l, r) = b.subdivide();
            self.curve_curve(a, l, depth + 1, budget, out);
            self.curve_curve(a, r, depth + 1, budget, out);
        }
    }
}

impl IntersectionEngine for DefaultEngine {
    fn intersect(&self, a: &Shape, b: &Shape) -> Vec<Point> {
        let sa = lower(a);
        let sb = lower(b);
        let mut out = Vec::new();
        for x in &sa {
            for y in &sb {
                self.intersect_segments(x, y, &mut out);
            }
        }
        tracing::trace!(segments_a = sa.len(), segments_b = sb.len(), hits = out.len(), "intersect");
        out
    }
}

/// Intersection of segments `a1a2` and `b1b2`, endpoints included.
///
/// Parallel and coincident segments have none.
pub(crate) fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let ua_t = (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x);
    let ub_t = (a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x);
    let u_b = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if u_b == 0.0 {
        return None;
    }
    let ua = ua_t / u_b;
    let ub = ub_t / u_b;
    ((0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)).then(|| a1.lerp(a2, ua))
}

fn line_curve(line: Chord, curve: &PathSeg, out: &mut Vec<Point>) {
    let dir = line.p1 - line.p0;
    let len = dir.hypot();
    if len == 0.0 {
        return;
    }
    let ctrl = controls(curve);
    let scale = ctrl.iter().fold(1.0f64, |m, c| m.max(c.x.abs()).max(c.y.abs()));
    let on_line = ctrl.iter().all(|c| {
        let off = (kurbo::Point::from(*c) - line.p0).cross(dir);
        off.abs() <= 1e-12 * len * scale
    });
    if on_line {
        return;
    }
    out.extend(
        curve
            .intersect_line(line)
            .iter()
            .map(|hit| Point::from(curve.eval(hit.segment_t))),
    );
}

/// Lower a shape into primitive segments, zero-length lines dropped.
fn lower(shape: &Shape) -> Vec<PathSeg> {
    match shape {
        Shape::Line(a, b) => line_seg(*a, *b).into_iter().collect(),
        Shape::Rect(r) => {
            let c = r.points();
            (0..4).filter_map(|i| line_seg(c[i], c[(i + 1) % 4])).collect()
        }
        Shape::Polyline(points) => points.windows(2).filter_map(|w| line_seg(w[0], w[1])).collect(),
        Shape::Path(commands) => lower_path(commands),
    }
}

/// Segments drawn by path commands; `Close` adds the edge back to the subpath start.
pub(crate) fn lower_path(commands: &[PathCommand]) -> Vec<PathSeg> {
    let mut out = Vec::new();
    let mut start = Point::ZERO;
    let mut cur = Point::ZERO;
    for cmd in commands {
        match *cmd {
            PathCommand::Move(p) => start = p,
            PathCommand::Line(p) => out.extend(line_seg(cur, p)),
            PathCommand::Quadratic { ctrl, end } => {
                out.push(PathSeg::Quad(kurbo::QuadBez::new(cur, ctrl, end)));
            }
            PathCommand::Cubic { c1, c2, end } => {
                out.push(PathSeg::Cubic(CubicBez::new(cur, c1, c2, end)));
            }
            PathCommand::Arc {
                radii,
                rotation,
                large_arc,
                sweep,
                end,
            } => out.extend(arc_segments(cur, radii, rotation, large_arc, sweep, end)),
            PathCommand::Close => out.extend(line_seg(cur, start)),
        }
        cur = cmd.end().unwrap_or(start);
    }
    out
}
