//! SVG path-data reader on top of `svgtypes`.
//!
//! `svgtypes` tokenizes (implicit repeats, packed numbers and flags); this
//! module resolves relative operands, turns `H`/`V` into lines and gives `T`/`S`
//! their reflected control point, so only the six absolute [`PathCommand`]s remain.

use svgtypes::{PathParser, PathSegment};

use super::PathCommand;
use crate::error::{GeomError, Result};
use crate::point::Point;

/// Current point, subpath start and the last control point a `T` / `S` may reflect.
#[derive(Default)]
struct Pen {
    cur: Point,
    start: Point,
    last_quad: Option<Point>,
    last_cubic: Option<Point>,
}

impl Pen {
    fn at(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs {
            Point::new(x, y)
        } else {
            Point::new(self.cur.x + x, self.cur.y + y)
        }
    }

    fn reflect(&self, ctrl: Option<Point>) -> Point {
        ctrl.map_or(self.cur, |c| self.cur * 2.0 - c)
    }

    fn absolute(&mut self, seg: PathSegment) -> PathCommand {
        let mut quad = None;
        let mut cubic = None;
        let cmd = match seg {
            PathSegment::MoveTo { abs, x, y } => {
                let p = self.at(abs, x, y);
                self.start = p;
                PathCommand::Move(p)
            }
            PathSegment::LineTo { abs, x, y } => PathCommand::Line(self.at(abs, x, y)),
            PathSegment::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { self.cur.x + x };
                PathCommand::Line(Point::new(x, self.cur.y))
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { self.cur.y + y };
                PathCommand::Line(Point::new(self.cur.x, y))
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let ctrl = self.at(abs, x1, y1);
                quad = Some(ctrl);
                PathCommand::Quadratic {
                    ctrl,
                    end: self.at(abs, x, y),
                }
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let ctrl = self.reflect(self.last_quad);
                quad = Some(ctrl);
                PathCommand::Quadratic {
                    ctrl,
                    end: self.at(abs, x, y),
                }
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c2 = self.at(abs, x2, y2);
                cubic = Some(c2);
                PathCommand::Cubic {
                    c1: self.at(abs, x1, y1),
                    c2,
                    end: self.at(abs, x, y),
                }
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let c2 = self.at(abs, x2, y2);
                cubic = Some(c2);
                PathCommand::Cubic {
                    c1: self.reflect(self.last_cubic),
                    c2,
                    end: self.at(abs, x, y),
                }
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => PathCommand::Arc {
                radii: Point::new(rx, ry),
                rotation: x_axis_rotation,
                large_arc,
                sweep,
                end: self.at(abs, x, y),
            },
            PathSegment::ClosePath { .. } => PathCommand::Close,
        };
        self.last_quad = quad;
        self.last_cubic = cubic;
        self.cur = cmd.end().unwrap_or(self.start);
        cmd
    }
}

/// Parse `data` into absolute commands (the start rule is checked by the caller).
///
/// A syntax error reports the index of the offending segment as `pos`.
pub(super) fn parse_path_data(data: &str) -> Result<Vec<PathCommand>> {
    let mut pen = Pen::default();
    let mut out = Vec::new();
    for seg in PathParser::from(data) {
        let seg = seg.map_err(|err| GeomError::InvalidPathData {
            pos: out.len(),
            reason: err.to_string(),
        })?;
        out.push(pen.absolute(seg));
    }
    tracing::debug!(commands = out.len(), "parsed path data");
    Ok(out)
}
