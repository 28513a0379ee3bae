//! Multi-segment path: move / line / quadratic / cubic / arc / close commands.
//!
//! The first command is always `Move` or `Close`. Arc radii are a size, not a
//! location: they are excluded from [`Path::bounds`] and only scaled (never
//! translated) by [`Path::transform`].

mod builder;
mod parse;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cfg::KAPPA;
use crate::error::{GeomError, Result};
use crate::geometry::{crossings_left_of, lower_path, Geometry, Shape};
use crate::line::Line;
use crate::matrix::{Matrix, Transform};
use crate::num::{fmt_num, to_degrees};
use crate::point::{Point, PointFormat};
use crate::rect::Rect;

pub use builder::PathBuilder;

/// One absolute drawing command.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCommand {
    Move(Point),
    Line(Point),
    Quadratic {
        ctrl: Point,
        end: Point,
    },
    Cubic {
        c1: Point,
        c2: Point,
        end: Point,
    },
    /// SVG elliptical arc; `rotation` in degrees.
    Arc {
        radii: Point,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

impl PathCommand {
    /// SVG opcode.
    pub fn opcode(&self) -> char {
        match self {
            PathCommand::Move(_) => 'M',
            PathCommand::Line(_) => 'L',
            PathCommand::Quadratic { .. } => 'Q',
            PathCommand::Cubic { .. } => 'C',
            PathCommand::Arc { .. } => 'A',
            PathCommand::Close => 'Z',
        }
    }

    /// Location operands in order (controls included, arc radii excluded).
    pub fn points(&self) -> Vec<Point> {
        match *self {
            PathCommand::Move(p) | PathCommand::Line(p) => vec![p],
            PathCommand::Quadratic { ctrl, end } => vec![ctrl, end],
            PathCommand::Cubic { c1, c2, end } => vec![c1, c2, end],
            PathCommand::Arc { end, .. } => vec![end],
            PathCommand::Close => Vec::new(),
        }
    }

    /// End point, if the command has one.
    pub fn end(&self) -> Option<Point> {
        match *self {
            PathCommand::Move(p) | PathCommand::Line(p) => Some(p),
            PathCommand::Quadratic { end, .. }
            | PathCommand::Cubic { end, .. }
            | PathCommand::Arc { end, .. } => Some(end),
            PathCommand::Close => None,
        }
    }

    pub fn transform(&self, m: &Matrix) -> PathCommand {
        let map = |p: Point| m.apply_point(p);
        match *self {
            PathCommand::Move(p) => PathCommand::Move(map(p)),
            PathCommand::Line(p) => PathCommand::Line(map(p)),
            PathCommand::Quadratic { ctrl, end } => PathCommand::Quadratic {
                ctrl: map(ctrl),
                end: map(end),
            },
            PathCommand::Cubic { c1, c2, end } => PathCommand::Cubic {
                c1: map(c1),
                c2: map(c2),
                end: map(end),
            },
            PathCommand::Arc {
                radii,
                rotation,
                large_arc,
                sweep,
                end,
            } => {
                let d = m.decomposition();
                PathCommand::Arc {
                    radii: Point::new(radii.x * d.scale.x.abs(), radii.y * d.scale.y.abs()),
                    rotation: rotation + to_degrees(d.rotate),
                    large_arc,
                    // a mirror reverses the winding
                    sweep: sweep == m.is_orientation_preserving(),
                    end: map(end),
                }
            }
            PathCommand::Close => PathCommand::Close,
        }
    }

    fn write_svg(&self, out: &mut Vec<String>) {
        out.push(self.opcode().to_string());
        if let PathCommand::Arc {
            radii,
            rotation,
            large_arc,
            sweep,
            ..
        } = *self
        {
            out.push(radii.format(PointFormat::Svg));
            out.push(fmt_num(rotation));
            out.push(u8::from(large_arc).to_string());
            out.push(u8::from(sweep).to_string());
        }
        out.extend(self.points().iter().map(|p| p.format(PointFormat::Svg)));
    }
}

/// Immutable command sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<PathCommand>", try_from = "Vec<PathCommand>")]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Fails unless the first command is `Move` or `Close`.
    pub fn new(commands: Vec<PathCommand>) -> Result<Path> {
        match commands.first() {
            Some(PathCommand::Move(_) | PathCommand::Close) => Ok(Path { commands }),
            _ => Err(GeomError::InvalidPathStart),
        }
    }

    pub(crate) fn from_commands_unchecked(commands: Vec<PathCommand>) -> Path {
        debug_assert!(matches!(
            commands.first(),
            Some(PathCommand::Move(_) | PathCommand::Close)
        ));
        Path { commands }
    }

    /// Closed four-cubic approximation of an ellipse, starting at its left extreme.
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Path {
        let ox = rx * KAPPA;
        let oy = ry * KAPPA;
        let p = Point::new;
        Path::from_commands_unchecked(vec![
            PathCommand::Move(p(cx - rx, cy)),
            PathCommand::Cubic {
                c1: p(cx - rx, cy - oy),
                c2: p(cx - ox, cy - ry),
                end: p(cx, cy - ry),
            },
            PathCommand::Cubic {
                c1: p(cx + ox, cy - ry),
                c2: p(cx + rx, cy - oy),
                end: p(cx + rx, cy),
            },
            PathCommand::Cubic {
                c1: p(cx + rx, cy + oy),
                c2: p(cx + ox, cy + ry),
                end: p(cx, cy + ry),
            },
            PathCommand::Cubic {
                c1: p(cx - ox, cy + ry),
                c2: p(cx - rx, cy + oy),
                end: p(cx - rx, cy),
            },
            PathCommand::Close,
        ])
    }

    /// Closed polygon `M p0 L p1 ... Z`.
    pub fn from_points(points: &[Point]) -> Path {
        let mut commands: Vec<PathCommand> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathCommand::Move(*p)
                } else {
                    PathCommand::Line(*p)
                }
            })
            .collect();
        commands.push(PathCommand::Close);
        Path::from_commands_unchecked(commands)
    }

    /// Start a [`PathBuilder`] at `p`.
    pub fn move_to(p: Point) -> PathBuilder {
        PathBuilder::new(p)
    }

    /// Parse SVG path data (absolute and relative `M L H V Q T C S A Z`).
    pub fn parse(data: &str) -> Result<Path> {
        Path::new(parse::parse_path_data(data)?)
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    /// Box over every location operand, curve controls included.
    pub fn bounds(&self) -> Rect {
        let pts: Vec<Point> = self.commands.iter().flat_map(PathCommand::points).collect();
        Rect::from_points(&pts)
    }

    /// Ends with `Close`.
    pub fn closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// This path's commands followed by each of `others`.
    pub fn concat(&self, others: &[Path]) -> Path {
        let commands = std::iter::once(self)
            .chain(others)
            .flat_map(|p| p.commands.iter().copied())
            .collect();
        Path::from_commands_unchecked(commands)
    }

    /// Odd number of crossings on a leftward ray from `p` (even-odd fill).
    ///
    /// A vertex or tangent touching the ray does not flip the result.
    pub fn contains(&self, p: Point) -> bool {
        if !self.bounds().contains(p) {
            return false;
        }
        crossings_left_of(&lower_path(&self.commands), p) % 2 == 1
    }

    /// Hit of the ray from the bounds' center through `to` nearest to `to`.
    ///
    /// The ray runs ten bounding diagonals; `None` when it misses or `to` is the center.
    pub fn nearest_point(&self, to: Point) -> Option<Point> {
        let bounds = self.bounds();
        let center = bounds.center();
        let dir = Point::vector(center, to).normalize();
        let reach = bounds.size().magnitude() * 10.0;
        let hits = self.intersect_points(&Line::new(center, center + dir * reach));
        hits.into_points().map(|pts| to.nearest_of(&pts))
    }

    pub fn transform(&self, m: &Matrix) -> Path {
        Path::from_commands_unchecked(self.commands.iter().map(|c| c.transform(m)).collect())
    }

    /// SVG path data; `leave_open` drops a trailing `Z`.
    pub fn to_svg(&self, leave_open: bool) -> String {
        let cmds = match self.commands.split_last() {
            Some((PathCommand::Close, rest)) if leave_open => rest,
            _ => &self.commands[..],
        };
        let mut tokens = Vec::with_capacity(cmds.len() * 2);
        for c in cmds {
            c.write_svg(&mut tokens);
        }
        tokens.join(" ")
    }
}

impl Geometry for Path {
    fn to_shape(&self) -> Shape {
        Shape::Path(self.commands.clone())
    }
}

impl Transform for Path {
    type Output = Path;
    fn transform(&self, m: &Matrix) -> Path {
        Path::transform(self, m)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg(false))
    }
}

impl std::str::FromStr for Path {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Path> {
        Path::parse(s)
    }
}

impl TryFrom<Vec<PathCommand>> for Path {
    type Error = GeomError;
    fn try_from(commands: Vec<PathCommand>) -> Result<Path> {
        Path::new(commands)
    }
}

impl From<Path> for Vec<PathCommand> {
    fn from(path: Path) -> Self {
        path.commands
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
