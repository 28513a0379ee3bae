use super::{Path, PathCommand};
use crate::point::Point;

/// Streaming path construction, always starting with a move.
///
/// ```
/// use sketchgeom::{Path, Point};
///
/// let tri = Path::move_to(Point::new(0.0, 0.0))
///     .line_to(Point::new(10.0, 0.0))
///     .line_to(Point::new(5.0, 8.0))
///     .build(true);
/// assert!(tri.closed());
/// ```
#[derive(Clone, Debug)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub(super) fn new(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::Move(start)],
        }
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::Move(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::Line(p));
        self
    }

    pub fn quad_to(mut self, ctrl: Point, end: Point) -> Self {
        self.commands.push(PathCommand::Quadratic { ctrl, end });
        self
    }

    pub fn cube_to(mut self, c1: Point, c2: Point, end: Point) -> Self {
        self.commands.push(PathCommand::Cubic { c1, c2, end });
        self
    }

    /// SVG arc to `end`, `rotation` in degrees.
    pub fn arc_to(mut self, radii: Point, rotation: f64, large_arc: bool, sweep: bool, end: Point) -> Self {
        self.commands.push(PathCommand::Arc {
            radii,
            rotation,
            large_arc,
            sweep,
            end,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn build(mut self, close: bool) -> Path {
        if close {
            self.commands.push(PathCommand::Close);
        }
        Path::from_commands_unchecked(self.commands)
    }
}
