//! Error type shared by every constructor and parser in the crate.
//!
//! All failures are raised at the point of invalid input; nothing in the crate
//! catches its own errors.

use thiserror::Error;

/// Kernel errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Input could not be coerced into a point.
    #[error("{0} is not a valid point source")]
    InvalidPointSource(String),

    /// Text did not contain four parsable rect components.
    #[error("{0} is not a valid rect")]
    InvalidRect(String),

    /// A line needs at least two points.
    #[error("line source needs 2 points, got {0}")]
    InvalidLineSource(usize),

    /// A polyline needs at least one point.
    #[error("polyline must have at least one point")]
    EmptyPolyline,

    /// The first path command must be a move or a close.
    #[error("first path command must be M or Z")]
    InvalidPathStart,

    /// Malformed SVG path data; `pos` is the index of the failing segment.
    #[error("invalid path data in segment {pos}: {reason}")]
    InvalidPathData { pos: usize, reason: String },

    /// Determinant within tolerance of zero.
    #[error("matrix not invertible (determinant {det:e})")]
    NotInvertible { det: f64 },

    /// A flat coordinate buffer was too short to read a point at `index`.
    #[error("buffer of length {len} too short to read a point at {index}")]
    BufferTooShort { len: usize, index: usize },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, GeomError>;
