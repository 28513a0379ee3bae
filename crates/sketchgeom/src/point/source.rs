//! Accepted point representations and their conversions.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Deserialize;

use super::Point;
use crate::error::{GeomError, Result};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?(?:\d+\.?\d*|\.\d+)").expect("number pattern compiles")
});

/// Every decimal number embedded in `text`, in order.
pub(crate) fn numeric_tokens(text: &str) -> impl Iterator<Item = f64> + '_ {
    NUMBER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
}

/// Anything that can be turned into a [`Point`].
///
/// Deserializes untagged, so JSON such as `3`, `"3, 4"`, `[3, 4]`, `{"x":3,"y":4}`,
/// `{"left":3,"top":4}` or `{"width":3,"height":4}` is accepted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PointSource {
    #[serde(skip_deserializing)]
    Point(Point),
    /// Broadcast to both axes.
    Scalar(f64),
    /// First two numbers in the text.
    Text(String),
    /// One element (broadcast) or two elements.
    Array(Vec<f64>),
    /// Single-element wrapper around another source.
    Nested(Vec<PointSource>),
    Xy { x: f64, y: f64 },
    LeftTop { left: f64, top: f64 },
    WidthHeight { width: f64, height: f64 },
}

impl PointSource {
    pub fn resolve(self) -> Result<Point> {
        match self {
            PointSource::Point(p) => Ok(p),
            PointSource::Scalar(v) => Ok(Point::from(v)),
            PointSource::Text(s) => Point::parse(&s),
            PointSource::Array(values) => from_array(&values),
            PointSource::Nested(inner) => from_nested(inner),
            PointSource::Xy { x, y } => Ok(Point::new(x, y)),
            PointSource::LeftTop { left, top } => Ok(Point::new(left, top)),
            PointSource::WidthHeight { width, height } => Ok(Point::new(width, height)),
        }
    }
}

fn from_array(values: &[f64]) -> Result<Point> {
    match *values {
        [v] => Ok(Point::new(v, v)),
        [x, y] => Ok(Point::new(x, y)),
        _ => Err(GeomError::InvalidPointSource(format!("{values:?}"))),
    }
}

fn from_nested(mut inner: Vec<PointSource>) -> Result<Point> {
    if inner.len() != 1 {
        return Err(GeomError::InvalidPointSource(format!(
            "nested list of {} sources",
            inner.len()
        )));
    }
    inner.remove(0).resolve()
}

impl From<Point> for PointSource {
    fn from(p: Point) -> Self {
        PointSource::Point(p)
    }
}

impl From<f64> for PointSource {
    fn from(v: f64) -> Self {
        PointSource::Scalar(v)
    }
}

impl From<&str> for PointSource {
    fn from(s: &str) -> Self {
        PointSource::Text(s.to_string())
    }
}

impl From<String> for PointSource {
    fn from(s: String) -> Self {
        PointSource::Text(s)
    }
}

impl From<Vec<f64>> for PointSource {
    fn from(v: Vec<f64>) -> Self {
        PointSource::Array(v)
    }
}

impl From<&[f64]> for PointSource {
    fn from(v: &[f64]) -> Self {
        PointSource::Array(v.to_vec())
    }
}

impl From<(f64, f64)> for PointSource {
    fn from((x, y): (f64, f64)) -> Self {
        PointSource::Xy { x, y }
    }
}

impl TryFrom<PointSource> for Point {
    type Error = GeomError;

    fn try_from(src: PointSource) -> Result<Point> {
        src.resolve()
    }
}
