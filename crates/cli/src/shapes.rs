use anyhow::{Context, Result};
use serde::Deserialize;
use sketchgeom::prelude::*;
use std::fs;

/// Shape description accepted by `intersect`, tagged with `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Line {
        p1: PointSource,
        p2: PointSource,
    },
    Rect {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    Polyline {
        points: Vec<PointSource>,
        #[serde(default)]
        close: bool,
    },
    Path {
        d: String,
    },
}

impl ShapeSpec {
    pub fn build(self) -> Result<Box<dyn Geometry>> {
        Ok(match self {
            ShapeSpec::Line { p1, p2 } => Box::new(Line::new(
                Point::from_source(p1).context("line p1")?,
                Point::from_source(p2).context("line p2")?,
            )),
            ShapeSpec::Rect {
                left,
                top,
                width,
                height,
            } => Box::new(Rect::new(left, top, width, height)),
            ShapeSpec::Polyline { points, close } => {
                Box::new(Polyline::from_sources(points, close).context("polyline points")?)
            }
            ShapeSpec::Path { d } => Box::new(Path::parse(&d).context("path data")?),
        })
    }
}

/// Inline text, or the contents of a file when prefixed with `@`.
pub fn read_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(file) => fs::read_to_string(file).with_context(|| format!("reading {file}")),
        None => Ok(arg.to_string()),
    }
}

pub fn parse_shape(arg: &str) -> Result<Box<dyn Geometry>> {
    let text = read_arg(arg)?;
    let shape: ShapeSpec =
        serde_json::from_str(&text).with_context(|| format!("parsing shape json {text:?}"))?;
    shape.build()
}

pub fn parse_points(arg: &str) -> Result<Vec<Point>> {
    let text = read_arg(arg)?;
    let sources: Vec<PointSource> =
        serde_json::from_str(&text).with_context(|| format!("parsing point list {text:?}"))?;
    sources
        .into_iter()
        .enumerate()
        .map(|(i, s)| Point::from_source(s).with_context(|| format!("point #{i}")))
        .collect()
}

/// A single number, or a JSON list of per-corner radii.
pub fn parse_radii(arg: &str) -> Result<CornerRadii> {
    let text = read_arg(arg)?;
    if let Ok(r) = text.trim().parse::<f64>() {
        return Ok(CornerRadii::Uniform(r));
    }
    let list: Vec<f64> =
        serde_json::from_str(&text).with_context(|| format!("parsing radius {text:?}"))?;
    Ok(CornerRadii::PerCorner(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn shape_kinds_build() {
        let line = parse_shape(r#"{"kind":"line","p1":[0,0],"p2":{"x":10,"y":10}}"#).unwrap();
        let rect =
            parse_shape(r#"{"kind":"rect","left":0,"top":0,"width":10,"height":10}"#).unwrap();
        let poly = parse_shape(r#"{"kind":"polyline","points":["0 5","10,5"]}"#).unwrap();
        let path = parse_shape(r#"{"kind":"path","d":"M 5 -5 L 5 15"}"#).unwrap();
        assert!(line.intersects(rect.as_ref()));
        assert_eq!(poly.intersect_points(path.as_ref()).len(), 1);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(parse_shape(r#"{"kind":"blob"}"#).is_err());
        assert!(parse_shape(r#"{"kind":"path","d":"L 1 1"}"#).is_err());
    }

    #[test]
    fn file_arguments_are_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("pts.json");
        fs::write(&file, "[[0,0],[10,0],[10,10]]").unwrap();
        let pts = parse_points(&format!("@{}", file.display())).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], Point::new(10.0, 10.0));
        assert!(read_arg("@/definitely/missing.json").is_err());
    }

    #[test]
    fn radii_forms() {
        assert_eq!(parse_radii("2.5").unwrap(), CornerRadii::Uniform(2.5));
        assert_eq!(
            parse_radii("[1, 2]").unwrap(),
            CornerRadii::PerCorner(vec![1.0, 2.0])
        );
        assert!(parse_radii("wide").is_err());
    }
}
