use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sketchgeom::prelude::*;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod shapes;

#[derive(Parser)]
#[command(name = "sketchgeom")]
#[command(about = "Inspect and script the 2D geometry kernel", version = sketchgeom::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    Cubic,
    Quadratic,
}

impl From<Method> for RoundingMethod {
    fn from(m: Method) -> Self {
        match m {
            Method::Cubic => RoundingMethod::Cubic,
            Method::Quadratic => RoundingMethod::Quadratic,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Round the corners of a point chain; prints path data
    Round {
        /// JSON list of points (or @file)
        #[arg(long)]
        points: String,
        /// Uniform radius or JSON list of per-corner radii
        #[arg(long)]
        radius: String,
        #[arg(long, value_enum, default_value_t = Method::Cubic)]
        method: Method,
        /// Leave the chain open instead of closing it
        #[arg(long)]
        open: bool,
    },
    /// Path data of an axis-aligned ellipse
    Ellipse {
        #[arg(long, allow_hyphen_values = true)]
        cx: f64,
        #[arg(long, allow_hyphen_values = true)]
        cy: f64,
        #[arg(long)]
        rx: f64,
        #[arg(long)]
        ry: f64,
    },
    /// Path data of the oval inscribed in a rectangle
    Oval {
        /// "left, top, width, height"
        #[arg(long, allow_hyphen_values = true)]
        rect: String,
    },
    /// Point-in-polygon test
    Contains {
        #[arg(long)]
        points: String,
        #[arg(long, allow_hyphen_values = true)]
        at: String,
    },
    /// Intersection points of two shapes as JSON
    Intersect {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Apply an affine matrix to path data
    Transform {
        /// "a, b, c, d, e, f"
        #[arg(long, allow_hyphen_values = true)]
        matrix: String,
        #[arg(long, allow_hyphen_values = true)]
        path: Option<String>,
        /// Print the scale/rotation/translation decomposition instead
        #[arg(long)]
        decompose: bool,
    },
    /// Bounding box of path data as [l, t, w, h]
    Bounds {
        #[arg(long, allow_hyphen_values = true)]
        path: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = run(cmd.action)?;
    println!("{out}");
    Ok(())
}

fn run(action: Action) -> Result<String> {
    match action {
        Action::Round {
            points,
            radius,
            method,
            open,
        } => round(&points, &radius, method, open),
        Action::Ellipse { cx, cy, rx, ry } => Ok(Path::ellipse(cx, cy, rx, ry).to_string()),
        Action::Oval { rect } => {
            let r = Rect::parse(&rect).with_context(|| format!("parsing rect {rect:?}"))?;
            Ok(r.to_oval().to_string())
        }
        Action::Contains { points, at } => contains(&points, &at),
        Action::Intersect { a, b } => intersect_shapes(&a, &b),
        Action::Transform {
            matrix,
            path,
            decompose,
        } => transform(&matrix, path.as_deref(), decompose),
        Action::Bounds { path } => {
            let text = shapes::read_arg(&path)?;
            let p = Path::parse(&text).context("parsing path data")?;
            Ok(p.bounds().to_string())
        }
    }
}

fn round(points: &str, radius: &str, method: Method, open: bool) -> Result<String> {
    let pts = shapes::parse_points(points)?;
    let radii = shapes::parse_radii(radius)?;
    let poly = Polyline::new(pts).context("rounding needs at least one point")?;
    tracing::info!(vertices = poly.points().len(), ?method, open, "round");
    Ok(poly.to_rounded_path(method.into(), radii, !open).to_string())
}

fn contains(points: &str, at: &str) -> Result<String> {
    let pts = shapes::parse_points(points)?;
    let poly = Polyline::from(&pts, true).context("containment needs a polygon")?;
    let text = shapes::read_arg(at)?;
    let p = Point::parse(&text).with_context(|| format!("parsing point {text:?}"))?;
    Ok(poly.contains(p).to_string())
}

fn intersect_shapes(a: &str, b: &str) -> Result<String> {
    let a = shapes::parse_shape(a).context("shape a")?;
    let b = shapes::parse_shape(b).context("shape b")?;
    let hits = intersect(a.as_ref(), b.as_ref());
    tracing::info!(count = hits.len(), "intersect");
    Ok(serde_json::to_string(&hits.into_points())?)
}

fn parse_matrix(text: &str) -> Result<Matrix> {
    let v: Vec<f64> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().with_context(|| format!("matrix entry {s:?}")))
        .collect::<Result<_>>()?;
    match v.as_slice() {
        &[a, b, c, d, e, f] => Ok(Matrix::new(a, b, c, d, e, f)),
        _ => anyhow::bail!("matrix needs 6 numbers, got {}", v.len()),
    }
}

fn transform(matrix: &str, path: Option<&str>, decompose: bool) -> Result<String> {
    let m = parse_matrix(matrix)?;
    if decompose {
        return Ok(serde_json::to_string(&m.decomposition())?);
    }
    let path = path.context("--path is required unless --decompose is given")?;
    let text = shapes::read_arg(path)?;
    let p = Path::parse(&text).context("parsing path data")?;
    Ok(m.apply(&p).to_string())
}
