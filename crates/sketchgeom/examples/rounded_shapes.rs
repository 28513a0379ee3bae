//! Print SVG path data for a few shapes, for pasting into a viewer.
//!
//! Usage:
//!   cargo run -p sketchgeom --example rounded_shapes -- polygons
//!   cargo run -p sketchgeom --example rounded_shapes -- hits
//!
//! - polygons mode: random star polygons with rounded corners, one `<path>` per line
//! - hits mode: a rounded polygon, an ellipse and their intersection points

use sketchgeom::prelude::*;

#[path = "../tests/support/mod.rs"]
mod support;

use support::star_polygon;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "polygons".to_string());
    match mode.as_str() {
        "polygons" => show_polygons(),
        "hits" => show_hits(),
        _ => {
            eprintln!("usage: rounded_shapes [polygons|hits]");
        }
    }
}

fn show_polygons() {
    for index in 0..4u64 {
        let poly = star_polygon(2025 + index, 5 + index as usize);
        let placed = poly.transform(&Matrix::from_translation(130.0 + 260.0 * index as f64, 130.0));
        let method = if index % 2 == 0 {
            RoundingMethod::Cubic
        } else {
            RoundingMethod::Quadratic
        };
        let path = placed.to_rounded_path(method, 20.0, true);
        println!(
            "<path d=\"{path}\"/> <!-- n={} bounds={} -->",
            poly.points().len() - 1,
            path.bounds()
        );
    }
}

fn show_hits() {
    let poly = star_polygon(7, 12)
        .to_rounded_path(RoundingMethod::Cubic, 15.0, true);
    let ellipse = Path::ellipse(60.0, 0.0, 90.0, 40.0);
    println!("<path d=\"{poly}\"/>");
    println!("<path d=\"{ellipse}\"/>");
    match intersect(&poly, &ellipse) {
        Intersection::None => println!("<!-- no intersections -->"),
        Intersection::Points(pts) => {
            for p in pts {
                println!("<circle cx=\"{}\" cy=\"{}\" r=\"2\"/>", p.x, p.y);
            }
        }
    }
}
