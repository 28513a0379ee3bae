//! Seeded star-shaped polygons for the property tests, benches and demo.
//!
//! Vertex `i` sits inside the angular slot `[i, i + 1) * 2π/n` (never closer
//! than 30% of a slot to its edges) at a radius in `[60, 140)`. Neighbouring
//! vertices are therefore less than π apart and the ring winds once around the
//! origin, which stays strictly inside.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sketchgeom::prelude::*;

/// Closed ring of `vertices` corners (at least 3) drawn from `seed`.
pub fn star_polygon(seed: u64, vertices: usize) -> Polyline {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = vertices.max(3);
    let slot = TAU / n as f64;
    let corners: Vec<Point> = (0..n)
        .map(|i| {
            let angle = (i as f64 + rng.gen_range(0.3..0.7)) * slot;
            let radius = rng.gen_range(60.0..140.0);
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polyline::from(&corners, true).expect("at least three corners")
}
