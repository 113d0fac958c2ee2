//! Shared fixtures for randomized tests.

mod oracle;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Point;

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Points spread uniformly over a square centered on the origin.
pub(crate) fn uniform_points(rng: &mut StdRng, n: usize, extent: f64) -> Vec<Point<f64>> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

/// Points in a few tight clusters, resembling vertices around road intersections.
pub(crate) fn clustered_points(rng: &mut StdRng, n: usize) -> Vec<Point<f64>> {
    let centers = uniform_points(rng, 5, 1000.);
    (0..n)
        .map(|i| {
            let center = centers[i % centers.len()];
            Point::new(
                center.x() + rng.gen_range(-1.0..1.0),
                center.y() + rng.gen_range(-1.0..1.0),
            )
        })
        .collect()
}

/// Points on an integer grid, so that many queries are exactly equidistant to several points.
pub(crate) fn grid_points(rng: &mut StdRng, n: usize, size: i32) -> Vec<Point<f64>> {
    (0..n)
        .map(|_| {
            Point::new(
                f64::from(rng.gen_range(0..size)),
                f64::from(rng.gen_range(0..size)),
            )
        })
        .collect()
}
