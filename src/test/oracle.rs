//! Compare the pruned KDTree search against an exhaustive scan.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::kdtree::KDTree;
use crate::naive::NaivePointSet;
use crate::test::{clustered_points, grid_points, seeded_rng, uniform_points};
use crate::{Point, PointSet};

/// Assert that the tree finds a point exactly as close as the closest one in `points`.
///
/// Distances are compared rather than points, since equidistant points may be resolved
/// differently by the two implementations.
fn check_against_scan(points: &[Point<f64>], queries: &[Point<f64>]) {
    let tree = KDTree::build(points.iter().copied()).unwrap();
    let naive = NaivePointSet::new(points.iter().copied());

    for query in queries {
        let found = tree.nearest(query.x(), query.y()).unwrap();
        let expected = naive.nearest(query.x(), query.y()).unwrap();
        assert!(points.contains(&found), "{found:?} is not a stored point");
        assert_eq!(
            found.sq_distance(query),
            expected.sq_distance(query),
            "query {query:?}: tree found {found:?}, scan found {expected:?}"
        );
    }
}

fn random_queries(rng: &mut StdRng, n: usize, extent: f64) -> Vec<Point<f64>> {
    uniform_points(rng, n, extent)
}

#[test]
fn matches_scan_on_uniform_points() {
    let mut rng = seeded_rng(42);
    for trial in 0..50 {
        let n = rng.gen_range(1..300);
        let points = uniform_points(&mut rng, n, 100.);
        let queries = random_queries(&mut rng, 100, 150.);
        check_against_scan(&points, &queries);
        if trial % 10 == 0 {
            // queries far outside the data
            let queries = random_queries(&mut rng, 20, 10_000.);
            check_against_scan(&points, &queries);
        }
    }
}

#[test]
fn matches_scan_on_clustered_points() {
    let mut rng = seeded_rng(7);
    for _ in 0..20 {
        let points = clustered_points(&mut rng, 500);
        let mut queries = random_queries(&mut rng, 100, 1000.);
        // and some right next to the clusters
        queries.extend(clustered_points(&mut rng, 100));
        check_against_scan(&points, &queries);
    }
}

#[test]
fn matches_scan_with_ties() {
    let mut rng = seeded_rng(1234);
    for _ in 0..30 {
        let points = grid_points(&mut rng, 200, 20);
        // half-integer queries sit exactly between grid points
        let queries: Vec<Point<f64>> = (0..100)
            .map(|_| {
                Point::new(
                    rng.gen_range(-2..42) as f64 / 2.,
                    rng.gen_range(-2..42) as f64 / 2.,
                )
            })
            .collect();
        check_against_scan(&points, &queries);
    }
}

#[test]
fn matches_scan_on_collinear_points() {
    let mut rng = seeded_rng(99);
    let vertical: Vec<Point<f64>> = (0..200)
        .map(|_| Point::new(3., rng.gen_range(-50.0..50.0)))
        .collect();
    let horizontal: Vec<Point<f64>> = (0..200)
        .map(|_| Point::new(rng.gen_range(-50.0..50.0), -7.))
        .collect();
    let queries = random_queries(&mut rng, 200, 60.);
    check_against_scan(&vertical, &queries);
    check_against_scan(&horizontal, &queries);
}

#[test]
fn insertion_order_does_not_change_distance() {
    let mut rng = seeded_rng(5);
    let points = uniform_points(&mut rng, 150, 100.);
    let queries = random_queries(&mut rng, 100, 120.);
    let reference = KDTree::build(points.iter().copied()).unwrap();

    for _ in 0..20 {
        let mut shuffled = points.clone();
        shuffled.shuffle(&mut rng);
        let tree = KDTree::build(shuffled).unwrap();
        for query in &queries {
            let expected = reference.nearest(query.x(), query.y()).unwrap();
            let found = tree.nearest(query.x(), query.y()).unwrap();
            assert_eq!(found.sq_distance(query), expected.sq_distance(query));
        }
    }
}

#[test]
fn sorted_input_builds_a_deep_tree() {
    // sorted input degenerates into a path; neither insertion nor search may recurse on it
    let points: Vec<Point<f64>> = (0..5_000).map(|i| Point::new(i as f64, i as f64)).collect();
    let tree = KDTree::build(points.iter().copied()).unwrap();
    assert_eq!(tree.height(), points.len());
    assert_eq!(
        tree.nearest(2_500.4, 2_499.9).unwrap(),
        Point::new(2_500., 2_500.)
    );
    assert_eq!(tree.nearest(-5., -5.).unwrap(), Point::new(0., 0.));
    assert_eq!(tree.nearest(1e9, 1e9).unwrap(), Point::new(4_999., 4_999.));
}
