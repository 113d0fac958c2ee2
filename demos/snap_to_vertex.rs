//! Snap a few locations onto the nearest vertex of a small road graph.

use geo_pointset::kdtree::KDTreeBuilder;
use geo_pointset::{Point, PointSet};

fn main() {
    // Intersections in (longitude, latitude)
    let vertices = [
        (-122.2585, 37.8719),
        (-122.2595, 37.8700),
        (-122.2680, 37.8715),
        (-122.2730, 37.8698),
        (-122.2698, 37.8656),
        (-122.2585, 37.8719), // repeated vertex from a second edge list
    ];

    let mut builder = KDTreeBuilder::with_capacity(vertices.len());
    for (lon, lat) in vertices {
        builder.add(lon, lat);
    }
    let tree = builder.finish().expect("vertex list is not empty");
    println!(
        "Indexed {} distinct vertices, tree height {}",
        tree.num_items(),
        tree.height()
    );

    let clicks = [
        Point::new(-122.2590, 37.8712),
        Point::new(-122.2710, 37.8700),
        Point::new(-122.2600, 37.8600),
    ];
    for click in clicks {
        let (vertex, distance) = tree
            .nearest_with_distance(click.x(), click.y())
            .expect("tree is not empty and click is finite");
        println!("  {:?} -> {:?} ({:.5} degrees away)", click, vertex, distance);
    }
}
