use crate::error::Result;
use crate::kdtree::KDTree;
use crate::point::Point;
use crate::r#type::CoordNum;

/// A builder to create a [`KDTree`].
///
/// Points are collected as they are added and inserted in that order by
/// [`finish`][KDTreeBuilder::finish].
#[derive(Debug, Clone, Default)]
pub struct KDTreeBuilder<N: CoordNum> {
    points: Vec<Point<N>>,
}

impl<N: CoordNum> KDTreeBuilder<N> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { points: vec![] }
    }

    /// Create a new builder with space reserved for `num_items` points.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
        }
    }

    /// Add a point to the index.
    ///
    /// Returns the position of this point in insertion order. Duplicates still get a position but
    /// are only stored once.
    pub fn add(&mut self, x: N, y: N) -> usize {
        self.add_point(Point::new(x, y))
    }

    /// Add a point to the index. See [`add`][KDTreeBuilder::add].
    pub fn add_point(&mut self, point: impl Into<Point<N>>) -> usize {
        let index = self.points.len();
        self.points.push(point.into());
        index
    }

    /// Consume this builder, inserting every added point into a new KDTree.
    ///
    /// Fails if no points were added or if any point is not finite.
    pub fn finish(self) -> Result<KDTree<N>> {
        KDTree::build(self.points)
    }
}
