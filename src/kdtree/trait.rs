use tinyvec::TinyVec;

use crate::error::{PointSetError, Result};
use crate::kdtree::{KDTree, Node};
use crate::point::Point;
use crate::r#type::CoordNum;
use crate::PointSet;

/// A pending visit on the search stack.
#[derive(Debug, Clone, Copy, Default)]
struct Frame<'a, N: CoordNum> {
    node: Option<&'a Node<N>>,
    /// Squared distance to the splitting line that separates this subtree from the query. The
    /// subtree is skipped if the best match found by the time it is popped is at least this close.
    bound: Option<N>,
}

impl<N: CoordNum> KDTree<N> {
    /// Branch-and-bound search for the node closest to `query`.
    ///
    /// Visits the side of each split that holds the query first, then the other side only if the
    /// splitting line is strictly closer than the best match so far. A node replaces the best
    /// match only when it is strictly closer, so among equidistant points the first one reached in
    /// this order wins, starting from the root.
    fn nearest_node(&self, query: &Point<N>) -> Result<&Node<N>> {
        let root = self.root().ok_or(PointSetError::EmptyStructure)?;

        let mut best = root;
        let mut best_dist = root.point.sq_distance(query);

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[Frame<'_, N>; 32]> = TinyVec::new();
        stack.push(Frame {
            node: Some(root),
            bound: None,
        });

        while let Some(frame) = stack.pop() {
            let Some(node) = frame.node else {
                continue;
            };
            if frame.bound.is_some_and(|bound| bound >= best_dist) {
                continue;
            }

            let dist = node.point.sq_distance(query);
            if dist < best_dist {
                best = node;
                best_dist = dist;
            }

            // Note: the far side is pushed first so that the whole near subtree is searched, and
            // best_dist tightened, before its bound is checked
            let (good, bad) = node.sides(query);
            if bad.is_some() {
                stack.push(Frame {
                    node: bad,
                    bound: Some(node.split_sq_distance(query)),
                });
            }
            if good.is_some() {
                stack.push(Frame {
                    node: good,
                    bound: None,
                });
            }
        }

        Ok(best)
    }
}

impl<N: CoordNum> PointSet<N> for KDTree<N> {
    fn num_items(&self) -> usize {
        self.num_items
    }

    /// Ties are broken in favor of the first equidistant point reached when searching from the
    /// root, near side of each split first.
    fn nearest(&self, x: N, y: N) -> Result<Point<N>> {
        let query = Point::new(x, y);
        query.check_coords()?;
        Ok(self.nearest_node(&query)?.point)
    }
}
