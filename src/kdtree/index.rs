use crate::error::{PointSetError, Result};
use crate::kdtree::{Axis, Node, Points};
use crate::point::Point;
use crate::r#type::CoordNum;

/// An unbalanced 2D k-d tree over owned nodes.
///
/// The root splits on x ([`Axis::Vertical`]) and the axis alternates with depth. The tree is never
/// rebalanced, so its shape depends only on insertion order. Points that are already present are
/// not inserted again.
///
/// Usually this will be created via [`KDTree::build`] or a
/// [`KDTreeBuilder`][crate::kdtree::KDTreeBuilder], and queried through
/// [`PointSet`][crate::PointSet].
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: CoordNum> {
    pub(crate) root: Option<Box<Node<N>>>,
    pub(crate) num_items: usize,
}

impl<N: CoordNum> KDTree<N> {
    /// Build a tree by inserting `points` one by one, in order.
    ///
    /// Returns [`PointSetError::InvalidArgument`] if `points` is empty or holds a coordinate that
    /// is not finite or lies beyond [`CoordNum::max_coord`].
    pub fn build(points: impl IntoIterator<Item = Point<N>>) -> Result<Self> {
        let mut tree = Self {
            root: None,
            num_items: 0,
        };
        for point in points {
            tree.insert(point)?;
        }

        if tree.root.is_none() {
            return Err(PointSetError::InvalidArgument(
                "cannot build a KDTree from an empty point collection".to_string(),
            ));
        }
        Ok(tree)
    }

    /// Insert a single point, returning `false` if an equal point was already stored.
    ///
    /// Descends from the root on the alternating axes: a coordinate greater than or equal to the
    /// node's goes right, anything smaller goes left. The new point becomes a leaf.
    pub fn insert(&mut self, point: impl Into<Point<N>>) -> Result<bool> {
        let point = point.into();
        point.check_coords()?;

        let mut slot = &mut self.root;
        let mut axis = Axis::Vertical;
        while let Some(node) = slot {
            if node.point == point {
                return Ok(false);
            }
            axis = node.axis.flip();
            slot = if node.goes_right(&point) {
                &mut node.right
            } else {
                &mut node.left
            };
        }

        *slot = Some(Box::new(Node::leaf(point, axis)));
        self.num_items += 1;
        Ok(true)
    }

    /// The root node, for manual traversal.
    ///
    /// A tree created through [`KDTree::build`] always has a root.
    pub fn root(&self) -> Option<&Node<N>> {
        self.root.as_deref()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<N>, usize)> = vec![];
        if let Some(root) = self.root() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Iterate over the stored points in pre-order.
    pub fn iter(&self) -> Points<'_, N> {
        Points::new(self.root())
    }
}

impl<'a, N: CoordNum> IntoIterator for &'a KDTree<N> {
    type Item = Point<N>;
    type IntoIter = Points<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
