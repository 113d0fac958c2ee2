//! Utilities to traverse the KDTree structure.

use crate::point::Point;
use crate::r#type::CoordNum;

/// The coordinate a node compares on to split its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Split on the x coordinate.
    Vertical,
    /// Split on the y coordinate.
    Horizontal,
}

impl Axis {
    /// The axis used by the children of a node splitting on `self`.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// The coordinate of `point` on this axis.
    #[inline]
    pub fn coord<N: CoordNum>(self, point: &Point<N>) -> N {
        match self {
            Axis::Vertical => point.x(),
            Axis::Horizontal => point.y(),
        }
    }

    /// Orthogonal projection of `point` onto the splitting line through `split`.
    ///
    /// Only the coordinate on this axis is replaced.
    #[inline]
    pub(crate) fn project<N: CoordNum>(self, point: &Point<N>, split: &Point<N>) -> Point<N> {
        match self {
            Axis::Vertical => Point::new(split.x(), point.y()),
            Axis::Horizontal => Point::new(point.x(), split.y()),
        }
    }
}

/// A node in the KDTree.
///
/// Each node owns its children. There are no parent links.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N: CoordNum> {
    pub(crate) point: Point<N>,
    pub(crate) axis: Axis,
    pub(crate) left: Option<Box<Node<N>>>,
    pub(crate) right: Option<Box<Node<N>>>,
}

impl<N: CoordNum> Node<N> {
    pub(crate) fn leaf(point: Point<N>, axis: Axis) -> Self {
        Self {
            point,
            axis,
            left: None,
            right: None,
        }
    }

    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> Point<N> {
        self.point
    }

    /// The axis this node splits its children over.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The child holding points whose coordinate on [`Node::axis`] is less than this node's.
    #[inline]
    pub fn left(&self) -> Option<&Node<N>> {
        self.left.as_deref()
    }

    /// The child holding points whose coordinate on [`Node::axis`] is greater than or equal to
    /// this node's.
    #[inline]
    pub fn right(&self) -> Option<&Node<N>> {
        self.right.as_deref()
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether `point` belongs in the right subtree of this node.
    ///
    /// Ties on the split coordinate go right.
    #[inline]
    pub(crate) fn goes_right(&self, point: &Point<N>) -> bool {
        self.axis.coord(point) >= self.axis.coord(&self.point)
    }

    /// The `(good, bad)` children for a query: the side the query would be inserted into, then
    /// the other side.
    #[inline]
    pub(crate) fn sides(&self, query: &Point<N>) -> (Option<&Node<N>>, Option<&Node<N>>) {
        if self.goes_right(query) {
            (self.right(), self.left())
        } else {
            (self.left(), self.right())
        }
    }

    /// A lower bound on the squared distance from `query` to any point on the far side of this
    /// node's splitting line.
    #[inline]
    pub(crate) fn split_sq_distance(&self, query: &Point<N>) -> N {
        self.axis.project(query, &self.point).sq_distance(query)
    }
}

/// A pre-order iterator over the points of a KDTree.
///
/// Created by [`KDTree::iter`][crate::kdtree::KDTree::iter].
#[derive(Debug, Clone)]
pub struct Points<'a, N: CoordNum> {
    stack: Vec<&'a Node<N>>,
}

impl<'a, N: CoordNum> Points<'a, N> {
    pub(crate) fn new(root: Option<&'a Node<N>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<N: CoordNum> Iterator for Points<'_, N> {
    type Item = Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Note: pushed in backwards order to what gets popped
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node.point)
    }
}
