//! An owned, unbalanced 2D K-D Tree with branch-and-bound nearest-neighbor search.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;

pub use builder::KDTreeBuilder;
pub use index::KDTree;
pub use traversal::{Axis, Node, Points};
