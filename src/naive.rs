//! A linear-scan point set.

use crate::error::{PointSetError, Result};
use crate::point::Point;
use crate::r#type::CoordNum;
use crate::PointSet;

/// A [`PointSet`] that compares the query against every stored point.
///
/// Useful as a baseline and as an oracle when testing [`KDTree`][crate::kdtree::KDTree]. Unlike the
/// tree it can be empty, in which case every query fails with
/// [`PointSetError::EmptyStructure`].
///
/// Ties go to the point that comes first in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NaivePointSet<N: CoordNum> {
    points: Vec<Point<N>>,
}

impl<N: CoordNum> NaivePointSet<N> {
    /// Create a new set from the provided points. Points are stored as given, duplicates included.
    pub fn new(points: impl IntoIterator<Item = Point<N>>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// The stored points, in input order.
    pub fn points(&self) -> &[Point<N>] {
        &self.points
    }
}

impl<N: CoordNum> PointSet<N> for NaivePointSet<N> {
    fn num_items(&self) -> usize {
        self.points.len()
    }

    fn nearest(&self, x: N, y: N) -> Result<Point<N>> {
        let query = Point::new(x, y);
        query.check_coords()?;

        let (first, rest) = self
            .points
            .split_first()
            .ok_or(PointSetError::EmptyStructure)?;

        let mut best = *first;
        let mut best_dist = best.sq_distance(&query);
        for point in rest {
            let dist = point.sq_distance(&query);
            if dist < best_dist {
                best = *point;
                best_dist = dist;
            }
        }

        Ok(best)
    }
}
