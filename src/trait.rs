use geo_traits::CoordTrait;

use crate::error::Result;
use crate::point::Point;
use crate::r#type::CoordNum;

/// A set of points that can resolve a location to its closest stored point.
///
/// Implemented by [`KDTree`][crate::kdtree::KDTree], which prunes its search, and by
/// [`NaivePointSet`][crate::naive::NaivePointSet], which scans every point.
pub trait PointSet<N: CoordNum> {
    /// The number of points held by this set.
    fn num_items(&self) -> usize;

    /// Returns `true` if this set holds no points.
    fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    /// Find the stored point closest to `(x, y)` by Euclidean distance.
    ///
    /// When several stored points are equally close, which one is returned depends on the
    /// implementation, but it is always the same for the same set and query.
    ///
    /// Returns [`PointSetError::EmptyStructure`][crate::PointSetError::EmptyStructure] if the
    /// set is empty and [`PointSetError::InvalidArgument`][crate::PointSetError::InvalidArgument]
    /// if the query is not finite or lies beyond [`CoordNum::max_coord`].
    fn nearest(&self, x: N, y: N) -> Result<Point<N>>;

    /// Find the stored point closest to `coord`.
    fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Point<N>> {
        self.nearest(coord.x(), coord.y())
    }

    /// Find the stored point closest to `(x, y)`, along with its Euclidean distance to the query.
    fn nearest_with_distance(&self, x: N, y: N) -> Result<(Point<N>, N)> {
        let found = self.nearest(x, y)?;
        let distance = found.distance(&Point::new(x, y));
        Ok((found, distance))
    }

    /// Resolve many queries in parallel.
    ///
    /// Results are in the same order as `queries`. If any query fails, one of the errors is returned.
    #[cfg(feature = "rayon")]
    fn par_nearest_many(&self, queries: &[(N, N)]) -> Result<Vec<Point<N>>>
    where
        Self: Sync,
    {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|&(x, y)| self.nearest(x, y))
            .collect()
    }
}
