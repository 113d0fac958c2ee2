use geo_traits::CoordTrait;

use crate::error::{PointSetError, Result};
use crate::r#type::CoordNum;

/// An immutable planar point.
///
/// Two points are equal only when both coordinates compare equal as floats. Indexes treat equal
/// points as the same stored entity. This is IEEE equality rather than bitwise equality: `-0.0`
/// equals `0.0`, so `(-0.0, y)` and `(0.0, y)` are stored once, and a `-0.0` coordinate is sent
/// to the right of a `0.0` split.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<N: CoordNum> {
    x: N,
    y: N,
}

impl<N: CoordNum> Point<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Searches compare squared distances so that no square root is taken per visited node.
    #[inline]
    pub fn sq_distance(&self, other: &Point<N>) -> N {
        sq_dist(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point<N>) -> N {
        self.sq_distance(other).sqrt()
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Whether both coordinates are finite and within [`CoordNum::max_coord`] of zero.
    #[inline]
    pub fn is_indexable(&self) -> bool {
        let limit = N::max_coord();
        self.is_finite() && self.x.abs() <= limit && self.y.abs() <= limit
    }

    /// Reject coordinates an index cannot order or measure: NaN breaks the split rule, and
    /// infinite or huge values make squared distances overflow.
    pub(crate) fn check_coords(&self) -> Result<()> {
        if self.is_indexable() {
            Ok(())
        } else {
            Err(PointSetError::InvalidArgument(format!(
                "coordinates must be finite and within ±{:?}, got ({:?}, {:?})",
                N::max_coord(),
                self.x,
                self.y
            )))
        }
    }
}

impl<N: CoordNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: CoordNum> From<[N; 2]> for Point<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: CoordNum> From<Point<N>> for (N, N) {
    fn from(point: Point<N>) -> Self {
        (point.x, point.y)
    }
}

impl<N: CoordNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

#[inline]
pub(crate) fn sq_dist<N: CoordNum>(ax: N, ay: N, bx: N, by: N) -> N {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
