use std::fmt::Debug;

use num_traits::Float;

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Searching relies on exact
/// comparisons and on squared distances staying representable, so only the primitive float types
/// are supported.
pub trait CoordNum: private::Sealed + Float + Default + Debug + Send + Sync + 'static {
    /// The largest coordinate magnitude accepted by an index, `sqrt(MAX) / 4`.
    ///
    /// Two coordinates within this range differ by at most `sqrt(MAX) / 2`, so a squared distance
    /// between any two accepted points is at most `MAX / 2` and never overflows.
    fn max_coord() -> Self {
        let two = Self::one() + Self::one();
        <Self as Float>::max_value().sqrt() / (two * two)
    }
}

impl CoordNum for f32 {}

impl CoordNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
