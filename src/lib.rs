#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
pub mod naive;
mod point;
mod r#trait;
mod r#type;

pub use error::{PointSetError, Result};
pub use point::Point;
pub use r#trait::PointSet;
pub use r#type::CoordNum;

#[cfg(test)]
pub(crate) mod test;
