use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointSetError {
    /// A caller passed input that cannot be indexed or queried, such as an empty point collection
    /// or a non-finite coordinate.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A nearest-neighbor query was made against a set holding no points.
    #[error("Cannot query an empty point set")]
    EmptyStructure,
}

pub type Result<T> = std::result::Result<T, PointSetError>;
