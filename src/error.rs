//! Errors returned by matrix construction and symmetrization.

/// The error type for this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A square matrix was expected.
    #[error("expected a square matrix, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    /// An edge index fell outside of `0..n`.
    #[error("edge ({row}, {col}) is out of bounds for {n} nodes")]
    Index { row: usize, col: usize, n: usize },

    /// An argument wasn't recognised, e.g. an unknown symmetrization method.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
