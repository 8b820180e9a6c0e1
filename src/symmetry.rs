//! A module for testing and enforcing the symmetry of adjacency matrices.
//!
//! An undirected network has a symmetric adjacency matrix, a directed one in general doesn't. The
//! functions here work on any [`DMatrix`] and check the shape themselves, the
//! [`AdjacencyMatrix`](crate::matrix::AdjacencyMatrix) methods wrap them for matrices that are
//! square by construction.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use nalgebra::DMatrix;
use tracing::debug;

use crate::error::{Error, Result};

/// The rule used to turn a directed adjacency matrix into a symmetric one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Average each pair of reciprocal entries.
    #[default]
    Average,
    /// Mirror the upper triangle onto the lower one.
    Triu,
    /// Mirror the lower triangle onto the upper one.
    Tril,
}

impl Method {
    /// Returns the name the method is parsed from.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Average => "average",
            Method::Triu => "triu",
            Method::Tril => "tril",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses a method name.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjacency::symmetry::Method;
    ///
    /// assert_eq!("average".parse(), Ok(Method::Average));
    /// assert!("mean".parse::<Method>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "average" => Ok(Method::Average),
            "triu" => Ok(Method::Triu),
            "tril" => Ok(Method::Tril),
            other => Err(Error::InvalidArgument(format!(
                "unknown symmetrization method {other:?}, expected one of \"average\", \"triu\", \"tril\""
            ))),
        }
    }
}

/// Returns whether the matrix equals its transpose.
///
/// Entries are compared exactly, there is no tolerance. Fails if the matrix isn't square.
///
/// # Examples
///
/// ```
/// use nalgebra::dmatrix;
/// use adjacency::symmetry::is_symmetric;
///
/// assert_eq!(is_symmetric(&dmatrix![0.0, 1.0; 1.0, 0.0]), Ok(true));
/// assert_eq!(is_symmetric(&dmatrix![0.0, 1.0; 0.0, 0.0]), Ok(false));
/// ```
pub fn is_symmetric(matrix: &DMatrix<f64>) -> Result<bool> {
    ensure_square(matrix)?;

    Ok(is_symmetric_unchecked(matrix))
}

/// Produces a symmetric copy of the matrix using the given method.
///
/// The input is left untouched. Fails if the matrix isn't square.
///
/// # Examples
///
/// ```
/// use nalgebra::dmatrix;
/// use adjacency::symmetry::{symmetrize, Method};
///
/// let directed = dmatrix![0.0, 1.0;
///                         0.0, 0.0];
///
/// assert_eq!(
///     symmetrize(&directed, Method::Average).unwrap(),
///     dmatrix![0.0, 0.5;
///              0.5, 0.0]
/// );
/// ```
pub fn symmetrize(matrix: &DMatrix<f64>, method: Method) -> Result<DMatrix<f64>> {
    ensure_square(matrix)?;

    Ok(symmetrize_unchecked(matrix, method))
}

//
// Crate-private
//

/// Symmetry test for matrices already known to be square.
pub(crate) fn is_symmetric_unchecked(matrix: &DMatrix<f64>) -> bool {
    debug_assert!(matrix.is_square());

    // The diagonal always matches itself, only the strict triangles need comparing.
    (0..matrix.nrows())
        .tuple_combinations()
        .all(|(i, j)| matrix[(i, j)] == matrix[(j, i)])
}

/// Symmetrization for matrices already known to be square.
pub(crate) fn symmetrize_unchecked(matrix: &DMatrix<f64>, method: Method) -> DMatrix<f64> {
    debug_assert!(matrix.is_square());

    let n = matrix.nrows();
    debug!(n, %method, "symmetrizing adjacency matrix");

    match method {
        Method::Average => DMatrix::from_fn(n, n, |i, j| average(matrix[(i, j)], matrix[(j, i)])),
        Method::Triu => DMatrix::from_fn(n, n, |i, j| matrix[(i.min(j), i.max(j))]),
        Method::Tril => DMatrix::from_fn(n, n, |i, j| matrix[(i.max(j), i.min(j))]),
    }
}

/// The mean of two reciprocal weights.
///
/// Commutative, so `(i, j)` and `(j, i)` get the same value. Equal weights are returned as is and
/// large finite weights don't overflow to infinity.
fn average(a: f64, b: f64) -> f64 {
    if a == b {
        return a;
    }

    let mean = (a + b) / 2.0;
    if !mean.is_finite() && a.is_finite() && b.is_finite() {
        a / 2.0 + b / 2.0
    } else {
        mean
    }
}

fn ensure_square(matrix: &DMatrix<f64>) -> Result<()> {
    if matrix.is_square() {
        Ok(())
    } else {
        Err(Error::Shape {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        })
    }
}
