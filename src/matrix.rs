//! A module for working with adjacency matrices.

use std::fmt;

use itertools::iproduct;
use nalgebra::DMatrix;
use tracing::trace;

use crate::{
    error::{Error, Result},
    symmetry::{self, Method},
};

/// A dense, square adjacency matrix over the nodes `0..n`.
///
/// A nonzero entry at `(i, j)` is an edge from node `i` to node `j`, its value is the weight of the
/// edge. Unweighted edges have a weight of `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    /// The entries, always square.
    entries: DMatrix<f64>,
}

impl AdjacencyMatrix {
    /// Creates an `n`-node matrix with no edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjacency::matrix::AdjacencyMatrix;
    ///
    /// let matrix = AdjacencyMatrix::zeros(3);
    ///
    /// assert_eq!(matrix.node_count(), 3);
    /// assert_eq!(matrix.edge_count(), 0);
    /// ```
    pub fn zeros(n: usize) -> Self {
        Self {
            entries: DMatrix::zeros(n, n),
        }
    }

    /// Wraps an existing matrix, failing if it isn't square.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::{dmatrix, DMatrix};
    /// use adjacency::matrix::AdjacencyMatrix;
    ///
    /// assert!(AdjacencyMatrix::from_matrix(dmatrix![0.0, 1.0; 1.0, 0.0]).is_ok());
    /// assert!(AdjacencyMatrix::from_matrix(DMatrix::zeros(1, 2)).is_err());
    /// ```
    pub fn from_matrix(entries: DMatrix<f64>) -> Result<Self> {
        if !entries.is_square() {
            return Err(Error::Shape {
                rows: entries.nrows(),
                cols: entries.ncols(),
            });
        }

        Ok(Self { entries })
    }

    /// Builds a matrix from its rows, failing if the rows don't form a square.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjacency::matrix::AdjacencyMatrix;
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[vec![0.0, 2.0], vec![0.0, 0.0]]).unwrap();
    /// assert_eq!(matrix.get(0, 1), Some(2.0));
    ///
    /// assert!(AdjacencyMatrix::from_rows(&[vec![0.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();

        // Report the first offending row's length as the column count.
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::Shape {
                rows: n,
                cols: row.len(),
            });
        }

        Ok(Self {
            entries: DMatrix::from_fn(n, n, |i, j| rows[i][j]),
        })
    }

    /// Returns the number of nodes, i.e. the number of rows (and columns).
    pub fn node_count(&self) -> usize {
        self.entries.nrows()
    }

    /// Returns the number of nonzero entries, each one being a directed edge.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().filter(|w| **w != 0.0).count()
    }

    /// Returns the weight stored at `(i, j)`, or `None` if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.entries.get((i, j)).copied()
    }

    /// Sets the weight of the edge from `i` to `j`.
    ///
    /// Setting a weight of `0.0` removes the edge. The matrix is left unmodified if either index
    /// is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjacency::matrix::AdjacencyMatrix;
    ///
    /// let mut matrix = AdjacencyMatrix::zeros(2);
    ///
    /// assert!(matrix.set_edge(0, 1, 0.5).is_ok());
    /// assert_eq!(matrix.get(0, 1), Some(0.5));
    ///
    /// assert!(matrix.set_edge(0, 2, 1.0).is_err());
    /// ```
    pub fn set_edge(&mut self, i: usize, j: usize, weight: f64) -> Result<()> {
        let n = self.node_count();

        match self.entries.get_mut((i, j)) {
            Some(entry) => {
                trace!(i, j, weight, "setting edge");
                *entry = weight;
                Ok(())
            }
            None => Err(Error::Index { row: i, col: j, n }),
        }
    }

    /// Adds an unweighted edge from `i` to `j`, i.e. sets its weight to `1.0`.
    pub fn add_edge(&mut self, i: usize, j: usize) -> Result<()> {
        self.set_edge(i, j, 1.0)
    }

    /// Returns an iterator over the edges as `(source, target, weight)` triples, in row-major
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjacency::matrix::AdjacencyMatrix;
    ///
    /// let mut matrix = AdjacencyMatrix::zeros(3);
    /// matrix.add_edge(2, 0).unwrap();
    /// matrix.set_edge(0, 1, 3.0).unwrap();
    ///
    /// let edges: Vec<_> = matrix.edges().collect();
    /// assert_eq!(edges, vec![(0, 1, 3.0), (2, 0, 1.0)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.node_count();

        iproduct!(0..n, 0..n)
            .map(move |(i, j)| (i, j, self.entries[(i, j)]))
            .filter(|(_, _, w)| *w != 0.0)
    }

    /// Returns whether the matrix is symmetric, i.e. whether the network is undirected.
    ///
    /// Entries are compared exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjacency::matrix::AdjacencyMatrix;
    ///
    /// let mut matrix = AdjacencyMatrix::zeros(2);
    /// matrix.add_edge(0, 1).unwrap();
    /// assert!(!matrix.is_symmetric());
    ///
    /// matrix.add_edge(1, 0).unwrap();
    /// assert!(matrix.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        symmetry::is_symmetric_unchecked(&self.entries)
    }

    /// Returns whether the network is directed, the negation of [`is_symmetric`](Self::is_symmetric).
    pub fn is_directed(&self) -> bool {
        !self.is_symmetric()
    }

    /// Returns whether any edge carries a weight other than `1.0`.
    pub fn is_weighted(&self) -> bool {
        self.entries.iter().any(|w| *w != 0.0 && *w != 1.0)
    }

    /// Returns a new symmetric matrix built from this one with the given method.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use adjacency::matrix::AdjacencyMatrix;
    /// use adjacency::symmetry::Method;
    ///
    /// let mut matrix = AdjacencyMatrix::zeros(2);
    /// matrix.add_edge(0, 1).unwrap();
    ///
    /// let undirected = matrix.symmetrize(Method::Average);
    /// assert_eq!(
    ///     undirected.as_matrix(),
    ///     &dmatrix![0.0, 0.5;
    ///               0.5, 0.0]
    /// );
    ///
    /// // The original is left untouched.
    /// assert!(matrix.is_directed());
    /// ```
    pub fn symmetrize(&self, method: Method) -> Self {
        Self {
            entries: symmetry::symmetrize_unchecked(&self.entries, method),
        }
    }

    /// Like [`symmetrize`](Self::symmetrize) but takes the method by name (`"average"`, `"triu"`
    /// or `"tril"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use adjacency::matrix::AdjacencyMatrix;
    /// use adjacency::symmetry::Method;
    /// use adjacency::Error;
    ///
    /// let mut matrix = AdjacencyMatrix::zeros(2);
    /// matrix.add_edge(0, 1).unwrap();
    ///
    /// assert_eq!(
    ///     matrix.symmetrize_by_name("average"),
    ///     Ok(matrix.symmetrize(Method::Average))
    /// );
    /// assert!(matches!(
    ///     matrix.symmetrize_by_name("mean"),
    ///     Err(Error::InvalidArgument(_))
    /// ));
    /// ```
    pub fn symmetrize_by_name(&self, method: &str) -> Result<Self> {
        Ok(self.symmetrize(method.parse()?))
    }

    /// Returns the matrix with every edge reversed.
    pub fn transpose(&self) -> Self {
        Self {
            entries: self.entries.transpose(),
        }
    }

    /// Returns a reference to the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.entries
    }

    /// Consumes the adjacency matrix and returns the underlying matrix.
    pub fn into_inner(self) -> DMatrix<f64> {
        self.entries
    }
}

//
// Trait implementations
//

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::zeros(0)
    }
}

impl TryFrom<DMatrix<f64>> for AdjacencyMatrix {
    type Error = Error;

    fn try_from(entries: DMatrix<f64>) -> Result<Self> {
        Self::from_matrix(entries)
    }
}

impl From<AdjacencyMatrix> for DMatrix<f64> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.into_inner()
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.entries, f)
    }
}
