//! Adjacency is a small toolkit for representing networks as dense adjacency matrices, telling
//! directed networks apart from undirected ones and turning the former into the latter.
//!
//! # Basic usage
//!
//! The library is centered around the [`AdjacencyMatrix`](matrix::AdjacencyMatrix) structure,
//! which is created empty and filled in edge by edge. Entry `(i, j)` holds the weight of the edge
//! from node `i` to node `j`, unweighted edges have a weight of `1`.
//!
//! ```rust
//! use adjacency::matrix::AdjacencyMatrix;
//! use adjacency::symmetry::Method;
//!
//! // A five node directed network.
//! let mut matrix = AdjacencyMatrix::zeros(5);
//! for (i, j) in [(0, 1), (1, 2), (1, 4), (2, 1), (2, 3), (4, 1)] {
//!     matrix.add_edge(i, j)?;
//! }
//!
//! // Not every edge is reciprocated, so the network is directed.
//! assert!(!matrix.is_symmetric());
//!
//! // Averaging reciprocal weights yields an undirected network.
//! let undirected = matrix.symmetrize(Method::Average);
//! assert!(undirected.is_symmetric());
//! assert_eq!(undirected.get(0, 1), Some(0.5));
//! assert_eq!(undirected.get(1, 2), Some(1.0));
//!
//! // Matrices can be pretty printed.
//! println!("{undirected}");
//! # Ok::<(), adjacency::Error>(())
//! ```
//!
//! The [`symmetry`] functions offer the same operations on plain [`nalgebra::DMatrix`] values and
//! check the shape themselves.

pub mod error;
pub mod matrix;
pub mod symmetry;

pub use error::{Error, Result};
pub use matrix::AdjacencyMatrix;
pub use symmetry::Method;
