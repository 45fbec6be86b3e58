#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Maximum flow over dense capacity matrices.
//!
//! The [`compute_max_flow`] entry point runs the Ford-Fulkerson method: a
//! depth-first search finds an augmenting path through the residual graph,
//! the path's bottleneck capacity is applied (forward capacities decrease,
//! reverse capacities increase), and the loop repeats until no augmenting
//! path remains.
//!
//! ```
//! use maxflow::{compute_max_flow, CapacityMatrix};
//!
//! let graph = CapacityMatrix::from_rows(vec![
//!     vec![0, 20, 0, 0, 0],
//!     vec![0, 0, 5, 6, 0],
//!     vec![0, 0, 0, 3, 7],
//!     vec![0, 0, 0, 0, 8],
//!     vec![0, 0, 0, 0, 0],
//! ])?;
//! assert_eq!(compute_max_flow(&graph, 0, 4)?, 11);
//! # Ok::<(), maxflow::Error>(())
//! ```

extern crate alloc;

pub mod algo;
mod capacity;
mod error;
mod matrix;
mod residual;

pub use algo::ford_fulkerson::FordFulkerson;
pub use algo::{AugmentingPath, MaxFlow};
pub use capacity::Capacity;
pub use error::Error;
pub use matrix::CapacityMatrix;
pub use residual::ResidualGraph;

/// Computes the maximum flow from `source` to `sink` in `graph`.
///
/// The graph is copied into a residual matrix before the run, so the input
/// is never mutated and can be reused afterwards. Fails with
/// [`Error::VertexOutOfRange`] when either endpoint is not a vertex of the
/// graph and with [`Error::DegenerateRequest`] when the endpoints coincide.
pub fn compute_max_flow<C: Capacity>(
    graph: &CapacityMatrix<C>,
    source: usize,
    sink: usize,
) -> Result<C, Error> {
    FordFulkerson::default().max_flow(graph, source, sink)
}
