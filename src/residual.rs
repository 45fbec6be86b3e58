use alloc::vec::Vec;

use itertools::Itertools;

use crate::capacity::Capacity;
use crate::matrix::CapacityMatrix;

/// Residual capacities for one max-flow computation.
///
/// Created as an independent copy of the capacity matrix, so the caller's
/// graph is never mutated and can be reused after the run. Invariant: every
/// entry stays non-negative; applying a path's bottleneck keeps it so because
/// the bottleneck never exceeds the remaining capacity of any path edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidualGraph<C> {
    dim: usize,
    entries: Vec<C>,
}

impl<C: Capacity> ResidualGraph<C> {
    pub fn new(graph: &CapacityMatrix<C>) -> Self {
        Self {
            dim: graph.dim(),
            entries: graph.entries().to_vec(),
        }
    }

    /// The number of vertices.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Remaining capacity from `u` to `v`.
    pub fn remaining(&self, u: usize, v: usize) -> C {
        self.entries[u * self.dim + v]
    }

    /// The minimum remaining capacity along `path`.
    ///
    /// A path of fewer than two vertices has no edges to constrain it and
    /// reports `C::max_value()`.
    pub fn bottleneck(&self, path: &[usize]) -> C {
        path.iter()
            .copied()
            .tuple_windows()
            .map(|(u, v)| self.remaining(u, v))
            .min()
            .unwrap_or_else(C::max_value)
    }

    /// Pushes `amount` units of flow along `path`, decreasing the remaining
    /// capacity of every path edge and increasing its reversal.
    ///
    /// The reverse increase is what lets a later search cancel flow already
    /// routed through an edge. Precondition: `amount` does not exceed the
    /// remaining capacity of any path edge.
    pub fn apply(&mut self, path: &[usize], amount: C) {
        for (u, v) in path.iter().copied().tuple_windows() {
            debug_assert!(amount <= self.remaining(u, v));
            self.entries[u * self.dim + v] -= amount;
            self.entries[v * self.dim + u] += amount;
        }
    }
}
