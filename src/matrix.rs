use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};
use serde::{Deserialize, Serialize};

use crate::capacity::Capacity;
use crate::error::Error;

/// A dense square matrix of non-negative edge capacities.
///
/// Entry `(u, v)` is the directed capacity from vertex `u` to vertex `v`;
/// zero means no edge. Vertices are identified by their row/column index
/// `0..dim`. Every constructor validates squareness and non-negativity, so a
/// value of this type is always a well-formed graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<C>>",
    into = "Vec<Vec<C>>",
    bound(
        serialize = "C: Capacity + Serialize",
        deserialize = "C: Capacity + Deserialize<'de>"
    )
)]
pub struct CapacityMatrix<C> {
    dim: usize,
    entries: Vec<C>,
}

impl<C: Capacity> CapacityMatrix<C> {
    /// Builds a matrix from row vectors, rejecting ragged rows and negative
    /// entries.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, Error> {
        let dim = rows.len();
        let mut entries = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(Error::NonSquareMatrix);
            }
            for capacity in row {
                if capacity < C::zero() {
                    return Err(Error::NegativeCapacity);
                }
                entries.push(capacity);
            }
        }
        Ok(Self { dim, entries })
    }

    /// Builds a matrix from any petgraph graph whose edge weights are
    /// capacities.
    ///
    /// Vertices map to matrix indices through [`NodeIndexable`], and the
    /// capacities of parallel edges are accumulated into a single entry.
    pub fn from_graph<G>(graph: G) -> Result<Self, Error>
    where
        G: IntoEdgeReferences<EdgeWeight = C> + NodeIndexable,
    {
        let dim = graph.node_bound();
        let mut entries = vec![C::zero(); dim * dim];
        for edge in graph.edge_references() {
            let capacity = *edge.weight();
            if capacity < C::zero() {
                return Err(Error::NegativeCapacity);
            }
            let entry = &mut entries[graph.to_index(edge.source()) * dim
                + graph.to_index(edge.target())];
            *entry = entry
                .checked_add(&capacity)
                .ok_or(Error::ArithmeticOverflow)?;
        }
        Ok(Self { dim, entries })
    }

    /// The number of vertices.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns an error unless `v` indexes a vertex of this matrix.
    pub fn check_vertex(&self, v: usize) -> Result<(), Error> {
        if v < self.dim {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange)
        }
    }

    /// Total capacity leaving `u`, an upper bound on any flow out of it.
    pub fn outgoing_capacity(&self, u: usize) -> C {
        self.entries[u * self.dim..(u + 1) * self.dim]
            .iter()
            .copied()
            .sum()
    }

    /// Total capacity entering `v`, an upper bound on any flow into it.
    pub fn incoming_capacity(&self, v: usize) -> C {
        (0..self.dim).map(|u| self[(u, v)]).sum()
    }

    pub(crate) fn entries(&self) -> &[C] {
        &self.entries
    }
}

impl<C: Capacity> Index<(usize, usize)> for CapacityMatrix<C> {
    type Output = C;

    fn index(&self, (u, v): (usize, usize)) -> &C {
        &self.entries[u * self.dim + v]
    }
}

impl<C: Capacity> TryFrom<Vec<Vec<C>>> for CapacityMatrix<C> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<C>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<C: Capacity> From<CapacityMatrix<C>> for Vec<Vec<C>> {
    fn from(matrix: CapacityMatrix<C>) -> Self {
        matrix
            .entries
            .chunks(matrix.dim)
            .map(<[C]>::to_vec)
            .collect()
    }
}
