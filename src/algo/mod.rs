use alloc::vec::Vec;
use core::fmt::Debug;

pub mod ford_fulkerson;

use crate::capacity::Capacity;
use crate::matrix::CapacityMatrix;

/// The maximum flow algorithm.
pub trait MaxFlow {
    type Capacity;
    type Error: Debug;

    /// Run the algorithm over `graph` and return the maximum flow value that
    /// can be routed from `source` to `sink`.
    fn max_flow(
        &mut self,
        graph: &CapacityMatrix<Self::Capacity>,
        source: usize,
        sink: usize,
    ) -> Result<Self::Capacity, Self::Error>;
}

/// A source-to-sink path through the residual graph, together with the
/// bottleneck capacity it can carry.
///
/// Every consecutive vertex pair had strictly positive remaining capacity
/// when the path was discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<C> {
    vertices: Vec<usize>,
    bottleneck: C,
}

impl<C: Capacity> AugmentingPath<C> {
    pub(crate) fn new(vertices: Vec<usize>, bottleneck: C) -> Self {
        Self {
            vertices,
            bottleneck,
        }
    }

    /// The vertices of the path, source first, sink last.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// The minimum remaining capacity along the path at discovery time.
    pub fn bottleneck(&self) -> C {
        self.bottleneck
    }
}
