//! Maximum flow via the Ford-Fulkerson method.
//!
//! One augmenting path is found and saturated at a time: a depth-first
//! search locates a source-to-sink path with remaining capacity, its
//! bottleneck is pushed through the residual graph, and the loop repeats
//! until the sink is unreachable. Every augmentation increases the total by
//! at least one unit of integral capacity while the total is bounded by the
//! capacity leaving the source, so the loop terminates. The classic method
//! inherits no such guarantee for non-integral capacities, which is why
//! [`Capacity`] is only implemented for integers.

use alloc::vec::Vec;
use core::marker::PhantomData;
use core::mem;

use crate::algo::{AugmentingPath, MaxFlow};
use crate::capacity::Capacity;
use crate::error::Error;
use crate::matrix::CapacityMatrix;
use crate::residual::ResidualGraph;

/// Single-path augmenting solver with reusable search state.
///
/// The visited markers, the path-so-far buffer and the explicit search stack
/// are kept between searches so one computation allocates them once.
#[derive(Debug, Default)]
pub struct FordFulkerson<C> {
    visited: Vec<bool>,
    path: Vec<usize>,
    // (vertex, next candidate neighbor) frames of the depth-first search
    stack: Vec<(usize, usize)>,
    _marker: PhantomData<C>,
}

impl<C: Capacity> FordFulkerson<C> {
    /// Searches `residual` depth-first for an augmenting path from `source`
    /// to `sink`.
    ///
    /// Candidate neighbors are tried in increasing vertex order, so of all
    /// augmenting paths the one first in that order is returned. `None`
    /// means the sink is unreachable through edges with remaining capacity,
    /// in which case the path-so-far buffer has been fully unwound.
    pub fn find_path(
        &mut self,
        residual: &ResidualGraph<C>,
        source: usize,
        sink: usize,
    ) -> Option<AugmentingPath<C>> {
        let n = residual.dim();
        debug_assert!(source < n && sink < n);

        self.visited.clear();
        self.visited.resize(n, false);
        self.path.clear();
        self.stack.clear();

        self.visited[source] = true;
        self.path.push(source);
        if source == sink {
            // Degenerate search: a single-vertex path constrains nothing, so
            // its bottleneck is unbounded. Callers must not apply flow to it.
            let vertices = mem::take(&mut self.path);
            let bottleneck = residual.bottleneck(&vertices);
            return Some(AugmentingPath::new(vertices, bottleneck));
        }
        self.stack.push((source, 0));

        while let Some(&mut (u, ref mut cursor)) = self.stack.last_mut() {
            let next = (*cursor..n)
                .find(|&v| !self.visited[v] && residual.remaining(u, v) > C::zero());
            match next {
                Some(v) => {
                    *cursor = v + 1;
                    self.visited[v] = true;
                    self.path.push(v);
                    if v == sink {
                        let vertices = mem::take(&mut self.path);
                        let bottleneck = residual.bottleneck(&vertices);
                        return Some(AugmentingPath::new(vertices, bottleneck));
                    }
                    self.stack.push((v, 0));
                }
                None => {
                    // Exhausted branch: drop the frame and its path entry.
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }

        None
    }
}

impl<C: Capacity> MaxFlow for FordFulkerson<C> {
    type Capacity = C;
    type Error = Error;

    fn max_flow(
        &mut self,
        graph: &CapacityMatrix<C>,
        source: usize,
        sink: usize,
    ) -> Result<C, Error> {
        graph.check_vertex(source)?;
        graph.check_vertex(sink)?;
        if source == sink {
            return Err(Error::DegenerateRequest);
        }

        let mut residual = ResidualGraph::new(graph);
        let mut total = C::zero();
        let mut augmentations = 0_usize;

        while let Some(path) = self.find_path(&residual, source, sink) {
            // Re-derive the bottleneck against the live residual; it must
            // agree with the value computed at discovery time.
            let bottleneck = residual.bottleneck(path.vertices());
            debug_assert_eq!(bottleneck, path.bottleneck());

            residual.apply(path.vertices(), bottleneck);
            total = total
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;
            augmentations += 1;
            log::trace!("augmented along {:?} by {bottleneck}", path.vertices());
        }

        log::debug!("max flow {total} after {augmentations} augmentations");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::FordFulkerson;
    use crate::algo::MaxFlow;
    use crate::error::Error;
    use crate::matrix::CapacityMatrix;
    use crate::residual::ResidualGraph;

    // A -> B:20, B -> C:5, B -> D:6, C -> D:3, C -> E:7, D -> E:8
    fn reference_graph() -> CapacityMatrix<i32> {
        CapacityMatrix::from_rows(vec![
            vec![0, 20, 0, 0, 0],
            vec![0, 0, 5, 6, 0],
            vec![0, 0, 0, 3, 7],
            vec![0, 0, 0, 0, 8],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn reference_graph_max_flow_is_11() {
        let graph = reference_graph();
        let flow = FordFulkerson::default().max_flow(&graph, 0, 4);
        assert_eq!(flow, Ok(11));
    }

    #[test]
    fn first_path_follows_increasing_vertex_order() {
        let residual = ResidualGraph::new(&reference_graph());
        let mut solver = FordFulkerson::default();

        let path = solver.find_path(&residual, 0, 4).unwrap();
        assert_eq!(path.vertices(), [0, 1, 2, 3, 4]);
        assert_eq!(path.bottleneck(), 3);
    }

    #[test]
    fn augmentations_conserve_capacity_and_grow_the_total() {
        let graph = reference_graph();
        let mut residual = ResidualGraph::new(&graph);
        let mut solver = FordFulkerson::default();
        let mut total = 0;

        while let Some(path) = solver.find_path(&residual, 0, 4) {
            let bottleneck = residual.bottleneck(path.vertices());
            assert_eq!(bottleneck, path.bottleneck());
            assert!(bottleneck > 0, "every found path must grow the total");

            residual.apply(path.vertices(), bottleneck);
            total += bottleneck;

            for u in 0..graph.dim() {
                for v in 0..graph.dim() {
                    assert_eq!(
                        residual.remaining(u, v) + residual.remaining(v, u),
                        graph[(u, v)] + graph[(v, u)],
                        "capacity must be redistributed, never created"
                    );
                    assert!(residual.remaining(u, v) >= 0);
                }
            }
        }

        assert_eq!(total, 11);
    }

    #[test]
    fn disconnected_sink_yields_zero() {
        let graph =
            CapacityMatrix::from_rows(vec![vec![0, 0, 0], vec![0, 0, 4], vec![0, 0, 0]])
                .unwrap();
        let flow = FordFulkerson::default().max_flow(&graph, 0, 2);
        assert_eq!(flow, Ok(0));
    }

    #[test]
    fn failed_search_unwinds_the_path_buffer() {
        let graph =
            CapacityMatrix::from_rows(vec![vec![0, 3, 0], vec![0, 0, 0], vec![0, 0, 0]])
                .unwrap();
        let residual = ResidualGraph::new(&graph);
        let mut solver = FordFulkerson::default();

        assert_eq!(solver.find_path(&residual, 0, 2), None);
        assert!(solver.path.is_empty());
        assert!(solver.stack.is_empty());
    }

    #[test]
    fn flow_is_redirected_through_reverse_edges() {
        // The depth-first order first routes 0 -> 1 -> 2 -> 3, which must be
        // partially cancelled through the reverse edge (2, 1) to reach the
        // maximum of 2.
        let graph = CapacityMatrix::from_rows(vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 1, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let flow = FordFulkerson::default().max_flow(&graph, 0, 3);
        assert_eq!(flow, Ok(2));
    }

    #[test]
    fn source_equals_sink_is_a_degenerate_request() {
        let graph = reference_graph();
        let flow = FordFulkerson::default().max_flow(&graph, 2, 2);
        assert_eq!(flow, Err(Error::DegenerateRequest));
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let graph = reference_graph();
        let mut solver = FordFulkerson::default();
        assert_eq!(solver.max_flow(&graph, 0, 5), Err(Error::VertexOutOfRange));
        assert_eq!(solver.max_flow(&graph, 9, 4), Err(Error::VertexOutOfRange));
    }

    #[test]
    fn degenerate_search_reports_an_unbounded_single_vertex_path() {
        let residual = ResidualGraph::new(&reference_graph());
        let mut solver = FordFulkerson::default();

        let path = solver.find_path(&residual, 2, 2).unwrap();
        assert_eq!(path.vertices(), [2]);
        assert_eq!(path.bottleneck(), i32::MAX);
    }

    #[test]
    fn accumulator_overflow_is_reported() {
        // Two disjoint saturated paths of i32::MAX each overflow the total.
        let graph = CapacityMatrix::from_rows(vec![
            vec![0, i32::MAX, i32::MAX, 0],
            vec![0, 0, 0, i32::MAX],
            vec![0, 0, 0, i32::MAX],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let flow = FordFulkerson::default().max_flow(&graph, 0, 3);
        assert_eq!(flow, Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn input_matrix_is_never_mutated() {
        let graph = reference_graph();
        let pristine = graph.clone();
        FordFulkerson::default().max_flow(&graph, 0, 4).unwrap();
        assert_eq!(graph, pristine);
    }

    #[test]
    fn flow_is_bounded_by_source_and_sink_capacity() {
        let graph = reference_graph();
        let flow = FordFulkerson::default().max_flow(&graph, 0, 4).unwrap();
        assert!(flow <= graph.outgoing_capacity(0));
        assert!(flow <= graph.incoming_capacity(4));
    }
}
