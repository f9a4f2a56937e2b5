use super::dfs::{walk, Event};
use crate::{error::*, graph::*};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::{cmp::Reverse, ops::ControlFlow};
use tracing::{debug, warn};

/// Topological orderings of directed acyclic graphs.
///
/// In a returned order, every edge goes from an earlier vertex to a later one.
/// A graph with a cycle, self-loops included, has no such order and gives an error;
/// a partial order is never returned.
pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Kahn's algorithm, repeatedly taking a vertex with no remaining in-edges.
    ///
    /// Among several such vertices, the smallest [VertexId] goes first.
    fn toposort_kahn(&self) -> Result<Vec<VertexId>> {
        let n = self.vertex_size();
        let mut degree_queue: KeyedPriorityQueue<
            VertexId,
            Reverse<(usize, VertexId)>,
            RandomState,
        > = KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        for v in self.iter_vertices() {
            let in_degree = self.in_edges(&v).count();
            degree_queue.push(v, Reverse((in_degree, v)));
        }
        let mut res = Vec::with_capacity(n);
        while let Some((v, Reverse((in_degree, _)))) = degree_queue.pop() {
            if in_degree > 0 {
                // everything left lies on or behind a cycle
                let remaining = degree_queue.len() + 1;
                warn!(remaining, "toposort_kahn: not a DAG");
                return Err(Error::NotADag { remaining });
            }
            for e in self.out_edges(&v) {
                if let Some(Reverse((d, _))) = degree_queue.get_priority(&e.sink).copied() {
                    let _ = degree_queue.set_priority(&e.sink, Reverse((d - 1, e.sink)));
                }
            }
            res.push(v);
        }
        debug!(vertices = n, "toposort_kahn");
        Ok(res)
    }

    /// Reverse finish order of a depth-first search.
    ///
    /// Fails with the first back edge met.
    fn toposort_dfs(&self) -> Result<Vec<VertexId>> {
        let mut res = Vec::with_capacity(self.vertex_size());
        let found = walk(self, self.iter_vertices(), |ev| match ev {
            Event::Finish(v) => {
                res.push(v);
                ControlFlow::Continue(())
            }
            Event::BackEdge(e) => ControlFlow::Break(e),
            Event::Discover { .. } => ControlFlow::Continue(()),
        });
        if let ControlFlow::Break(e) = found {
            warn!(source = ?e.source, sink = ?e.sink, "toposort_dfs: back edge");
            return Err(Error::BackEdge {
                tail: e.source,
                head: e.sink,
            });
        }
        res.reverse();
        debug!(vertices = res.len(), "toposort_dfs");
        Ok(res)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}
