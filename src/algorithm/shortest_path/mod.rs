//! Single-source and all-pairs shortest paths.
//!
//! | algorithm                     | weights      | complexity             |
//! | ----------------------------- | ------------ | ---------------------- |
//! | [BellmanFord::bellman_ford]   | any          | $O(\|V\| \|E\|)$       |
//! | [Dijkstra::dijkstra]          | non-negative | $O(\|V\|^2)$           |
//! | [Dijkstra::dijkstra_heap]     | non-negative | $O((\|V\|+\|E\|) \log \|V\|)$ |
//! | [FloydWarshall::floyd_warshall] | any        | $O(\|V\|^3)$           |
mod bellman_ford;
pub use self::bellman_ford::*;
mod dijkstra;
pub use self::dijkstra::*;
mod floyd_warshall;
pub use self::floyd_warshall::*;

use crate::graph::*;

/// Distances and predecessors from a single source.
///
/// A distance of `None` stands for +infinity, i.e., the vertex is unreachable.
/// If the requested source is not in the graph, the result is empty:
/// it has no source and every query answers `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPaths<W> {
    source: Option<VertexId>,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<VertexId>>,
}

impl<W> ShortestPaths<W>
where
    W: Weight,
{
    pub(crate) fn empty() -> Self {
        Self {
            source: None,
            distances: vec![],
            predecessors: vec![],
        }
    }

    /// Everything but `source` at +infinity.
    pub(crate) fn init(source: VertexId, vertex_size: usize) -> Self {
        let mut distances = vec![None; vertex_size];
        distances[source.to_raw()] = Some(W::zero());
        Self {
            source: Some(source),
            distances,
            predecessors: vec![None; vertex_size],
        }
    }

    /// Lowers the distance of `sink` to `candidate` if that is shorter.
    pub(crate) fn relax(&mut self, source: VertexId, sink: VertexId, candidate: W) -> bool {
        if improves(candidate, self.distances[sink.to_raw()]) {
            self.distances[sink.to_raw()] = Some(candidate);
            self.predecessors[sink.to_raw()] = Some(source);
            true
        } else {
            false
        }
    }

    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// Whether there was no source to compute from.
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
    }

    pub fn distance(&self, v: &VertexId) -> Option<W> {
        self.distances.get(v.to_raw()).copied().flatten()
    }

    pub fn predecessor(&self, v: &VertexId) -> Option<VertexId> {
        self.predecessors.get(v.to_raw()).copied().flatten()
    }

    pub fn is_reachable(&self, v: &VertexId) -> bool {
        self.distance(v).is_some()
    }

    /// Distances indexed by [VertexId::to_raw].
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Iterates over reachable vertices and their distances.
    pub fn reachable(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (VertexId::new(i), d)))
    }

    /// The shortest path from the source to `target`, both ends included.
    pub fn path_to(&self, target: &VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;
        let mut path = vec![*target];
        let mut cur = *target;
        while let Some(pred) = self.predecessor(&cur) {
            // a predecessor chain visits each vertex at most once
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(pred);
            cur = pred;
        }
        path.reverse();
        Some(path)
    }
}
