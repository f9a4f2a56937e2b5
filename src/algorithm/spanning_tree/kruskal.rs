use super::{Spanning, SpanningTree};
use crate::{collections::UnionFind, graph::*};
use ahash::RandomState;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Kruskal's minimum spanning forest.
///
/// Edge directions are ignored: of `u -> v` and `v -> u`, only whichever comes first
/// (in [EdgeId] order) is considered, and self-loops never are.
/// Edges are taken in ascending order of weight (stable, so ties go to the smaller [EdgeId])
/// and kept unless they would close a cycle.
/// The scan stops early once $\|V\| - 1$ edges are kept.
///
/// On a disconnected graph the result is [Spanning::Partial],
/// holding the minimum spanning forest.
pub trait Kruskal
where
    Self: WeightedQueryableGraph + Sized,
{
    fn kruskal(&self) -> Spanning<Self::Weight> {
        let n = self.vertex_size();
        let mut seen: HashSet<(VertexId, VertexId), RandomState> =
            HashSet::with_capacity_and_hasher(self.edge_size(), RandomState::new());
        let mut candidates: Vec<(VertexId, VertexId, Self::Weight)> = self
            .weighted_edges()
            .filter(|(e, _)| !e.is_self_loop())
            .filter_map(|(e, w)| {
                let (u, v) = if e.source < e.sink {
                    (e.source, e.sink)
                } else {
                    (e.sink, e.source)
                };
                if seen.insert((u, v)) {
                    Some((u, v, w))
                } else {
                    None
                }
            })
            .collect();
        candidates.sort_by_key(|(_, _, w)| TotalOrd(*w));
        debug!(candidates = candidates.len(), vertices = n, "kruskal");

        let mut sets = UnionFind::new(n);
        let mut tree = SpanningTree::new();
        for (u, v, w) in candidates {
            if tree.len() + 1 >= n {
                break;
            }
            if sets.union(u, v) {
                tree.push(u, v, w);
            }
        }
        let res = Spanning::classify(tree, n);
        if !res.is_complete() {
            warn!(
                components = sets.set_count(),
                "kruskal: graph is disconnected"
            );
        }
        res
    }
}

impl<G: WeightedQueryableGraph> Kruskal for G {}
