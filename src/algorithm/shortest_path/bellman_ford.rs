use super::ShortestPaths;
use crate::{error::*, graph::*};
use tracing::{debug, trace, warn};

pub trait BellmanFord
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Single-source shortest paths, allowing negative weights.
    ///
    /// Relaxes every edge in up to $\|V\| - 1$ rounds,
    /// then checks with one more round that nothing relaxes any longer.
    /// If something still does, a negative-weight cycle is reachable from `source`
    /// and [Error::NegativeCycle] is returned.
    /// If `source` is not in the graph, the result is empty.
    fn bellman_ford(&self, source: &VertexId) -> Result<ShortestPaths<Self::Weight>> {
        if !self.contains_vertex(source) {
            debug!(?source, "bellman-ford: source absent");
            return Ok(ShortestPaths::empty());
        }
        let n = self.vertex_size();
        let edges: Vec<_> = self.weighted_edges().collect();
        debug!(vertices = n, edges = edges.len(), "bellman-ford");
        let mut res = ShortestPaths::init(*source, n);
        for round in 1..n {
            let mut relaxed = false;
            for (e, w) in edges.iter() {
                if let Some(d) = res.distance(&e.source) {
                    relaxed |= res.relax(e.source, e.sink, d + *w);
                }
            }
            trace!(round, relaxed, "bellman-ford round");
            // fixpoint
            if !relaxed {
                break;
            }
        }
        for (e, w) in edges.iter() {
            if let Some(d) = res.distance(&e.source) {
                if improves(d + *w, res.distance(&e.sink)) {
                    warn!(source = ?e.source, sink = ?e.sink, "bellman-ford: negative-weight cycle");
                    return Err(Error::NegativeCycle { vertex: e.sink });
                }
            }
        }
        Ok(res)
    }
}

impl<G: WeightedQueryableGraph> BellmanFord for G {}
