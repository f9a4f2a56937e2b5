use super::ShortestPaths;
use crate::{collections::MinPriorityQueue, graph::*};
use num_traits::Zero;
use tracing::debug;

/// Dijkstra's single-source shortest paths.
///
/// All weights must be non-negative.
/// This is not checked: negative weights silently give wrong answers.
///
/// Both variants settle vertices in the same order
/// (least tentative distance first, ties to the smaller [VertexId]),
/// so they return identical distances and predecessors.
/// Vertices never settled are unreachable and keep distance `None`.
/// If `source` is not in the graph, the result is empty.
pub trait Dijkstra
where
    Self: WeightedQueryableGraph + Sized,
{
    /// The array-scan variant: $O(\|V\|^2)$.
    fn dijkstra(&self, source: &VertexId) -> ShortestPaths<Self::Weight> {
        if !self.contains_vertex(source) {
            debug!(?source, "dijkstra: source absent");
            return ShortestPaths::empty();
        }
        let n = self.vertex_size();
        let mut res = ShortestPaths::init(*source, n);
        let mut settled = vec![false; n];
        for _ in 0..n {
            let next = res
                .reachable()
                .filter(|(v, _)| !settled[v.to_raw()])
                .min_by(|(_, a), (_, b)| TotalOrd(*a).cmp(&TotalOrd(*b)));
            // nothing left with a finite distance: the rest is unreachable
            let (u, d) = match next {
                Some(x) => x,
                None => break,
            };
            settled[u.to_raw()] = true;
            for (e, w) in self.weighted_out_edges(&u) {
                if !settled[e.sink.to_raw()] {
                    res.relax(u, e.sink, d + w);
                }
            }
        }
        debug!(
            settled = settled.iter().filter(|x| **x).count(),
            vertices = n,
            "dijkstra"
        );
        res
    }

    /// The heap-accelerated variant: $O((\|V\|+\|E\|) \log \|V\|)$.
    fn dijkstra_heap(&self, source: &VertexId) -> ShortestPaths<Self::Weight> {
        if !self.contains_vertex(source) {
            debug!(?source, "dijkstra_heap: source absent");
            return ShortestPaths::empty();
        }
        let n = self.vertex_size();
        let mut res = ShortestPaths::init(*source, n);
        let mut settled = vec![false; n];
        let mut queue = MinPriorityQueue::with_capacity(n);
        queue.push(*source, Self::Weight::zero());
        while let Some((u, d)) = queue.pop() {
            if settled[u.to_raw()] {
                continue;
            }
            settled[u.to_raw()] = true;
            for (e, w) in self.weighted_out_edges(&u) {
                if !settled[e.sink.to_raw()] && res.relax(u, e.sink, d + w) {
                    queue.push(e.sink, d + w);
                }
            }
        }
        debug!(
            settled = settled.iter().filter(|x| **x).count(),
            vertices = n,
            "dijkstra_heap"
        );
        res
    }
}

impl<G: WeightedQueryableGraph> Dijkstra for G {}

#[cfg(test)]
mod tests {
    use super::super::{tests::*, BellmanFord};
    use super::*;
    use crate::testing::*;
    use petgraph::graph::NodeIndex;
    use quickcheck_macros::quickcheck;

    #[test]
    fn clrs() {
        let g = clrs_graph();
        let s = g.vertex_id(&"s").unwrap();
        check_clrs_answer(&g, &g.dijkstra(&s));
        check_clrs_answer(&g, &g.dijkstra_heap(&s));
    }

    #[test]
    fn unreachable_vertices_stay_infinite() {
        let mut g = WeightedGraph::from_edges(vec![("a", "b", 1.5), ("c", "a", 2.0)]);
        g.add_vertex("lonely");
        let a = g.vertex_id(&"a").unwrap();
        for sp in [g.dijkstra(&a), g.dijkstra_heap(&a)] {
            assert_eq!(sp.distance(&g.vertex_id(&"b").unwrap()), Some(1.5));
            assert_eq!(sp.distance(&g.vertex_id(&"c").unwrap()), None);
            assert_eq!(sp.distance(&g.vertex_id(&"lonely").unwrap()), None);
            assert_eq!(sp.path_to(&g.vertex_id(&"c").unwrap()), None);
        }
    }

    #[test]
    fn absent_source_gives_empty_result() {
        let g = clrs_graph();
        assert!(g.dijkstra(&VertexId(99)).is_empty());
        assert!(g.dijkstra_heap(&VertexId(99)).is_empty());
    }

    #[test]
    fn zero_weight_edges_and_self_loops() {
        let g = WeightedGraph::from_edges(vec![(0, 0, 3), (0, 1, 0), (1, 2, 0), (2, 0, 0)]);
        let sp = g.dijkstra_heap(&VertexId(0));
        assert_eq!(sp.distance(&VertexId(2)), Some(0));
        assert_eq!(sp.path_to(&VertexId(2)), Some(vec![VertexId(0), VertexId(1), VertexId(2)]));
    }

    /// Array-scan and heap variants give identical results.
    #[quickcheck]
    fn variants_are_identical(graph: NonNegativeGraph) {
        let g = graph.0;
        for s in g.iter_vertices() {
            assert_eq!(g.dijkstra(&s), g.dijkstra_heap(&s));
        }
    }

    /// Bellman-Ford agrees on distances when weights are non-negative.
    #[quickcheck]
    fn agrees_with_bellman_ford(graph: NonNegativeGraph) {
        let g = graph.0;
        for s in g.iter_vertices() {
            let oracle = g.bellman_ford(&s).unwrap();
            assert_eq!(g.dijkstra(&s).distances(), oracle.distances());
        }
    }

    #[quickcheck]
    fn agrees_with_petgraph(graph: NonNegativeGraph) {
        let g = graph.0;
        let pg = to_petgraph(&g, |w| *w);
        let oracle = petgraph::algo::dijkstra(&pg, NodeIndex::new(0), None, |e| *e.weight());
        let trial = g.dijkstra_heap(&VertexId(0));
        for v in g.iter_vertices() {
            assert_eq!(trial.distance(&v), oracle.get(&NodeIndex::new(v.to_raw())).copied());
        }
    }
}
