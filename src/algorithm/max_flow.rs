//! Maximum flow by Edmonds-Karp, and the minimum cut it certifies.
//!
//! Edge weights of the graph are capacities.
//! Capacities must be non-negative; this is not checked.
use crate::graph::*;
use ahash::RandomState;
use num_traits::Zero;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// A maximum flow from `source` to `sink`.
///
/// Flows are kept as net flows between ordered pairs of vertices,
/// antisymmetric by construction: `net_flow(u, v) == -net_flow(v, u)`.
/// A positive net flow `u -> v` never exceeds the capacity of the edge `u -> v`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxFlow<W> {
    source: Option<VertexId>,
    sink: Option<VertexId>,
    value: W,
    flow: HashMap<(VertexId, VertexId), W, RandomState>,
}

/// A cut `(S, V - S)` with the source in `S` and the sink outside.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinCut<W> {
    /// Ascending vertex ID's of `S`.
    pub source_side: Vec<VertexId>,
    /// Edges from `S` to `V - S`, with their capacities.
    pub cut_edges: Vec<(VertexId, VertexId, W)>,
    /// Sum of capacities of `cut_edges`.
    pub capacity: W,
}

impl<W> MaxFlow<W>
where
    W: Weight,
{
    fn new(source: Option<VertexId>, sink: Option<VertexId>) -> Self {
        Self {
            source,
            sink,
            value: W::zero(),
            flow: HashMap::with_hasher(RandomState::new()),
        }
    }

    fn push(&mut self, u: VertexId, v: VertexId, amount: W) {
        let forward = self.flow.entry((u, v)).or_insert_with(W::zero);
        *forward = *forward + amount;
        let backward = self.flow.entry((v, u)).or_insert_with(W::zero);
        *backward = *backward - amount;
    }

    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    pub fn sink(&self) -> Option<VertexId> {
        self.sink
    }

    /// Total flow leaving the source.
    pub fn value(&self) -> W {
        self.value
    }

    /// Net flow from `u` to `v`, negative if it goes the other way.
    pub fn net_flow(&self, u: &VertexId, v: &VertexId) -> W {
        self.flow.get(&(*u, *v)).copied().unwrap_or_else(W::zero)
    }

    /// Flow carried by the edge `u -> v`, i.e., the positive part of the net flow.
    pub fn edge_flow(&self, u: &VertexId, v: &VertexId) -> W {
        let f = self.net_flow(u, v);
        if f > W::zero() {
            f
        } else {
            W::zero()
        }
    }

    /// Net flow leaving `v`. Zero at every vertex other than the source and the sink.
    pub fn net_outflow(&self, v: &VertexId) -> W {
        self.flow
            .iter()
            .filter(|((u, _), _)| u == v)
            .fold(W::zero(), |acc, (_, f)| acc + *f)
    }

    /// Edges carrying positive flow, in ascending order of endpoints.
    pub fn flows(&self) -> Vec<(VertexId, VertexId, W)> {
        let mut res: Vec<_> = self
            .flow
            .iter()
            .filter(|(_, f)| **f > W::zero())
            .map(|((u, v), f)| (*u, *v, *f))
            .collect();
        res.sort_by_key(|(u, v, _)| (*u, *v));
        res
    }

    /// The minimum cut: `S` is what the source still reaches through the residual network
    /// of `graph`, which must be the graph this flow was computed on.
    ///
    /// Its capacity equals [MaxFlow::value].
    pub fn min_cut<G>(&self, graph: &G) -> MinCut<W>
    where
        G: WeightedQueryableGraph<Weight = W>,
    {
        let mut cut = MinCut {
            source_side: vec![],
            cut_edges: vec![],
            capacity: W::zero(),
        };
        let source = match (self.source, self.sink) {
            (Some(s), Some(t)) if s != t && graph.contains_vertex(&s) => s,
            _ => return cut,
        };
        let in_s = residual_bfs(graph, &source, |u, v| self.net_flow(u, v))
            .into_iter()
            .map(|reached| reached.is_some())
            .collect::<Vec<_>>();
        cut.source_side = (0..in_s.len())
            .filter(|i| in_s[*i])
            .map(VertexId::new)
            .collect();
        for (e, w) in graph.weighted_edges() {
            if in_s[e.source.to_raw()] && !in_s[e.sink.to_raw()] {
                cut.cut_edges.push((e.source, e.sink, w));
                cut.capacity = cut.capacity + w;
            }
        }
        cut
    }
}

/// Breadth-first search over edges of positive residual capacity.
///
/// Returns for each vertex `None` if unreached, or `Some(parent)`;
/// the start vertex is its own parent.
fn residual_bfs<G, F>(graph: &G, start: &VertexId, net_flow: F) -> Vec<Option<VertexId>>
where
    G: WeightedQueryableGraph,
    F: Fn(&VertexId, &VertexId) -> G::Weight,
{
    let zero = G::Weight::zero();
    let residual = |u: &VertexId, v: &VertexId| {
        graph.weight_between(u, v).unwrap_or(zero) - net_flow(u, v)
    };
    let mut parent = vec![None; graph.vertex_size()];
    parent[start.to_raw()] = Some(*start);
    let mut queue = VecDeque::from([*start]);
    while let Some(u) = queue.pop_front() {
        // reverse residual capacity may sit on a pair with only an in-edge
        let neighbors = graph
            .out_edges(&u)
            .map(|e| e.sink)
            .chain(graph.in_edges(&u).map(|e| e.source));
        for v in neighbors {
            if parent[v.to_raw()].is_none() && residual(&u, &v) > zero {
                parent[v.to_raw()] = Some(u);
                queue.push_back(v);
            }
        }
    }
    parent
}

pub trait EdmondsKarp
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Maximum flow by repeatedly augmenting along a shortest residual path,
    /// $O(\|V\| \|E\|^2)$.
    ///
    /// If `source` or `sink` is absent, or they are the same vertex,
    /// the flow is zero everywhere.
    fn max_flow(&self, source: &VertexId, sink: &VertexId) -> MaxFlow<Self::Weight> {
        if !self.contains_vertex(source) || !self.contains_vertex(sink) {
            debug!(?source, ?sink, "max_flow: source or sink absent");
            return MaxFlow::new(None, None);
        }
        let mut res = MaxFlow::new(Some(*source), Some(*sink));
        if source == sink {
            return res;
        }
        let mut rounds = 0usize;
        loop {
            let parent = residual_bfs(self, source, |u, v| res.net_flow(u, v));
            if parent[sink.to_raw()].is_none() {
                break;
            }
            let mut path = vec![];
            let mut v = *sink;
            while v != *source {
                match parent[v.to_raw()] {
                    Some(u) => {
                        path.push((u, v));
                        v = u;
                    }
                    None => break,
                }
            }
            let residual = |(u, v): &(VertexId, VertexId)| {
                self.weight_between(u, v).unwrap_or_else(Self::Weight::zero) - res.net_flow(u, v)
            };
            let bottleneck = path
                .iter()
                .map(residual)
                .reduce(|a, b| if b < a { b } else { a });
            let bottleneck = match bottleneck {
                Some(b) => b,
                None => break,
            };
            for (u, v) in path.iter().rev() {
                res.push(*u, *v, bottleneck);
            }
            res.value = res.value + bottleneck;
            rounds += 1;
            trace!(?bottleneck, len = path.len(), "max_flow: augmenting path");
        }
        debug!(value = ?res.value, augmentations = rounds, "max_flow");
        res
    }
}

impl<G: WeightedQueryableGraph> EdmondsKarp for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use quickcheck_macros::quickcheck;

    fn clrs_network() -> WeightedGraph<&'static str, i64> {
        WeightedGraph::from_edges(vec![
            ("s", "v1", 12),
            ("s", "v2", 14),
            ("v1", "v3", 10),
            ("v2", "v1", 5),
            ("v2", "v3", 11),
            ("v2", "v4", 6),
            ("v3", "v4", 5),
            ("v3", "t", 14),
            ("v4", "t", 11),
        ])
    }

    #[test]
    fn clrs() {
        let g = clrs_network();
        let id = |k| g.vertex_id(&k).unwrap();
        let flow = g.max_flow(&id("s"), &id("t"));
        // bounded by the cut ({s, v1}, rest): s -> v2 plus v1 -> v3
        assert_eq!(flow.value(), 24);
        assert_eq!(flow.net_outflow(&id("s")), 24);
        assert_eq!(flow.net_outflow(&id("t")), -24);
        for v in ["v1", "v2", "v3", "v4"] {
            assert_eq!(flow.net_outflow(&id(v)), 0);
        }
        let cut = flow.min_cut(&g);
        assert_eq!(cut.capacity, 24);
        assert_eq!(cut.source_side, vec![id("s"), id("v1")]);
        let mut cut_edges = cut.cut_edges.clone();
        cut_edges.sort();
        assert_eq!(
            cut_edges,
            vec![(id("s"), id("v2"), 14), (id("v1"), id("v3"), 10)]
        );
    }

    #[test]
    fn antiparallel_edges() {
        let g = WeightedGraph::from_edges(vec![
            ("s", "a", 4),
            ("s", "b", 2),
            ("a", "b", 3),
            ("b", "a", 3),
            ("a", "t", 1),
            ("b", "t", 5),
        ]);
        let id = |k| g.vertex_id(&k).unwrap();
        let flow = g.max_flow(&id("s"), &id("t"));
        assert_eq!(flow.value(), 6);
        assert_eq!(flow.net_flow(&id("a"), &id("b")), 3);
        assert_eq!(flow.edge_flow(&id("b"), &id("a")), 0);
        assert_eq!(flow.min_cut(&g).capacity, 6);
    }

    #[test]
    fn degenerate_endpoints() {
        let g = clrs_network();
        let s = g.vertex_id(&"s").unwrap();
        let absent = g.max_flow(&s, &VertexId(42));
        assert_eq!(absent.value(), 0);
        assert_eq!(absent.source(), None);
        assert!(absent.flows().is_empty());
        assert_eq!(absent.min_cut(&g).capacity, 0);
        let same = g.max_flow(&s, &s);
        assert_eq!(same.value(), 0);
        assert!(same.flows().is_empty());
        assert!(same.min_cut(&g).source_side.is_empty());
    }

    #[test]
    fn unreachable_sink() {
        let g = WeightedGraph::from_edges(vec![(0, 1, 5.0), (2, 1, 3.0)]);
        let flow = g.max_flow(&VertexId(0), &VertexId(2));
        assert_eq!(flow.value(), 0.0);
        let cut = flow.min_cut(&g);
        assert_eq!(cut.source_side, vec![VertexId(0), VertexId(1)]);
        assert!(cut.cut_edges.is_empty());
    }

    /// Max-flow min-cut duality, capacity constraints and conservation.
    #[quickcheck]
    fn flow_is_feasible_and_maximum(graph: NonNegativeGraph) {
        let g = graph.0;
        let s = VertexId(0);
        let t = VertexId(g.vertex_size() - 1);
        let flow = g.max_flow(&s, &t);
        assert_eq!(flow.min_cut(&g).capacity, flow.value());
        for (u, v, f) in flow.flows() {
            assert!(f <= g.weight_between(&u, &v).unwrap());
        }
        for v in g.iter_vertices() {
            if v == s && s != t {
                assert_eq!(flow.net_outflow(&v), flow.value());
            } else if v == t && s != t {
                assert_eq!(flow.net_outflow(&v), -flow.value());
            } else {
                assert_eq!(flow.net_outflow(&v), 0);
            }
        }
    }
}
