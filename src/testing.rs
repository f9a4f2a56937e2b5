//! Random graphs for property tests.
use crate::graph::*;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use quickcheck::{Arbitrary, Gen};
use rs_quickcheck_util::*;
use std::hash::Hash;

const MAX_VERTICES: usize = 12;

fn gen_vertex_size(g: &mut Gen) -> usize {
    let n = gen_bytes(g, b"abcd.", b'.', 0..).iter().count();
    n % MAX_VERTICES + 1
}

fn gen_weight(g: &mut Gen, lo: i64, hi: i64) -> i64 {
    lo + (u32::arbitrary(g) as i64) % (hi - lo + 1)
}

fn gen_edges(g: &mut Gen, n: usize, lo: i64, hi: i64) -> Vec<(usize, usize, i64)> {
    let m = usize::arbitrary(g) % (n * n + 1);
    (0..m)
        .map(|_| {
            let u = usize::arbitrary(g) % n;
            let v = usize::arbitrary(g) % n;
            (u, v, gen_weight(g, lo, hi))
        })
        .collect()
}

fn with_all_vertices(n: usize) -> WeightedGraph<usize, i64> {
    let mut res = WeightedGraph::new();
    for v in 0..n {
        res.add_vertex(v);
    }
    res
}

/// Directed graph of weights in `0..=20`. Vertex `k` has key `k`.
#[derive(Clone, Debug)]
pub struct NonNegativeGraph(pub WeightedGraph<usize, i64>);

impl Arbitrary for NonNegativeGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = gen_vertex_size(g);
        let mut res = with_all_vertices(n);
        for (u, v, w) in gen_edges(g, n, 0, 20) {
            res.add_edge(u, v, w);
        }
        Self(res)
    }
}

/// Directed graph of weights in `-4..=20`, possibly with negative cycles.
#[derive(Clone, Debug)]
pub struct SignedGraph(pub WeightedGraph<usize, i64>);

impl Arbitrary for SignedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = gen_vertex_size(g);
        let mut res = with_all_vertices(n);
        for (u, v, w) in gen_edges(g, n, -4, 20) {
            res.add_edge(u, v, w);
        }
        Self(res)
    }
}

/// Undirected graph of weights in `1..=20`, possibly disconnected.
#[derive(Clone, Debug)]
pub struct UndirectedGraph(pub WeightedGraph<usize, i64>);

impl Arbitrary for UndirectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = gen_vertex_size(g);
        let mut res = with_all_vertices(n);
        for (u, v, w) in gen_edges(g, n, 1, 20) {
            res.add_undirected_edge(u, v, w);
        }
        Self(res)
    }
}

/// Connected undirected graph of weights in `1..=20`:
/// a random spanning path plus random extra edges.
#[derive(Clone, Debug)]
pub struct ConnectedGraph(pub WeightedGraph<usize, i64>);

impl Arbitrary for ConnectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = gen_vertex_size(g);
        let mut res = with_all_vertices(n);
        for v in 1..n {
            let u = usize::arbitrary(g) % v;
            let w = gen_weight(g, 1, 20);
            res.add_undirected_edge(u, v, w);
        }
        for (u, v, w) in gen_edges(g, n, 1, 20) {
            res.add_undirected_edge(u, v, w);
        }
        Self(res)
    }
}

/// Directed acyclic graph: every edge goes from a smaller key to a larger one.
#[derive(Clone, Debug)]
pub struct Dag(pub WeightedGraph<usize, i64>);

impl Arbitrary for Dag {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = gen_vertex_size(g);
        let mut res = with_all_vertices(n);
        for (u, v, w) in gen_edges(g, n, 1, 1) {
            if u < v {
                res.add_edge(u, v, w);
            } else if v < u {
                res.add_edge(v, u, w);
            }
        }
        Self(res)
    }
}

/// Directed graph with a cycle: a random graph plus a planted directed cycle.
#[derive(Clone, Debug)]
pub struct CyclicGraph(pub WeightedGraph<usize, i64>);

impl Arbitrary for CyclicGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = gen_vertex_size(g);
        let mut res = with_all_vertices(n);
        for (u, v, w) in gen_edges(g, n, 1, 1) {
            res.add_edge(u, v, w);
        }
        let len = usize::arbitrary(g) % n + 1;
        for i in 0..len {
            res.add_edge(i, (i + 1) % len, 1);
        }
        Self(res)
    }
}

/// Copies a graph into petgraph, with `NodeIndex::new(k)` for `VertexId(k)`.
pub fn to_petgraph<K, W, T, F>(g: &WeightedGraph<K, W>, mut f: F) -> DiGraph<(), T>
where
    K: Hash + Eq,
    W: Weight,
    F: FnMut(&W) -> T,
{
    let mut res = DiGraph::with_capacity(g.vertex_size(), g.edge_size());
    for _ in g.iter_vertices() {
        res.add_node(());
    }
    for (e, w) in g.weighted_edges() {
        res.add_edge(
            NodeIndex::new(e.source.to_raw()),
            NodeIndex::new(e.sink.to_raw()),
            f(&w),
        );
    }
    res
}

/// Copies a symmetric graph into an undirected petgraph, one edge per symmetric pair.
pub fn to_petgraph_undirected<K, W>(g: &WeightedGraph<K, W>) -> UnGraph<(), W>
where
    K: Hash + Eq,
    W: Weight,
{
    let mut res = UnGraph::with_capacity(g.vertex_size(), g.edge_size());
    for _ in g.iter_vertices() {
        res.add_node(());
    }
    for (e, w) in g.weighted_edges() {
        if e.source <= e.sink {
            res.add_edge(
                NodeIndex::new(e.source.to_raw()),
                NodeIndex::new(e.sink.to_raw()),
                w,
            );
        }
    }
    res
}
