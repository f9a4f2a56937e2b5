use crate::graph::*;
use petgraph::{
    graph::{Graph, IndexType},
    visit::EdgeRef,
    EdgeType,
};

impl<W> WeightedGraph<usize, W>
where
    W: Weight,
{
    /// Imports a `petgraph` graph, keyed by node indices.
    ///
    /// Undirected graphs become pairs of symmetric edges.
    /// Of parallel edges, the last one wins.
    pub fn from_petgraph<N, Ty, Ix>(graph: &Graph<N, W, Ty, Ix>) -> Self
    where
        Ty: EdgeType,
        Ix: IndexType,
    {
        let mut res = Self::new();
        for n in graph.node_indices() {
            res.add_vertex(n.index());
        }
        for e in graph.edge_references() {
            let source = e.source().index();
            let sink = e.target().index();
            if graph.is_directed() {
                res.add_edge(source, sink, *e.weight());
            } else {
                res.add_undirected_edge(source, sink, *e.weight());
            }
        }
        res
    }
}
