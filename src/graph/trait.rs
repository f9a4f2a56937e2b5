use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

/// Read-only access to a directed graph.
///
/// Implementors must keep vertex ID's dense, i.e., `iter_vertices()` yields
/// exactly `VertexId(0)..VertexId(vertex_size())`.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;
    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
}

/// A queryable graph whose edges carry weights (or capacities).
pub trait WeightedQueryableGraph: QueryableGraph {
    type Weight: Weight;

    fn edge_weight(&self, e: &EdgeId) -> Option<Self::Weight>;

    /// Out-edges of `v` together with their weights.
    fn weighted_out_edges(
        &self,
        v: &VertexId,
    ) -> Box<dyn Iterator<Item = (Edge, Self::Weight)> + '_> {
        let it = self
            .out_edges(v)
            .filter_map(move |e| self.edge_weight(&e.id).map(|w| (e, w)));
        Box::new(it)
    }

    /// All edges together with their weights.
    fn weighted_edges(&self) -> Box<dyn Iterator<Item = (Edge, Self::Weight)> + '_> {
        let it = self
            .iter_edges()
            .filter_map(move |e| self.edge_weight(&e.id).map(|w| (e, w)));
        Box::new(it)
    }

    /// Weight of the edge `source -> sink`, if there is one.
    fn weight_between(&self, source: &VertexId, sink: &VertexId) -> Option<Self::Weight> {
        self.edges_connecting(source, sink)
            .find_map(|e| self.edge_weight(&e.id))
    }
}
