use crate::graph::*;

/// A read-only view of a graph with every edge reversed.
///
/// Edge ID's are kept, so weights of the underlying graph are still available.
pub struct Transposed<'a, G> {
    lower_graph: &'a G,
}

impl<'a, G> Transposed<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(lower_graph: &'a G) -> Self {
        Self { lower_graph }
    }
}

impl<'a, G> QueryableGraph for Transposed<'a, G>
where
    G: QueryableGraph,
{
    fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.lower_graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.lower_graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.lower_graph.iter_edges().map(|e| e.reversed()))
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.lower_graph.contains_edge(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.lower_graph.find_edge(e).map(|e| e.reversed())
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self
            .lower_graph
            .edges_connecting(sink, source)
            .map(|e| e.reversed());
        Box::new(it)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.lower_graph.out_edges(v).map(|e| e.reversed()))
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.lower_graph.in_edges(v).map(|e| e.reversed()))
    }
}

impl<'a, G> WeightedQueryableGraph for Transposed<'a, G>
where
    G: WeightedQueryableGraph,
{
    type Weight = G::Weight;

    fn edge_weight(&self, e: &EdgeId) -> Option<Self::Weight> {
        self.lower_graph.edge_weight(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_reversed() {
        let g = WeightedGraph::from_edges(vec![("a", "b", 2), ("c", "b", 3)]);
        let a = g.vertex_id(&"a").unwrap();
        let b = g.vertex_id(&"b").unwrap();
        let c = g.vertex_id(&"c").unwrap();
        let t = Transposed::new(&g);
        let outs: Vec<_> = t.weighted_out_edges(&b).map(|(e, w)| (e.sink, w)).collect();
        assert_eq!(outs, vec![(a, 2), (c, 3)]);
        assert_eq!(t.out_edges(&a).count(), 0);
        assert_eq!(t.weight_between(&b, &c), Some(3));
    }
}
