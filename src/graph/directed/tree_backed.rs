use crate::graph::*;
use std::collections::BTreeSet;

/// A directed graph backed by ordered sets of edges.
///
/// Vertices and edges are never removed, so both kinds of ID's stay dense.
/// Out-edges of a vertex are iterated in ascending order of their sinks,
/// which keeps every traversal over this graph deterministic.
///
/// |                    | Complexity                                                      |
/// | ------------------ | --------------------------------------------------------------- |
/// | `add_vertex`       | $O(1)$                                                          |
/// | `add_edge`         | $O(\log \|E\|)$                                                 |
/// | `vertex_size`      | $O(1)$                                                          |
/// | `iter_vertices`    | $O(1)$ on each call to `.next`.                                 |
/// | `contains_vertex`  | $O(1)$                                                          |
/// | `edge_size`        | $O(1)$                                                          |
/// | `find_edge`        | $O(1)$                                                          |
/// | `edges_connecting` | returns in $O(\log \|E\|)$.                                     |
/// | `in_edges`         | returns in $O(\log \|E\|)$. amortized $O(1)$ on each `.next`.   |
/// | `out_edges`        | returns in $O(\log \|E\|)$. amortized $O(1)$ on each `.next`.   |
#[derive(Clone)]
pub struct TreeBackedGraph {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    edges: Vec<(VertexId, VertexId)>,
    in_edges: BTreeSet<(VertexId, VertexId, EdgeId)>,
    out_edges: BTreeSet<(VertexId, VertexId, EdgeId)>,
}

impl Default for TreeBackedGraph {
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        for v in self.iter_vertices() {
            writeln!(f, "{:?}:", v)?;
            for e in self.out_edges(&v) {
                writeln!(f, "  -> {:?} by {:?}", e.sink, e.id)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            edges: vec![],
            in_edges: BTreeSet::new(),
            out_edges: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        self.vid_factory.one_more()
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        debug_assert!(self.contains_vertex(&source));
        debug_assert!(self.contains_vertex(&sink));
        let eid = self.eid_factory.one_more();
        debug_assert_eq!(eid.to_raw(), self.edges.len());
        self.edges.push((source, sink));
        self.in_edges.insert((sink, source, eid));
        self.out_edges.insert((source, sink, eid));
        eid
    }
}

impl QueryableGraph for TreeBackedGraph {
    fn vertex_size(&self) -> usize {
        self.vid_factory.issued()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self
            .edges
            .iter()
            .enumerate()
            .map(|(idx, (src, snk))| Edge {
                id: EdgeId::new(idx),
                source: *src,
                sink: *snk,
            });
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        e.to_raw() < self.edges.len()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edges.get(e.to_raw()).map(|(src, snk)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let start = (*v, VertexId::MIN, EdgeId::MIN);
        let end = (v.next(), VertexId::MIN, EdgeId::MIN);
        let it = self.in_edges.range(start..end).map(|(snk, src, e)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        });
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let start = (*v, VertexId::MIN, EdgeId::MIN);
        let end = (v.next(), VertexId::MIN, EdgeId::MIN);
        let it = self.out_edges.range(start..end).map(|(src, snk, e)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        });
        Box::new(it)
    }

    fn edges_connecting<'a, 'b>(
        &'a self,
        source: &'b VertexId,
        sink: &'b VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + 'a> {
        let source = *source;
        let sink = *sink;
        let start = (source, sink, EdgeId::MIN);
        let end = (source, sink, EdgeId::MAX);
        let it = self
            .out_edges
            .range(start..=end)
            .map(move |(_, _, eid)| Edge {
                id: *eid,
                source,
                sink,
            });
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense() {
        let mut g = TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let e0 = g.add_edge(v0, v1);
        let e1 = g.add_edge(v1, v1);
        assert_eq!((v0, v1), (VertexId(0), VertexId(1)));
        assert_eq!((e0, e1), (EdgeId(0), EdgeId(1)));
        assert_eq!(g.iter_vertices().collect::<Vec<_>>(), vec![v0, v1]);
        assert!(!g.contains_vertex(&VertexId(2)));
    }

    #[test]
    fn in_and_out_edges() {
        let mut g = TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        let e01 = g.add_edge(v0, v1);
        let e21 = g.add_edge(v2, v1);
        let e00 = g.add_edge(v0, v0);
        let outs: Vec<_> = g.out_edges(&v0).map(|e| e.id).collect();
        assert_eq!(outs, vec![e00, e01]);
        let ins: Vec<_> = g.in_edges(&v1).map(|e| e.source).collect();
        assert_eq!(ins, vec![v0, v2]);
        let connecting: Vec<_> = g.edges_connecting(&v2, &v1).map(|e| e.id).collect();
        assert_eq!(connecting, vec![e21]);
        assert!(g.find_edge(&e00).unwrap().is_self_loop());
    }
}
