//! `WeightedGraph`: keyed vertices and weighted edges over a low-level directed graph.
use crate::graph::{directed::TreeBackedGraph, *};
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A directed graph whose vertices are identified by user keys
/// and whose edges carry weights.
///
/// * `K`: keys for vertices, e.g. integers or strings.
///   There is a 1-1 mapping between keys and vertex ID's.
/// * `W`: edge weights (or capacities, for flow networks).
///
/// There is at most one edge for each ordered pair of vertices:
/// adding an edge that already exists overwrites its weight.
/// Undirected graphs are modelled by a pair of symmetric edges of equal weight,
/// see [WeightedGraph::add_undirected_edge].
/// Self-loops are allowed.
#[derive(Clone)]
pub struct WeightedGraph<K, W>
where
    K: Hash + Eq,
{
    lower_graph: TreeBackedGraph,
    vertex_keys: BiHashMap<VertexId, K, RandomState, RandomState>,
    edge_weights: Vec<W>,
}

impl<K, W> Default for WeightedGraph<K, W>
where
    K: Hash + Eq + Clone,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> WeightedGraph<K, W>
where
    K: Hash + Eq + Clone,
    W: Weight,
{
    pub fn new() -> Self {
        Self {
            lower_graph: TreeBackedGraph::new(),
            vertex_keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            edge_weights: vec![],
        }
    }

    /// Builds a directed graph from an adjacency mapping,
    /// i.e., `{vertex: {neighbor: weight}}`.
    ///
    /// Neighbors which never appear as keys of the outer mapping
    /// still become vertices.
    /// Vertex ID's follow the order in which keys are first seen.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = (K, W)>,
    {
        let mut res = Self::new();
        for (source, neighbors) in adjacency {
            res.add_vertex(source.clone());
            for (sink, weight) in neighbors {
                res.add_edge(source.clone(), sink, weight);
            }
        }
        res
    }

    /// Builds a directed graph from `(source, sink, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        let mut res = Self::new();
        for (source, sink, weight) in edges {
            res.add_edge(source, sink, weight);
        }
        res
    }

    /// Builds an undirected graph from `(u, v, weight)` triples.
    pub fn undirected_from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        let mut res = Self::new();
        for (u, v, weight) in edges {
            res.add_undirected_edge(u, v, weight);
        }
        res
    }

    /// Inserts a vertex if it is absent and returns its ID either way.
    pub fn add_vertex(&mut self, key: K) -> VertexId {
        if let Some(vid) = self.vertex_keys.get_by_right(&key) {
            *vid
        } else {
            let vid = self.lower_graph.add_vertex();
            self.vertex_keys.insert(vid, key);
            vid
        }
    }

    /// Adds `source -> sink` with `weight`, inserting missing endpoints.
    ///
    /// If the edge exists already, its weight is overwritten and its ID is returned.
    pub fn add_edge(&mut self, source: K, sink: K, weight: W) -> EdgeId {
        let src = self.add_vertex(source);
        let snk = self.add_vertex(sink);
        let existing = self.lower_graph.edges_connecting(&src, &snk).next();
        if let Some(e) = existing {
            self.edge_weights[e.id.to_raw()] = weight;
            e.id
        } else {
            let eid = self.lower_graph.add_edge(src, snk);
            self.edge_weights.push(weight);
            eid
        }
    }

    /// Builds a directed graph from a dense matrix,
    /// where `matrix[i][j]` is the weight of `keys[i] -> keys[j]`, or `None` for no edge.
    ///
    /// Rows and columns beyond `keys` are ignored.
    pub fn from_adjacency_matrix<R>(keys: Vec<K>, matrix: Vec<R>) -> Self
    where
        R: IntoIterator<Item = Option<W>>,
    {
        let mut res = Self::new();
        for k in keys.iter() {
            res.add_vertex(k.clone());
        }
        for (source, row) in keys.iter().zip(matrix) {
            for (sink, weight) in keys.iter().zip(row) {
                if let Some(w) = weight {
                    res.add_edge(source.clone(), sink.clone(), w);
                }
            }
        }
        res
    }

    /// Adds `u -> v` and `v -> u`, both with `weight`.
    ///
    /// A self-loop is added only once, so both returned ID's are equal then.
    pub fn add_undirected_edge(&mut self, u: K, v: K, weight: W) -> (EdgeId, EdgeId) {
        let forward = self.add_edge(u.clone(), v.clone(), weight);
        let backward = self.add_edge(v, u, weight);
        (forward, backward)
    }

    /// Adds an unweighted edge, i.e., one of weight 1.
    pub fn add_arc(&mut self, source: K, sink: K) -> EdgeId
    where
        W: num_traits::One,
    {
        self.add_edge(source, sink, W::one())
    }
}

impl<K, W> WeightedGraph<K, W>
where
    K: Hash + Eq,
{
    pub fn lower_graph(&self) -> &TreeBackedGraph {
        &self.lower_graph
    }

    pub fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.vertex_keys.get_by_right(key).copied()
    }

    pub fn key(&self, vid: &VertexId) -> Option<&K> {
        self.vertex_keys.get_by_left(vid)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.vertex_keys.contains_right(key)
    }

    /// Translates a sequence of vertex ID's, e.g. a path, into keys.
    pub fn keys_of<'b, I>(&self, vids: I) -> Vec<&K>
    where
        I: IntoIterator<Item = &'b VertexId>,
    {
        vids.into_iter().filter_map(|v| self.key(v)).collect()
    }

    /// The dense weight matrix, indexed by [VertexId::to_raw]:
    /// entry `[u][v]` is the weight of `u -> v`, or `None` for no edge.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<W>>>
    where
        W: Copy,
    {
        let n = self.lower_graph.vertex_size();
        let mut res = vec![vec![None; n]; n];
        for e in self.lower_graph.iter_edges() {
            res[e.source.to_raw()][e.sink.to_raw()] = Some(self.edge_weights[e.id.to_raw()]);
        }
        res
    }

    /// Whether every edge `u -> v` is matched by `v -> u` of the same weight,
    /// i.e., whether this graph models an undirected one.
    pub fn is_symmetric(&self) -> bool
    where
        W: PartialEq,
    {
        self.lower_graph.iter_edges().all(|e| {
            let w = &self.edge_weights[e.id.to_raw()];
            self.lower_graph
                .edges_connecting(&e.sink, &e.source)
                .any(|back| self.edge_weights[back.id.to_raw()] == *w)
        })
    }
}

impl<K, W> QueryableGraph for WeightedGraph<K, W>
where
    K: Hash + Eq,
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
        self.lower_graph.iter_edges()
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.lower_graph.contains_edge(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.lower_graph.find_edge(e)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.edges_connecting(source, sink)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.in_edges(v)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.out_edges(v)
    }
}

impl<K, W> WeightedQueryableGraph for WeightedGraph<K, W>
where
    K: Hash + Eq,
    W: Weight,
{
    type Weight = W;

    fn edge_weight(&self, e: &EdgeId) -> Option<W> {
        self.edge_weights.get(e.to_raw()).copied()
    }
}

impl<K, W> std::fmt::Debug for WeightedGraph<K, W>
where
    K: Hash + Eq + std::fmt::Debug,
    W: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WeightedGraph {{")?;
        for v in self.lower_graph.iter_vertices() {
            if let Some(k) = self.key(&v) {
                writeln!(f, "  {:?}:", k)?;
            }
            for e in self.lower_graph.out_edges(&v) {
                if let Some(k) = self.key(&e.sink) {
                    writeln!(f, "    -> {:?} ({:?})", k, self.edge_weights[e.id.to_raw()])?;
                }
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_only_vertices_join_the_universe() {
        let g = WeightedGraph::from_adjacency(vec![("a", vec![("b", 1), ("c", 2)])]);
        assert_eq!(g.vertex_size(), 3);
        assert!(g.contains_key(&"c"));
        let c = g.vertex_id(&"c").unwrap();
        assert_eq!(g.out_edges(&c).count(), 0);
        assert_eq!(g.in_edges(&c).count(), 1);
    }

    #[test]
    fn readding_an_edge_overwrites_its_weight() {
        let mut g = WeightedGraph::new();
        let e0 = g.add_edge("a", "b", 5);
        let e1 = g.add_edge("a", "b", 3);
        assert_eq!(e0, e1);
        assert_eq!(g.edge_size(), 1);
        let a = g.vertex_id(&"a").unwrap();
        let b = g.vertex_id(&"b").unwrap();
        assert_eq!(g.weight_between(&a, &b), Some(3));
        assert_eq!(g.weight_between(&b, &a), None);
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut g = WeightedGraph::new();
        let (e0, e1) = g.add_undirected_edge(1, 2, 7.5);
        assert_ne!(e0, e1);
        let (l0, l1) = g.add_undirected_edge(3, 3, 1.0);
        assert_eq!(l0, l1);
        assert_eq!(g.edge_size(), 3);
        assert!(g.is_symmetric());
        g.add_edge(2, 3, 1.0);
        assert!(!g.is_symmetric());
    }

    #[test]
    fn unweighted_arcs_weigh_one() {
        let mut g: WeightedGraph<char, i32> = WeightedGraph::new();
        let e = g.add_arc('x', 'y');
        assert_eq!(g.edge_weight(&e), Some(1));
    }

    #[test]
    fn dense_matrix_in_and_out() {
        let g = WeightedGraph::from_adjacency(vec![
            ("a", vec![("b", 4), ("a", -1)]),
            ("c", vec![("a", 2)]),
        ]);
        // ID's in first-seen order: a, b, c
        assert_eq!(
            g.adjacency_matrix(),
            vec![
                vec![Some(-1), Some(4), None],
                vec![None, None, None],
                vec![Some(2), None, None],
            ]
        );

        let h = WeightedGraph::from_adjacency_matrix(vec!["a", "b", "c"], g.adjacency_matrix());
        assert_eq!(h.adjacency_matrix(), g.adjacency_matrix());
        assert_eq!(h.keys_of(&[VertexId(0), VertexId(1), VertexId(2)]), vec![&"a", &"b", &"c"]);

        let isolated =
            WeightedGraph::from_adjacency_matrix(vec!['x', 'y'], vec![Vec::<Option<f64>>::new()]);
        assert_eq!(isolated.vertex_size(), 2);
        assert_eq!(isolated.edge_size(), 0);
        assert!(WeightedGraph::<u8, i32>::new().adjacency_matrix().is_empty());
    }

    #[test]
    fn keys_of_a_path() {
        let g = WeightedGraph::from_edges(vec![("s", "t", 1), ("t", "u", 1)]);
        let path: Vec<_> = ["s", "t", "u"]
            .iter()
            .map(|k| g.vertex_id(k).unwrap())
            .collect();
        assert_eq!(g.keys_of(&path), vec![&"s", &"t", &"u"]);
    }
}
