//! Minimum spanning trees of undirected graphs.
//!
//! An undirected graph is a [WeightedGraph] whose edges come in symmetric pairs,
//! see [WeightedGraph::add_undirected_edge].
//! Feeding a non-symmetric graph is not checked:
//! Prim follows out-edges only while Kruskal ignores directions.
mod kruskal;
pub use self::kruskal::*;
mod prim;
pub use self::prim::*;

use crate::graph::*;

/// Edges of a spanning tree (or forest) and their total weight.
///
/// Each edge is `(parent, child, weight)`; for Kruskal, `parent` is simply
/// the endpoint with the smaller ID.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree<W> {
    edges: Vec<(VertexId, VertexId, W)>,
    total_weight: W,
}

impl<W> SpanningTree<W>
where
    W: Weight,
{
    pub(crate) fn new() -> Self {
        Self {
            edges: vec![],
            total_weight: W::zero(),
        }
    }

    pub(crate) fn push(&mut self, parent: VertexId, child: VertexId, weight: W) {
        self.edges.push((parent, child, weight));
        self.total_weight = self.total_weight + weight;
    }

    /// Edges in the order they joined the tree.
    pub fn edges(&self) -> &[(VertexId, VertexId, W)] {
        &self.edges
    }

    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether `u` and `v` are joined by a tree edge, in either direction.
    pub fn contains(&self, u: &VertexId, v: &VertexId) -> bool {
        self.edges
            .iter()
            .any(|(a, b, _)| (a == u && b == v) || (a == v && b == u))
    }
}

/// Outcome of a spanning-tree computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spanning<W> {
    /// The tree spans every vertex.
    Complete(SpanningTree<W>),
    /// The graph is disconnected.
    /// Prim returns the tree over the start vertex's component,
    /// Kruskal the minimum spanning forest.
    Partial(SpanningTree<W>),
}

impl<W> Spanning<W>
where
    W: Weight,
{
    /// `Complete` iff the tree has the $\|V\| - 1$ edges of a spanning tree.
    pub(crate) fn classify(tree: SpanningTree<W>, vertex_size: usize) -> Self {
        if tree.len() + 1 >= vertex_size {
            Spanning::Complete(tree)
        } else {
            Spanning::Partial(tree)
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Spanning::Complete(_))
    }

    pub fn tree(&self) -> &SpanningTree<W> {
        match self {
            Spanning::Complete(t) | Spanning::Partial(t) => t,
        }
    }

    pub fn into_tree(self) -> SpanningTree<W> {
        match self {
            Spanning::Complete(t) | Spanning::Partial(t) => t,
        }
    }

    pub fn total_weight(&self) -> W {
        self.tree().total_weight()
    }
}
