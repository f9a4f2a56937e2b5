use super::{Spanning, SpanningTree};
use crate::{collections::MinPriorityQueue, graph::*};
use num_traits::Zero;
use tracing::{debug, warn};

/// Prim's minimum spanning tree, grown from a single vertex.
///
/// Each round attaches the outside vertex of the cheapest edge leaving the tree
/// (ties to the smaller [VertexId]).
/// Both variants attach vertices in the same order and return identical trees.
///
/// On a disconnected graph the result is [Spanning::Partial]:
/// the minimum spanning tree of the start vertex's component only.
pub trait Prim
where
    Self: WeightedQueryableGraph + Sized,
{
    /// The array-scan variant started from `VertexId(0)`: $O(\|V\|^2)$.
    fn prim(&self) -> Spanning<Self::Weight> {
        self.prim_from(&VertexId::new(0))
    }

    /// The array-scan variant started from `start`.
    fn prim_from(&self, start: &VertexId) -> Spanning<Self::Weight> {
        let n = self.vertex_size();
        if !self.contains_vertex(start) {
            return absent_start(start, n);
        }
        let mut tree = SpanningTree::new();
        let mut key: Vec<Option<Self::Weight>> = vec![None; n];
        let mut parent: Vec<Option<VertexId>> = vec![None; n];
        let mut in_tree = vec![false; n];
        key[start.to_raw()] = Some(Self::Weight::zero());
        loop {
            let next = key
                .iter()
                .enumerate()
                .filter(|(i, _)| !in_tree[*i])
                .filter_map(|(i, k)| k.map(|k| (VertexId::new(i), k)))
                .min_by(|(_, a), (_, b)| TotalOrd(*a).cmp(&TotalOrd(*b)));
            let (u, w) = match next {
                Some(x) => x,
                None => break,
            };
            in_tree[u.to_raw()] = true;
            if let Some(p) = parent[u.to_raw()] {
                tree.push(p, u, w);
            }
            for (e, w) in self.weighted_out_edges(&u) {
                let v = e.sink.to_raw();
                if !in_tree[v] && improves(w, key[v]) {
                    key[v] = Some(w);
                    parent[v] = Some(u);
                }
            }
        }
        finish("prim", tree, n)
    }

    /// The heap-accelerated variant started from `VertexId(0)`:
    /// $O((\|V\|+\|E\|) \log \|V\|)$.
    fn prim_heap(&self) -> Spanning<Self::Weight> {
        self.prim_heap_from(&VertexId::new(0))
    }

    /// The heap-accelerated variant started from `start`.
    fn prim_heap_from(&self, start: &VertexId) -> Spanning<Self::Weight> {
        let n = self.vertex_size();
        if !self.contains_vertex(start) {
            return absent_start(start, n);
        }
        let mut tree = SpanningTree::new();
        let mut parent: Vec<Option<VertexId>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut queue = MinPriorityQueue::with_capacity(n);
        queue.push(*start, Self::Weight::zero());
        while let Some((u, w)) = queue.pop() {
            in_tree[u.to_raw()] = true;
            if let Some(p) = parent[u.to_raw()] {
                tree.push(p, u, w);
            }
            for (e, w) in self.weighted_out_edges(&u) {
                if !in_tree[e.sink.to_raw()] && queue.push(e.sink, w) {
                    parent[e.sink.to_raw()] = Some(u);
                }
            }
        }
        finish("prim_heap", tree, n)
    }
}

impl<G: WeightedQueryableGraph> Prim for G {}

fn absent_start<W: Weight>(start: &VertexId, vertex_size: usize) -> Spanning<W> {
    debug!(?start, "prim: start vertex absent");
    if vertex_size == 0 {
        Spanning::Complete(SpanningTree::new())
    } else {
        Spanning::Partial(SpanningTree::new())
    }
}

fn finish<W: Weight>(name: &str, tree: SpanningTree<W>, vertex_size: usize) -> Spanning<W> {
    let res = Spanning::classify(tree, vertex_size);
    if res.is_complete() {
        debug!(edges = res.tree().len(), "{}: spanning tree", name);
    } else {
        warn!(
            reached = res.tree().len() + 1,
            vertices = vertex_size,
            "{}: graph is disconnected",
            name
        );
    }
    res
}
