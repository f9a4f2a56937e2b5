//! Maximum matching in bipartite graphs by augmenting paths.
use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::{collections::HashMap, hash::Hash};
use tracing::debug;

/// A bipartite graph: left vertices `L`, right vertices `R`,
/// and edges only between a left vertex and a right vertex.
///
/// Both sides get dense ID's of their own, in insertion order.
#[derive(Clone)]
pub struct BipartiteGraph<L, R>
where
    L: Hash + Eq,
    R: Hash + Eq,
{
    left_keys: BiHashMap<VertexId, L, RandomState, RandomState>,
    right_keys: BiHashMap<VertexId, R, RandomState, RandomState>,
    left_vid_factory: VertexIdFactory,
    right_vid_factory: VertexIdFactory,
    adjacency: Vec<Vec<VertexId>>,
}

/// A set of edges of a [BipartiteGraph], no two of which share a vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching<L, R>
where
    L: Hash + Eq,
    R: Hash + Eq,
{
    right_to_left: HashMap<R, L, RandomState>,
    left_to_right: HashMap<L, R, RandomState>,
}

impl<L, R> Default for BipartiteGraph<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R> BipartiteGraph<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            left_keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            right_keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            left_vid_factory: VertexIdFactory::new(),
            right_vid_factory: VertexIdFactory::new(),
            adjacency: vec![],
        }
    }

    /// Builds from `{left: {right, ...}}`-shaped input.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (L, N)>,
        N: IntoIterator<Item = R>,
    {
        let mut res = Self::new();
        for (l, rights) in adjacency {
            res.add_left(l.clone());
            for r in rights {
                res.add_edge(l.clone(), r);
            }
        }
        res
    }

    /// Inserts a left vertex if it is absent and returns its ID either way.
    pub fn add_left(&mut self, key: L) -> VertexId {
        if let Some(vid) = self.left_keys.get_by_right(&key) {
            *vid
        } else {
            let vid = self.left_vid_factory.one_more();
            self.left_keys.insert(vid, key);
            self.adjacency.push(vec![]);
            vid
        }
    }

    /// Inserts a right vertex if it is absent and returns its ID either way.
    pub fn add_right(&mut self, key: R) -> VertexId {
        if let Some(vid) = self.right_keys.get_by_right(&key) {
            *vid
        } else {
            let vid = self.right_vid_factory.one_more();
            self.right_keys.insert(vid, key);
            vid
        }
    }

    /// Adds an edge between `left` and `right`, inserting missing endpoints.
    /// Duplicate edges are ignored.
    pub fn add_edge(&mut self, left: L, right: R) {
        let l = self.add_left(left);
        let r = self.add_right(right);
        let neighbors = &mut self.adjacency[l.to_raw()];
        if !neighbors.contains(&r) {
            neighbors.push(r);
        }
    }

    pub fn left_size(&self) -> usize {
        self.left_keys.len()
    }

    pub fn right_size(&self) -> usize {
        self.right_keys.len()
    }

    pub fn edge_size(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum()
    }

    pub fn contains_edge(&self, left: &L, right: &R) -> bool {
        match (
            self.left_keys.get_by_right(left),
            self.right_keys.get_by_right(right),
        ) {
            (Some(l), Some(r)) => self.adjacency[l.to_raw()].contains(r),
            _ => false,
        }
    }

    /// A maximum matching, $O(\|V\| \|E\|)$.
    ///
    /// Left vertices are tried in insertion order. Each try searches depth-first
    /// for an augmenting path, visiting every right vertex at most once:
    /// a free right vertex is taken directly, a matched one only if its partner
    /// can be moved to another right vertex.
    pub fn maximum_matching(&self) -> Matching<L, R> {
        let mut match_of_right: Vec<Option<VertexId>> = vec![None; self.right_size()];
        // the attempt that last visited each right vertex
        let mut visited_in: Vec<Option<usize>> = vec![None; self.right_size()];
        let mut matched = 0usize;
        for (attempt, root) in (0..self.left_size()).map(VertexId::new).enumerate() {
            if self.augment(root, attempt, &mut match_of_right, &mut visited_in) {
                matched += 1;
            }
        }
        debug!(
            matched,
            left = self.left_size(),
            right = self.right_size(),
            "maximum_matching"
        );

        let mut res = Matching {
            right_to_left: HashMap::with_capacity_and_hasher(matched, RandomState::new()),
            left_to_right: HashMap::with_capacity_and_hasher(matched, RandomState::new()),
        };
        for (r, l) in match_of_right.iter().enumerate() {
            let l = match l {
                Some(l) => l,
                None => continue,
            };
            let rk = self.right_keys.get_by_left(&VertexId::new(r));
            let lk = self.left_keys.get_by_left(l);
            if let (Some(rk), Some(lk)) = (rk, lk) {
                res.right_to_left.insert(rk.clone(), lk.clone());
                res.left_to_right.insert(lk.clone(), rk.clone());
            }
        }
        res
    }

    /// Searches for an augmenting path from the free left vertex `root`
    /// and flips it into the matching if found.
    fn augment(
        &self,
        root: VertexId,
        attempt: usize,
        match_of_right: &mut [Option<VertexId>],
        visited_in: &mut [Option<usize>],
    ) -> bool {
        // frames of (left vertex, index of its next neighbor to try)
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
        // via[i]: the right vertex leading from frame i to frame i + 1
        let mut via: Vec<VertexId> = vec![];
        loop {
            let (l, i) = match stack.last_mut() {
                Some(frame) => {
                    frame.1 += 1;
                    (frame.0, frame.1 - 1)
                }
                None => return false,
            };
            let r = match self.adjacency[l.to_raw()].get(i) {
                Some(r) => *r,
                None => {
                    stack.pop();
                    via.pop();
                    continue;
                }
            };
            if visited_in[r.to_raw()] == Some(attempt) {
                continue;
            }
            visited_in[r.to_raw()] = Some(attempt);
            via.push(r);
            match match_of_right[r.to_raw()] {
                Some(partner) => stack.push((partner, 0)),
                None => {
                    for ((l, _), r) in stack.iter().zip(via.iter()) {
                        match_of_right[r.to_raw()] = Some(*l);
                    }
                    return true;
                }
            }
        }
    }
}

impl<L, R> Matching<L, R>
where
    L: Hash + Eq,
    R: Hash + Eq,
{
    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.right_to_left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right_to_left.is_empty()
    }

    pub fn left_of(&self, right: &R) -> Option<&L> {
        self.right_to_left.get(right)
    }

    pub fn right_of(&self, left: &L) -> Option<&R> {
        self.left_to_right.get(left)
    }

    /// Matched pairs as `(left, right)`, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = (&L, &R)> + '_ {
        self.left_to_right.iter()
    }

    /// The right-to-left map.
    pub fn as_map(&self) -> &HashMap<R, L, RandomState> {
        &self.right_to_left
    }
}
