use crate::graph::VertexId;

/// Disjoint-set forest over vertex ID's, with path compression and union by rank.
///
/// Every vertex starts as the root of its own singleton set.
/// `find` always ends at a self-parented root; compression only shortens
/// ancestor chains and never changes which set a vertex belongs to.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Singleton sets for `VertexId(0)..VertexId(n)`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(VertexId::new).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        while self.parent[root.to_raw()] != root {
            root = self.parent[root.to_raw()];
        }
        // second pass: point the whole chain at the root
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur.to_raw()];
            self.parent[cur.to_raw()] = root;
            cur = next;
        }
        root
    }

    pub fn same_set(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the sets of `x` and `y`.
    /// Returns `false` if they were in one set already.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        let (kx, ky) = (self.rank[rx.to_raw()], self.rank[ry.to_raw()]);
        if kx < ky {
            self.parent[rx.to_raw()] = ry;
        } else if kx > ky {
            self.parent[ry.to_raw()] = rx;
        } else {
            self.parent[ry.to_raw()] = rx;
            self.rank[rx.to_raw()] += 1;
        }
        self.sets -= 1;
        true
    }
}
