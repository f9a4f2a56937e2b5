use crate::{error::*, graph::*};
use num_traits::Zero;
use tracing::{debug, warn};

/// Shortest distances between every pair of vertices,
/// plus what is needed to reconstruct the paths.
///
/// Rows and columns are indexed by [VertexId::to_raw],
/// i.e., in the stable insertion order of vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllPairsShortestPaths<W> {
    vertex_size: usize,
    distances: Vec<Option<W>>,
    intermediates: Vec<Option<VertexId>>,
}

impl<W> AllPairsShortestPaths<W>
where
    W: Weight,
{
    fn idx(&self, u: &VertexId, v: &VertexId) -> Option<usize> {
        let (u, v) = (u.to_raw(), v.to_raw());
        if u < self.vertex_size && v < self.vertex_size {
            Some(u * self.vertex_size + v)
        } else {
            None
        }
    }

    pub fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    /// Shortest distance from `u` to `v`, `None` if `v` is unreachable from `u`.
    pub fn distance(&self, u: &VertexId, v: &VertexId) -> Option<W> {
        self.idx(u, v).and_then(|i| self.distances[i])
    }

    /// Distances from `u` to every vertex, `None` if `u` is not in the graph.
    pub fn row(&self, u: &VertexId) -> Option<&[Option<W>]> {
        let start = self.idx(u, &VertexId::new(0))?;
        Some(&self.distances[start..start + self.vertex_size])
    }

    /// The distance matrix, one row per vertex.
    pub fn matrix(&self) -> Vec<&[Option<W>]> {
        self.distances.chunks(self.vertex_size.max(1)).collect()
    }

    /// The shortest path from `u` to `v`, both ends included.
    ///
    /// A pair is split at its recorded intermediate vertex until no intermediate is recorded,
    /// which stands for the direct edge.
    pub fn path(&self, u: &VertexId, v: &VertexId) -> Option<Vec<VertexId>> {
        self.distance(u, v)?;
        let mut path = vec![*u];
        if u == v {
            return Some(path);
        }
        let mut pending = vec![(*u, *v)];
        while let Some((i, j)) = pending.pop() {
            let k = self.idx(&i, &j).and_then(|x| self.intermediates[x]);
            match k {
                Some(k) => {
                    pending.push((k, j));
                    pending.push((i, k));
                }
                None => path.push(j),
            }
        }
        Some(path)
    }
}

pub trait FloydWarshall
where
    Self: WeightedQueryableGraph + Sized,
{
    /// All-pairs shortest paths by dynamic programming over intermediate vertices,
    /// $O(\|V\|^3)$.
    ///
    /// Negative weights are fine, but if any vertex ends up with a negative distance to itself,
    /// it lies on a negative-weight cycle and [Error::NegativeCycle] is returned.
    fn floyd_warshall(&self) -> Result<AllPairsShortestPaths<Self::Weight>> {
        let n = self.vertex_size();
        debug!(vertices = n, edges = self.edge_size(), "floyd-warshall");
        let mut d: Vec<Option<Self::Weight>> = vec![None; n * n];
        let mut via: Vec<Option<VertexId>> = vec![None; n * n];
        for i in 0..n {
            d[i * n + i] = Some(Self::Weight::zero());
        }
        for (e, w) in self.weighted_edges() {
            let x = e.source.to_raw() * n + e.sink.to_raw();
            // a non-negative self-loop never beats staying put
            if improves(w, d[x]) {
                d[x] = Some(w);
            }
        }
        // layer k admits the first k + 1 vertices as intermediates
        for k in 0..n {
            for i in 0..n {
                let dik = match d[i * n + k] {
                    Some(x) => x,
                    None => continue,
                };
                for j in 0..n {
                    if let Some(dkj) = d[k * n + j] {
                        let x = i * n + j;
                        if improves(dik + dkj, d[x]) {
                            d[x] = Some(dik + dkj);
                            via[x] = Some(VertexId::new(k));
                        }
                    }
                }
            }
        }
        for i in 0..n {
            if let Some(dii) = d[i * n + i] {
                if dii < Self::Weight::zero() {
                    let vertex = VertexId::new(i);
                    warn!(?vertex, "floyd-warshall: negative-weight cycle");
                    return Err(Error::NegativeCycle { vertex });
                }
            }
        }
        Ok(AllPairsShortestPaths {
            vertex_size: n,
            distances: d,
            intermediates: via,
        })
    }
}

impl<G: WeightedQueryableGraph> FloydWarshall for G {}
