//! Depth-first search with discovery and finish timestamps.
//!
//! The search keeps an explicit stack of `(vertex, remaining out-edges)` frames,
//! so deep graphs cannot overflow the call stack.
use crate::graph::*;
use std::ops::ControlFlow;
use tracing::debug;

/// Visitation state of a vertex during depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Not discovered yet.
    White,
    /// Discovered and on the current search path.
    Gray,
    /// Finished: every out-edge has been explored.
    Black,
}

/// What the search reports to its visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// `vertex` turns gray; `parent` is `None` for the root of a search tree.
    Discover {
        vertex: VertexId,
        parent: Option<VertexId>,
    },
    /// `vertex` turns black.
    Finish(VertexId),
    /// An edge into a gray vertex, which proves a cycle.
    BackEdge(Edge),
}

/// Searches from each root in turn, skipping roots already discovered
/// and roots not in the graph.
///
/// Stops as soon as `visit` breaks, returning what it broke with.
pub(crate) fn walk<G, R, B, F>(graph: &G, roots: R, mut visit: F) -> ControlFlow<B>
where
    G: QueryableGraph,
    R: IntoIterator<Item = VertexId>,
    F: FnMut(Event) -> ControlFlow<B>,
{
    let mut color = vec![Color::White; graph.vertex_size()];
    let mut stack: Vec<(VertexId, Box<dyn Iterator<Item = Edge> + '_>)> = vec![];
    for root in roots {
        if color.get(root.to_raw()) != Some(&Color::White) {
            continue;
        }
        color[root.to_raw()] = Color::Gray;
        visit(Event::Discover {
            vertex: root,
            parent: None,
        })?;
        stack.push((root, graph.out_edges(&root)));
        loop {
            let (u, next) = match stack.last_mut() {
                Some((u, edges)) => (*u, edges.next()),
                None => break,
            };
            match next {
                Some(e) => match color[e.sink.to_raw()] {
                    Color::White => {
                        let v = e.sink;
                        color[v.to_raw()] = Color::Gray;
                        visit(Event::Discover {
                            vertex: v,
                            parent: Some(u),
                        })?;
                        stack.push((v, graph.out_edges(&v)));
                    }
                    Color::Gray => visit(Event::BackEdge(e))?,
                    Color::Black => {}
                },
                None => {
                    stack.pop();
                    color[u.to_raw()] = Color::Black;
                    visit(Event::Finish(u))?;
                }
            }
        }
    }
    ControlFlow::Continue(())
}

/// Vertices in increasing order of finish time, over a search of the whole graph.
pub(crate) fn finish_order<G: QueryableGraph>(graph: &G) -> Vec<VertexId> {
    let mut res = Vec::with_capacity(graph.vertex_size());
    let _ = walk::<_, _, (), _>(graph, graph.iter_vertices(), |ev| {
        if let Event::Finish(v) = ev {
            res.push(v);
        }
        ControlFlow::Continue(())
    });
    res
}

/// The depth-first forest: timestamps and tree edges.
///
/// Timestamps come from one counter running from 1 to $2\|V\|$,
/// so `discovery(v) < finish(v)` and the intervals of any two vertices
/// are either disjoint or nested.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsForest {
    discovery: Vec<Option<usize>>,
    finish: Vec<Option<usize>>,
    parent: Vec<Option<VertexId>>,
    finish_order: Vec<VertexId>,
}

impl DfsForest {
    pub fn discovery(&self, v: &VertexId) -> Option<usize> {
        self.discovery.get(v.to_raw()).copied().flatten()
    }

    pub fn finish(&self, v: &VertexId) -> Option<usize> {
        self.finish.get(v.to_raw()).copied().flatten()
    }

    /// The vertex that discovered `v`; `None` for roots and unvisited vertices.
    pub fn parent(&self, v: &VertexId) -> Option<VertexId> {
        self.parent.get(v.to_raw()).copied().flatten()
    }

    pub fn is_visited(&self, v: &VertexId) -> bool {
        self.discovery(v).is_some()
    }

    /// Visited vertices in increasing order of finish time.
    pub fn finish_order(&self) -> &[VertexId] {
        &self.finish_order
    }

    /// Roots of the search trees, in the order they were searched from.
    pub fn roots(&self) -> Vec<VertexId> {
        let mut res: Vec<_> = (0..self.discovery.len())
            .map(VertexId::new)
            .filter(|v| self.is_visited(v) && self.parent(v).is_none())
            .collect();
        res.sort_by_key(|v| self.discovery(v));
        res
    }
}

pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Searches the whole graph, restarting from each undiscovered vertex
    /// in ascending order of [VertexId].
    fn dfs(&self) -> DfsForest {
        self.dfs_from_roots(self.iter_vertices())
    }

    /// Searches only what is reachable from `start`.
    /// An absent `start` gives a forest with nothing visited.
    fn dfs_from(&self, start: &VertexId) -> DfsForest {
        self.dfs_from_roots(std::iter::once(*start))
    }

    /// Searches from each of `roots` in turn,
    /// skipping those already visited and those not in the graph.
    fn dfs_from_roots<R>(&self, roots: R) -> DfsForest
    where
        R: IntoIterator<Item = VertexId>,
    {
        let n = self.vertex_size();
        let mut res = DfsForest {
            discovery: vec![None; n],
            finish: vec![None; n],
            parent: vec![None; n],
            finish_order: Vec::with_capacity(n),
        };
        let mut time = 0usize;
        let _ = walk::<_, _, (), _>(self, roots, |ev| {
            match ev {
                Event::Discover { vertex, parent } => {
                    time += 1;
                    res.discovery[vertex.to_raw()] = Some(time);
                    res.parent[vertex.to_raw()] = parent;
                }
                Event::Finish(v) => {
                    time += 1;
                    res.finish[v.to_raw()] = Some(time);
                    res.finish_order.push(v);
                }
                Event::BackEdge(_) => {}
            }
            ControlFlow::Continue(())
        });
        debug!(visited = res.finish_order.len(), vertices = n, "dfs");
        res
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}
