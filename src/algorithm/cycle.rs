use super::dfs::{walk, Event};
use crate::graph::*;
use std::ops::ControlFlow;
use tracing::debug;

/// Directed cycle detection by three-color depth-first search.
///
/// A cycle exists iff the search meets an edge into a gray vertex.
/// Self-loops count as cycles.
pub trait CycleDetection
where
    Self: QueryableGraph + Sized,
{
    fn has_cycle(&self) -> bool {
        walk(self, self.iter_vertices(), |ev| match ev {
            Event::BackEdge(_) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        })
        .is_break()
    }

    /// Some directed cycle, as its vertices in order:
    /// each has an edge to the next, and the last has an edge to the first.
    fn find_cycle(&self) -> Option<Vec<VertexId>> {
        let mut parent = vec![None; self.vertex_size()];
        let back_edge = walk(self, self.iter_vertices(), |ev| match ev {
            Event::Discover { vertex, parent: p } => {
                parent[vertex.to_raw()] = p;
                ControlFlow::Continue(())
            }
            Event::BackEdge(e) => ControlFlow::Break(e),
            Event::Finish(_) => ControlFlow::Continue(()),
        });
        let e = match back_edge {
            ControlFlow::Break(e) => e,
            ControlFlow::Continue(()) => return None,
        };
        // the sink is gray, hence an ancestor of the source in the search tree
        let mut res = vec![e.source];
        let mut cur = e.source;
        while cur != e.sink {
            cur = parent[cur.to_raw()]?;
            res.push(cur);
        }
        res.reverse();
        debug!(len = res.len(), "find_cycle");
        Some(res)
    }
}

impl<G: QueryableGraph> CycleDetection for G {}
