use super::dfs::{finish_order, walk, Event};
use crate::graph::*;
use std::ops::ControlFlow;
use tracing::debug;

/// A partition of vertices into strongly connected components.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StronglyConnectedComponents {
    components: Vec<Vec<VertexId>>,
    component_of: Vec<usize>,
}

impl StronglyConnectedComponents {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in topological order of the condensation:
    /// edges between components only go from earlier ones to later ones.
    pub fn components(&self) -> &[Vec<VertexId>] {
        &self.components
    }

    /// Index of the component `v` belongs to.
    pub fn component_of(&self, v: &VertexId) -> Option<usize> {
        self.component_of.get(v.to_raw()).copied()
    }

    pub fn same_component(&self, u: &VertexId, v: &VertexId) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn into_components(self) -> Vec<Vec<VertexId>> {
        self.components
    }
}

pub trait Kosaraju
where
    Self: QueryableGraph + Sized,
{
    /// Kosaraju's algorithm, $O(\|V\|+\|E\|)$.
    ///
    /// The first search records finish times on the graph;
    /// the second searches the transposed graph, taking roots in decreasing finish time.
    /// Each tree of the second search is one component.
    fn strongly_connected_components(&self) -> StronglyConnectedComponents {
        let mut roots = finish_order(self);
        roots.reverse();
        let mut components: Vec<Vec<VertexId>> = vec![];
        let mut component_of = vec![0; self.vertex_size()];
        let transposed = Transposed::new(self);
        let _ = walk::<_, _, (), _>(&transposed, roots, |ev| {
            if let Event::Discover { vertex, parent } = ev {
                if parent.is_none() {
                    components.push(vec![]);
                }
                if let Some(c) = components.last_mut() {
                    c.push(vertex);
                }
                component_of[vertex.to_raw()] = components.len() - 1;
            }
            ControlFlow::Continue(())
        });
        debug!(
            components = components.len(),
            vertices = self.vertex_size(),
            "kosaraju"
        );
        StronglyConnectedComponents {
            components,
            component_of,
        }
    }
}

impl<G: QueryableGraph> Kosaraju for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    /// The graph of CLRS figure 22.9.
    #[test]
    fn clrs() {
        let mut g: WeightedGraph<char, i32> = WeightedGraph::new();
        for (u, v) in [
            ('a', 'b'),
            ('b', 'c'),
            ('b', 'e'),
            ('b', 'f'),
            ('c', 'd'),
            ('c', 'g'),
            ('d', 'c'),
            ('d', 'h'),
            ('e', 'a'),
            ('e', 'f'),
            ('f', 'g'),
            ('g', 'f'),
            ('g', 'h'),
            ('h', 'h'),
        ] {
            g.add_arc(u, v);
        }
        let scc = g.strongly_connected_components();
        let mut trial: Vec<BTreeSet<char>> = scc
            .components()
            .iter()
            .map(|c| g.keys_of(c).into_iter().copied().collect())
            .collect();
        trial.sort();
        let expected: Vec<BTreeSet<char>> = vec![
            "abe".chars().collect(),
            "cd".chars().collect(),
            "fg".chars().collect(),
            "h".chars().collect(),
        ];
        assert_eq!(trial, expected);
        let id = |k| g.vertex_id(&k).unwrap();
        assert!(scc.same_component(&id('a'), &id('e')));
        assert!(!scc.same_component(&id('a'), &id('c')));
        // "abe" reaches everything, "h" reaches only itself
        assert_eq!(scc.component_of(&id('a')), Some(0));
        assert_eq!(scc.component_of(&id('h')), Some(3));
    }

    #[test]
    fn one_big_cycle() {
        let mut g: WeightedGraph<usize, i32> = WeightedGraph::new();
        for i in 0..10 {
            g.add_arc(i, (i + 1) % 10);
        }
        let scc = g.strongly_connected_components();
        assert_eq!(scc.len(), 1);
        assert_eq!(scc.components()[0].len(), 10);
        assert!(WeightedGraph::<u8, i32>::new()
            .strongly_connected_components()
            .is_empty());
    }

    #[quickcheck]
    fn partitions_vertices(graph: NonNegativeGraph) {
        let g = graph.0;
        let scc = g.strongly_connected_components();
        let mut all: Vec<VertexId> = scc.components().iter().flatten().copied().collect();
        all.sort();
        assert_eq!(all, g.iter_vertices().collect::<Vec<_>>());
        for (i, c) in scc.components().iter().enumerate() {
            for v in c {
                assert_eq!(scc.component_of(v), Some(i));
            }
        }
        for e in g.iter_edges() {
            assert!(scc.component_of(&e.source) <= scc.component_of(&e.sink));
        }
    }

    #[quickcheck]
    fn agrees_with_petgraph(graph: NonNegativeGraph) {
        let g = graph.0;
        let pg = to_petgraph(&g, |_| ());
        let mut oracle: Vec<BTreeSet<usize>> = petgraph::algo::kosaraju_scc(&pg)
            .into_iter()
            .map(|c| c.into_iter().map(|v| v.index()).collect())
            .collect();
        oracle.sort();
        let mut trial: Vec<BTreeSet<usize>> = g
            .strongly_connected_components()
            .into_components()
            .into_iter()
            .map(|c| c.into_iter().map(|v| v.to_raw()).collect())
            .collect();
        trial.sort();
        assert_eq!(trial, oracle);
    }
}
