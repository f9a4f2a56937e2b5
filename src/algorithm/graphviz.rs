//! Visualize weighted graphs in the graphviz format.
use crate::graph::*;
use ahash::RandomState;
use std::{collections::HashSet, fmt::Display, hash::Hash, io::Write};

/// Attributes of highlighted edges.
pub const HIGHLIGHT: &str = "color=red, penwidth=2";

/**
 * Dumps a weighted graph into graphviz format, optionally highlighting some edges,
 * e.g. those of a spanning tree or a shortest path.
 *
 * A symmetric graph is dumped as an undirected one, one line per symmetric pair.
 * Edges are labelled with their weights.
 *
 * # Examples
 *
 * ```rust
 * use graphalgo::{
 *     algorithm::{graphviz::*, Kruskal},
 *     graph::*,
 * };
 *
 * let g = WeightedGraph::undirected_from_edges(vec![
 *     ("a", "b", 3),
 *     ("b", "c", 1),
 *     ("a", "c", 2),
 * ]);
 * let mst = g.kruskal().into_tree();
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz_highlighting(
 *         &mut buf,
 *         "mst",
 *         mst.edges().iter().map(|(u, v, _)| (*u, *v)),
 *     )
 *     .unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph mst {
 *   "a" ;
 *   "b" ;
 *   "c" ;
 *   "a" -- "b" [label="3"] ;
 *   "b" -- "c" [label="1", color=red, penwidth=2] ;
 *   "a" -- "c" [label="2", color=red, penwidth=2] ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz
where
    Self: WeightedQueryableGraph + Sized,
    Self::Weight: Display,
{
    /// Graphviz name of a vertex, before quoting.
    fn vertex_name(&self, v: &VertexId) -> String;

    /// Whether to dump as an undirected graph.
    fn is_undirected(&self) -> bool;

    /**
     * Dumps to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<O>(&self, out: &mut O, graph_name: &str) -> std::io::Result<()>
    where
        O: Write,
    {
        self.dump_in_graphviz_highlighting(out, graph_name, std::iter::empty())
    }

    /**
     * Dumps to a `std::io::Write` object in the graphviz format,
     * drawing the edges `source -> sink` listed in `highlighted` with [HIGHLIGHT].
     *
     * For undirected dumps, either orientation of a pair highlights it.
     */
    fn dump_in_graphviz_highlighting<O, I>(
        &self,
        out: &mut O,
        graph_name: &str,
        highlighted: I,
    ) -> std::io::Result<()>
    where
        O: Write,
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let undirected = self.is_undirected();
        let mut marks: HashSet<(VertexId, VertexId), RandomState> =
            HashSet::with_hasher(RandomState::new());
        for (u, v) in highlighted {
            marks.insert((u, v));
            if undirected {
                marks.insert((v, u));
            }
        }

        if undirected {
            writeln!(out, "graph {} {{", graph_name)?;
        } else {
            writeln!(out, "digraph {} {{", graph_name)?;
        }
        let names: Vec<String> = self
            .iter_vertices()
            .map(|v| quoted(&self.vertex_name(&v)))
            .collect();
        for name in names.iter() {
            writeln!(out, "  {} ;", name)?;
        }
        let dir = if undirected { "--" } else { "->" };
        for (e, w) in self.weighted_edges() {
            if undirected && e.source > e.sink {
                continue;
            }
            let src = &names[e.source.to_raw()];
            let snk = &names[e.sink.to_raw()];
            let label = quoted(&w.to_string());
            if marks.contains(&(e.source, e.sink)) {
                writeln!(
                    out,
                    "  {} {} {} [label={}, {}] ;",
                    src, dir, snk, label, HIGHLIGHT
                )?;
            } else {
                writeln!(out, "  {} {} {} [label={}] ;", src, dir, snk, label)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<K, W> DumpInGraphviz for WeightedGraph<K, W>
where
    K: Hash + Eq + Display,
    W: Weight + Display,
{
    fn vertex_name(&self, v: &VertexId) -> String {
        match self.key(v) {
            Some(k) => k.to_string(),
            None => v.to_string(),
        }
    }

    fn is_undirected(&self) -> bool {
        self.is_symmetric()
    }
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
