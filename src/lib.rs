//! Classical algorithms on weighted graphs.
//!
//! Build a [WeightedGraph](graph::WeightedGraph) from keys and weights,
//! then call algorithms from [algorithm] on it:
//!
//! * shortest paths: Bellman-Ford, Dijkstra (array-scan and heap), Floyd-Warshall;
//! * minimum spanning trees: Prim (array-scan and heap), Kruskal;
//! * maximum flow and minimum cut: Edmonds-Karp;
//! * depth-first search, cycle detection, strongly connected components
//!   and topological sort;
//! * maximum bipartite matching.
//!
//! Algorithms work on dense [VertexId](graph::VertexId)'s
//! and never modify the graph they run on.
//! Conditions without a meaningful answer, such as negative-weight cycles,
//! are reported as [Error]; disconnected inputs give partial results instead.
//!
//! Algorithms emit [tracing] events but never install a subscriber.
pub mod algorithm;
pub mod collections;
mod error;
pub use error::{Error, Result};
pub mod graph;

#[cfg(test)]
mod testing;
