//! Graph representations shared by all algorithms.
//!
//! # Low-level graphs and `WeightedGraph`
//!
//! Vertices and edges in low-level graphs are lightweight ID's.
//! They are essentially `usize`, and they are dense,
//! so algorithms keep per-vertex state in plain vectors indexed by [VertexId::to_raw].
//!
//! [WeightedGraph] maps user keys (integers, strings, ...) to vertex ID's
//! and attaches a weight to every edge.
//! Algorithms run on ID's; use [WeightedGraph::key] and [WeightedGraph::vertex_id]
//! to translate results back and forth.
//!
//! # Graph wrappers
//!
//! [Transposed] reverses every edge of a graph without copying it.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod weight;
pub use self::weight::*;
mod r#trait;
pub use self::r#trait::*;
mod weighted_graph;
pub use self::weighted_graph::*;
mod transposed;
pub use self::transposed::*;
mod petgraph_import;

pub mod directed;
