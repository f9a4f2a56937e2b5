//! Graph algorithms, as extension traits over [QueryableGraph](crate::graph::QueryableGraph)
//! and [WeightedQueryableGraph](crate::graph::WeightedQueryableGraph).
//!
//! Bring a trait into scope and call its methods on any graph:
//!
//! ```rust
//! use graphalgo::{algorithm::Dijkstra, graph::*};
//!
//! let g = WeightedGraph::from_edges(vec![("s", "t", 2), ("t", "u", 3), ("s", "u", 7)]);
//! let s = g.vertex_id(&"s").unwrap();
//! let u = g.vertex_id(&"u").unwrap();
//! let sp = g.dijkstra_heap(&s);
//! assert_eq!(sp.distance(&u), Some(5));
//! assert_eq!(g.keys_of(&sp.path_to(&u).unwrap()), vec![&"s", &"t", &"u"]);
//! ```
pub mod shortest_path;
pub use self::shortest_path::*;
pub mod spanning_tree;
pub use self::spanning_tree::*;
mod max_flow;
pub use self::max_flow::*;
mod dfs;
pub use self::dfs::{Color, DepthFirstSearch, DfsForest};
mod cycle;
pub use self::cycle::*;
mod scc;
pub use self::scc::*;
mod toposort;
pub use self::toposort::*;
mod matching;
pub use self::matching::*;
pub mod graphviz;
