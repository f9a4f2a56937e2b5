use crate::graph::VertexId;

/// Conditions under which an algorithm has no meaningful answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A negative-weight cycle is reachable, so shortest distances are unbounded.
    /// `vertex` lies on, or is reachable from, such a cycle.
    #[error("negative-weight cycle through {vertex}")]
    NegativeCycle { vertex: VertexId },
    /// Kahn's algorithm could not order `remaining` vertices, all of which
    /// lie on or behind a directed cycle.
    #[error("graph has a cycle: {remaining} vertices cannot be ordered")]
    NotADag { remaining: usize },
    /// A back edge `tail -> head` was met during depth-first search.
    #[error("graph has a cycle: back edge {tail} -> {head}")]
    BackEdge { tail: VertexId, head: VertexId },
}

pub type Result<T> = std::result::Result<T, Error>;
