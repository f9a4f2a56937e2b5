//! Implementations of low-level directed graphs

mod tree_backed;
pub use self::tree_backed::*;
