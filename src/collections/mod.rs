//! Auxiliary data structures for the algorithms.
mod union_find;
pub use self::union_find::*;
mod priority_queue;
pub use self::priority_queue::*;
