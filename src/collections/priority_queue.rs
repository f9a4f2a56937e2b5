use crate::graph::{TotalOrd, VertexId};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// A min-priority queue of vertices keyed by weights.
///
/// Each vertex is queued at most once; pushing it again only ever lowers its key.
/// Equal keys are popped in ascending order of vertex ID's,
/// which is the same order a linear minimum-scan over ID's would pick.
pub struct MinPriorityQueue<W: PartialOrd> {
    queue: KeyedPriorityQueue<VertexId, Reverse<(TotalOrd<W>, VertexId)>, RandomState>,
}

impl<W> MinPriorityQueue<W>
where
    W: PartialOrd + Copy,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: KeyedPriorityQueue::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Queues `vertex` with `key`, or decreases its key if it is queued with a larger one.
    /// Returns whether the queue changed.
    pub fn push(&mut self, vertex: VertexId, key: W) -> bool {
        let lowers = self
            .queue
            .get_priority(&vertex)
            .map(|Reverse((cur, _))| key < cur.0);
        match lowers {
            None => {
                self.queue.push(vertex, Reverse((TotalOrd(key), vertex)));
                true
            }
            Some(true) => {
                let _ = self
                    .queue
                    .set_priority(&vertex, Reverse((TotalOrd(key), vertex)));
                true
            }
            Some(false) => false,
        }
    }

    /// Removes and returns the vertex of the least key.
    pub fn pop(&mut self) -> Option<(VertexId, W)> {
        self.queue
            .pop()
            .map(|(vertex, Reverse((key, _)))| (vertex, key.0))
    }

    pub fn key_of(&self, vertex: &VertexId) -> Option<W> {
        self.queue.get_priority(vertex).map(|Reverse((k, _))| k.0)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
