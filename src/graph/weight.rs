use num_traits::Zero;
use std::{cmp::Ordering, fmt::Debug, ops::Sub};

/// Numeric edge weights: signed integers and floats.
///
/// `Zero` brings `Add`; `Sub` is needed for residual capacities.
/// Infinity is not a value of `W`: unreachable distances are `None`.
pub trait Weight: Copy + PartialOrd + Debug + Zero + Sub<Output = Self> {}

impl<T> Weight for T where T: Copy + PartialOrd + Debug + Zero + Sub<Output = T> {}

/// Imposes a total order on a partially ordered weight,
/// so that weights can be keys of priority queues and sorts.
///
/// Incomparable values (e.g. NaN) compare equal.
#[derive(Debug, Clone, Copy)]
pub struct TotalOrd<W>(pub W);

impl<W: PartialOrd> PartialEq for TotalOrd<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for TotalOrd<W> {}

impl<W: PartialOrd> PartialOrd for TotalOrd<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for TotalOrd<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// `candidate < current`, where a missing `current` means +infinity.
pub(crate) fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
    match current {
        None => true,
        Some(cur) => candidate < cur,
    }
}
