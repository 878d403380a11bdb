use crate::neighbour::Neighbour;
use std::collections::BinaryHeap;

/// Accumulates candidates during a nearest-neighbour search and reports the
/// distance a new candidate has to beat, so that searches can prune subtrees.
pub(crate) trait ResultCollection {
    fn add(&mut self, entry: Neighbour);
    fn max_dist(&self) -> f64;
    fn into_sorted_vec(self) -> Vec<Neighbour>;
}

/// Single best candidate. Replaced only by a strictly closer one, so the
/// first of several equidistant points visited wins.
impl ResultCollection for Option<Neighbour> {
    fn add(&mut self, entry: Neighbour) {
        if self.map_or(true, |best| entry.distance < best.distance) {
            *self = Some(entry);
        }
    }

    fn max_dist(&self) -> f64 {
        self.map_or(f64::INFINITY, |n| n.distance)
    }

    fn into_sorted_vec(self) -> Vec<Neighbour> {
        self.into_iter().collect()
    }
}

/// The `k` closest candidates seen so far, kept in a max-heap so the current
/// worst is evicted in `O(log k)` when something better turns up.
#[derive(Debug)]
pub(crate) struct BestN {
    heap: BinaryHeap<Neighbour>,
    k: usize,
}

impl BestN {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(k),
            k,
        }
    }
}

impl ResultCollection for BestN {
    fn add(&mut self, entry: Neighbour) {
        if self.heap.len() < self.k {
            self.heap.push(entry);
        } else if let Some(mut max_heap_value) = self.heap.peek_mut() {
            if entry < *max_heap_value {
                *max_heap_value = entry;
            }
        }
    }

    fn max_dist(&self) -> f64 {
        if self.heap.len() < self.k {
            f64::INFINITY
        } else {
            self.heap.peek().map_or(f64::NEG_INFINITY, |n| n.distance)
        }
    }

    fn into_sorted_vec(self) -> Vec<Neighbour> {
        self.heap.into_sorted_vec()
    }
}
