use std::cmp::Reverse;
use std::hash::Hash;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;


/// Min-heap keyed by distance; pushing an item already queued updates it.
pub type MinHeap<I> = PriorityQueue<I, Distance>;


#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Distance(Reverse<OrderedFloat<f64>>);

impl From<f64> for Distance {
    fn from(float: f64) -> Self {
        Self(Reverse(OrderedFloat(float)))
    }
}

impl From<Distance> for f64 {
    fn from(distance: Distance) -> Self {
        (distance.0).0.into_inner()
    }
}

pub fn pop_nearest<I: Hash + Eq>(heap: &mut MinHeap<I>) -> Option<(I, f64)> {
    heap.pop().map(|(item, distance)| (item, distance.into()))
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_pops_nearest_first() {
        let mut heap = MinHeap::new();
        heap.push("far", 3.0.into());
        heap.push("near", 1.0.into());
        heap.push("mid", 2.0.into());
        assert_eq!(pop_nearest(&mut heap), Some(("near", 1.0)));
        assert_eq!(pop_nearest(&mut heap), Some(("mid", 2.0)));
        assert_eq!(pop_nearest(&mut heap), Some(("far", 3.0)));
        assert_eq!(pop_nearest(&mut heap), None);
    }
}
