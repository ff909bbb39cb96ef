//! Strategies for picking the next vertex to settle.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_graph::VertexId;

/// The set of unvisited candidate vertices of a shortest-path run.
///
/// A vertex may be pushed several times as its known distance improves.
/// Implementations may hand back a vertex that has already been settled;
/// the engine skips those.
pub trait Frontier {
    /// Record `vertex` as a candidate with known distance `cost`.
    fn push(&mut self, vertex: VertexId, cost: f64);

    /// Remove and return a candidate with minimal known distance.
    fn pop_min(&mut self) -> Option<VertexId>;

    fn clear(&mut self);

    fn is_empty(&self) -> bool;
}

// ---------------------------------------------------------------------------
// LinearScan
// ---------------------------------------------------------------------------

/// Unsorted candidate list scanned in full on every extraction, O(V) each.
///
/// Ties go to the candidate that entered the list first. Pushing a vertex
/// that is already listed lowers its cost in place, so it keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    entries: Vec<(VertexId, f64)>,
}

impl Frontier for LinearScan {
    fn push(&mut self, vertex: VertexId, cost: f64) {
        match self.entries.iter_mut().find(|(v, _)| *v == vertex) {
            Some(entry) => entry.1 = entry.1.min(cost),
            None => self.entries.push((vertex, cost)),
        }
    }

    fn pop_min(&mut self) -> Option<VertexId> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &(_, cost)) in self.entries.iter().enumerate() {
            match best {
                Some((_, c)) if cost >= c => {}
                _ => best = Some((i, cost)),
            }
        }
        // `remove` keeps the remaining entries in insertion order.
        best.map(|(i, _)| self.entries.remove(i).0)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MinHeap
// ---------------------------------------------------------------------------

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// cost first, and among equal costs the lowest vertex id.
#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    vertex: VertexId,
    cost: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap frontier, O(log V) per operation.
///
/// Ties are broken by lowest [`VertexId`] (row-major). Superseded entries
/// stay in the heap until popped.
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    heap: BinaryHeap<HeapEntry>,
}

impl Frontier for MinHeap {
    fn push(&mut self, vertex: VertexId, cost: f64) {
        self.heap.push(HeapEntry { vertex, cost });
    }

    fn pop_min(&mut self) -> Option<VertexId> {
        self.heap.pop().map(|e| e.vertex)
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i32, y: i32) -> VertexId {
        VertexId::new(x, y)
    }

    #[test]
    fn linear_scan_first_minimum_wins() {
        let mut f = LinearScan::default();
        f.push(v(5, 0), 2.0);
        f.push(v(1, 0), 1.0);
        f.push(v(0, 0), 1.0);
        assert_eq!(f.pop_min(), Some(v(1, 0)));
        assert_eq!(f.pop_min(), Some(v(0, 0)));
        assert_eq!(f.pop_min(), Some(v(5, 0)));
        assert_eq!(f.pop_min(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn linear_scan_repush_keeps_position() {
        let mut f = LinearScan::default();
        f.push(v(0, 0), 3.0);
        f.push(v(1, 0), 1.0);
        f.push(v(0, 0), 1.0);
        // Same cost now; (0, 0) entered first.
        assert_eq!(f.pop_min(), Some(v(0, 0)));
        assert_eq!(f.pop_min(), Some(v(1, 0)));
        assert!(f.is_empty());
    }

    #[test]
    fn min_heap_breaks_ties_by_lowest_id() {
        let mut f = MinHeap::default();
        f.push(v(2, 1), 1.0);
        f.push(v(3, 0), 1.0);
        f.push(v(0, 0), 0.5);
        f.push(v(0, 1), 1.0);
        assert_eq!(f.pop_min(), Some(v(0, 0)));
        assert_eq!(f.pop_min(), Some(v(3, 0)));
        assert_eq!(f.pop_min(), Some(v(0, 1)));
        assert_eq!(f.pop_min(), Some(v(2, 1)));
        assert_eq!(f.pop_min(), None);
    }

    #[test]
    fn min_heap_keeps_stale_entries() {
        let mut f = MinHeap::default();
        f.push(v(0, 0), 4.0);
        f.push(v(0, 0), 2.0);
        assert_eq!(f.pop_min(), Some(v(0, 0)));
        assert_eq!(f.pop_min(), Some(v(0, 0)));
        f.push(v(1, 1), 0.0);
        f.clear();
        assert!(f.is_empty());
    }
}
