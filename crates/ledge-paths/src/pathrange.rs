use ledge_core::{Point, Range};

use crate::traits::Edge;

/// A position reached by a search, with its cumulative cost and the kind of
/// the edge that entered it (`K::default()` for the start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<K = ()> {
    pub pos: Point,
    pub cost: i32,
    pub kind: K,
}

// ---------------------------------------------------------------------------
// Search arena
// ---------------------------------------------------------------------------

/// One arena slot per grid cell. `parent` is an arena index rather than a
/// pointer so the whole chain lives in one allocation.
#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) kind: K,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

pub(crate) const NO_PARENT: usize = usize::MAX;

impl<K: Default> Default for Node<K> {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: NO_PARENT,
            kind: K::default(),
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Reusable search state for one grid rectangle.
///
/// `PathRange` owns the node arenas and scratch buffers so repeated searches
/// do not allocate after warm-up. It holds no graph data: the same range can
/// search any [`Pather`](crate::Pather) of matching size, and each worker
/// thread searching a shared graph keeps its own `PathRange`.
pub struct PathRange<K = ()> {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* arena
    pub(crate) astar_nodes: Vec<Node<K>>,
    pub(crate) astar_generation: u32,
    pub(crate) expanded: usize,
    // Dijkstra arena
    pub(crate) dijkstra_nodes: Vec<Node<K>>,
    pub(crate) dijkstra_generation: u32,
    pub(crate) dijkstra_results: Vec<PathNode<K>>,
    // shared scratch buffer for edge queries
    pub(crate) ebuf: Vec<Edge<K>>,
}

impl<K: Copy + Default> PathRange<K> {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            expanded: 0,
            dijkstra_nodes: vec![Node::default(); len],
            dijkstra_generation: 0,
            dijkstra_results: Vec::new(),
            ebuf: Vec::with_capacity(16),
        }
    }

    /// Replace the underlying range.
    ///
    /// Arenas are kept when the new range fits in them (stale entries are
    /// invalidated by bumping the generations) and reallocated otherwise.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.dijkstra_results.clear();

        if new_len <= self.astar_nodes.len() {
            self.astar_generation = self.astar_generation.wrapping_add(1);
            self.dijkstra_generation = self.dijkstra_generation.wrapping_add(1);
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;
        self.dijkstra_nodes.clear();
        self.dijkstra_nodes.resize(new_len, Node::default());
        self.dijkstra_generation = 0;
    }
}

impl<K> PathRange<K> {
    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of nodes expanded by the last A* search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Flat arena index of `p`, or `None` outside the range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_point_round_trip_with_offset_range() {
        let pr: PathRange = PathRange::new(Range::new(2, 3, 7, 9));
        for p in pr.range() {
            let i = pr.idx(p).unwrap();
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(1, 3)), None);
        assert_eq!(pr.idx(Point::new(7, 3)), None);
    }

    #[test]
    fn set_range_smaller_keeps_arena() {
        let mut pr: PathRange<u8> = PathRange::new(Range::of_size(20, 20));
        pr.set_range(Range::of_size(5, 5));
        assert_eq!(pr.astar_nodes.len(), 400);
        assert_eq!(pr.width, 5);
        assert_eq!(pr.astar_generation, 1);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut pr: PathRange<u8> = PathRange::new(Range::of_size(5, 5));
        pr.set_range(Range::of_size(20, 20));
        assert_eq!(pr.astar_nodes.len(), 400);
        assert_eq!(pr.dijkstra_nodes.len(), 400);
        assert_eq!(pr.range(), Range::of_size(20, 20));
    }
}
