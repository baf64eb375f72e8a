use ledge_core::Point;

/// A directed edge out of a grid position.
///
/// `kind` tags how the move is performed (for example walk or jump); search
/// results report the kind of the edge used to enter each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<K> {
    pub to: Point,
    /// Must be >= 0.
    pub cost: i32,
    pub kind: K,
}

impl<K> Edge<K> {
    #[inline]
    pub fn new(to: Point, cost: i32, kind: K) -> Self {
        Self { to, cost, kind }
    }
}

/// Graph interface for the searches in this crate.
pub trait Pather {
    /// Tag carried by every edge.
    type Kind: Copy + Default;

    /// Append the outgoing edges of `p` into `buf`. The caller clears `buf`
    /// before calling. Several edges may lead to the same position.
    fn neighbors(&self, p: Point, buf: &mut Vec<Edge<Self::Kind>>);
}

/// Pather with an admissible heuristic, required by A*.
pub trait AstarPather: Pather {
    /// Estimate of the cost from `from` to `to`. Must never exceed the
    /// cheapest real route.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
