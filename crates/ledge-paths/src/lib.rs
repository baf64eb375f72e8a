//! Shortest-path search over weighted, tagged grid edges.
//!
//! Graphs are described through [`Pather`], which yields [`Edge`]s carrying a
//! cost and a caller-defined tag (the movement kind). Several edges may join
//! the same two cells, so searches track which edge reached each node and
//! report it back in [`PathNode::kind`].
//!
//! - **A\*** shortest path ([`PathRange::astar_path`])
//! - **Dijkstra** multi-source cost maps ([`PathRange::dijkstra_map`])
//!
//! [`PathRange`] owns the node arenas. Parents are arena indices, and a
//! generation counter invalidates the previous search without clearing
//! memory.

mod astar;
mod dijkstra;
mod distance;
mod pathrange;
mod traits;

pub use distance::chebyshev;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::{AstarPather, Edge, Pather};
