//! Path queries over a [`NavGrid`].
//!
//! Queries borrow the grid immutably and take the caller's [`PathRange`] as
//! scratch space, so any number of threads can search one shared grid, each
//! with its own range.

use ledge_core::Point;
use ledge_paths::{PathNode, PathRange};

use crate::grid::NavGrid;
use crate::navtype::{NavLinkType, PathfindTerrain};
use crate::pather::NavPather;

/// One step of a route: the cell reached, the cumulative cost on arrival,
/// and how it was entered.
pub type PathStep = PathNode<NavLinkType>;

impl NavGrid {
    /// Cheapest route from `origin` to `destination` for an agent moving
    /// in `terrain` mode.
    ///
    /// The origin itself is not part of the route, so the last step's cost
    /// is the total. Returns `Some(vec![])` when both points coincide, and
    /// `None` when either endpoint is out of bounds or unclassified, or when
    /// no route exists.
    pub fn find_route(
        &self,
        paths: &mut PathRange<NavLinkType>,
        origin: Point,
        destination: Point,
        terrain: PathfindTerrain,
    ) -> Option<Vec<PathStep>> {
        if !self.is_valid_position(origin) || !self.is_valid_position(destination) {
            log::trace!("no path {origin} -> {destination}: endpoint not navigable");
            return None;
        }
        self.fit(paths);

        let pather = NavPather::new(self, terrain);
        let Some(route) = paths.astar_path(&pather, origin, destination) else {
            log::trace!(
                "no path {origin} -> {destination} ({terrain:?}) after {} expansions",
                paths.last_expanded()
            );
            return None;
        };
        let steps: Vec<PathStep> = route.into_iter().skip(1).collect();
        log::debug!(
            "path {origin} -> {destination} ({terrain:?}): {} steps, cost {}, {} expanded",
            steps.len(),
            steps.last().map_or(0, |s| s.cost),
            paths.last_expanded()
        );
        Some(steps)
    }

    /// Like [`find_route`](Self::find_route), keeping positions only.
    pub fn find_path(
        &self,
        paths: &mut PathRange<NavLinkType>,
        origin: Point,
        destination: Point,
        terrain: PathfindTerrain,
    ) -> Option<Vec<Point>> {
        let route = self.find_route(paths, origin, destination, terrain)?;
        Some(route.into_iter().map(|s| s.pos).collect())
    }

    /// Every cell reachable from `origin` at a cost of at most `max_cost`,
    /// in order of increasing cost. The origin comes first with cost 0.
    /// Empty when `origin` is not navigable.
    pub fn reachable_within(
        &self,
        paths: &mut PathRange<NavLinkType>,
        origin: Point,
        terrain: PathfindTerrain,
        max_cost: i32,
    ) -> Vec<PathStep> {
        if !self.is_valid_position(origin) {
            return Vec::new();
        }
        self.fit(paths);
        let pather = NavPather::new(self, terrain);
        paths.dijkstra_map(&pather, &[origin], max_cost).to_vec()
    }

    fn fit(&self, paths: &mut PathRange<NavLinkType>) {
        if paths.range() != self.range() {
            paths.set_range(self.range());
        }
    }
}
