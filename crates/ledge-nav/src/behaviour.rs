//! Queries used by enemy AI on top of the navigation grid: patrol bounds,
//! destination snapping and waypoint conversion.
//!
//! Positions passed in here are world pixels; results are tiles unless
//! stated otherwise.

use ledge_core::{Point, Range};
use ledge_paths::chebyshev;

use crate::grid::NavGrid;
use crate::navtype::{Direction, NavLinkType, NavType, PathfindTerrain};

impl NavGrid {
    /// Furthest tile an agent standing at world position `position` can
    /// patrol to in `direction`, within `radius` tiles.
    ///
    /// Ground agents only follow walk links and stop at the end of their
    /// run (immediately on a `Solo` cell). Airborne agents advance through
    /// any surface cell and stop in front of terrain. `None` when the
    /// starting tile is not navigable.
    pub fn patrol_coordinates(
        &self,
        position: Point,
        direction: Direction,
        terrain: PathfindTerrain,
        radius: i32,
    ) -> Option<Point> {
        let start = self.config().world_to_map(position);
        if !self.is_valid_position(start) {
            return None;
        }

        let mut cur = start;
        for _ in 0..radius.max(0) {
            let next = cur.shift(direction.dx(), 0);
            let ok = if terrain.is_airborne() {
                self.kind(next).is_surface()
            } else {
                let kind = self.kind(cur);
                kind != direction.boundary()
                    && kind != NavType::Solo
                    && self
                        .links(cur)
                        .iter()
                        .any(|l| l.movement == NavLinkType::Walk && l.destination == next)
            };
            if !ok {
                break;
            }
            cur = next;
        }
        Some(cur)
    }

    /// The navigable tile an agent should aim for when sent to world
    /// position `position`.
    ///
    /// Ground agents snap to the floor at or below the position; a position
    /// inside solid ground snaps to the surface on top of it. Airborne
    /// agents take the tile itself when it is a surface cell, otherwise the
    /// nearest surface cell within the configured snap radius.
    pub fn destination_coordinates(
        &self,
        position: Point,
        terrain: PathfindTerrain,
    ) -> Option<Point> {
        let tile = self.config().world_to_map(position);
        if terrain.is_airborne() {
            return self.nearest_surface(tile, self.config().snap_radius);
        }
        if tile.x < 0 || tile.x >= self.width() {
            return None;
        }
        let mut p = (tile.y.max(0)..self.height())
            .map(|y| Point::new(tile.x, y))
            .find(|&p| self.is_valid_position(p))?;
        while self.kind(p) == NavType::Terrain {
            p = p.up();
        }
        self.kind(p).is_surface().then_some(p)
    }

    /// Closest surface cell to `p` by Chebyshev distance, ties broken in
    /// row-major order.
    fn nearest_surface(&self, p: Point, radius: i32) -> Option<Point> {
        if self.kind(p).is_surface() {
            return Some(p);
        }
        if Range::around(p, radius).intersect(self.range()).is_empty() {
            return None;
        }
        for r in 1..=radius {
            let ring = Range::around(p, r).intersect(self.range());
            let found = ring
                .iter()
                .filter(|&q| chebyshev(p, q) == r)
                .find(|&q| self.kind(q).is_surface());
            if found.is_some() {
                return found;
            }
        }
        None
    }

    /// World waypoints (tile centres) for a tile path.
    pub fn path_to_world(&self, path: &[Point]) -> Vec<Point> {
        path.iter().map(|&p| self.config().tile_center(p)).collect()
    }
}
