use std::sync::Arc;

use ledge_core::{Point, TileLayer, TileTerrain};
use ledge_paths::PathRange;

use crate::config::NavConfig;
use crate::error::NavError;
use crate::grid::NavGrid;
use crate::navtype::{Direction, NavLinkType, PathfindTerrain};
use crate::search::PathStep;

/// Owns the current level's navigation grid and a search arena.
///
/// The grid sits behind an [`Arc`]: [`grid`](Navigator::grid) hands out
/// snapshots that other threads can search with their own
/// [`PathRange`]. [`rebuild`](Navigator::rebuild) swaps in a new grid and
/// never touches the old one, so snapshots stay valid (and stale) until
/// dropped.
pub struct Navigator {
    grid: Arc<NavGrid>,
    paths: PathRange<NavLinkType>,
}

impl Navigator {
    pub fn new(grid: NavGrid) -> Self {
        let paths = PathRange::new(grid.range());
        Self {
            grid: Arc::new(grid),
            paths,
        }
    }

    /// Build a grid from `layers` and wrap it.
    pub fn build<T: TileTerrain>(
        layers: &[TileLayer],
        oracle: &T,
        config: &NavConfig,
    ) -> Result<Self, NavError> {
        Ok(Self::new(NavGrid::build(layers, oracle, config)?))
    }

    /// Replace the grid after a level change. On error the current grid is
    /// kept.
    pub fn rebuild<T: TileTerrain>(
        &mut self,
        layers: &[TileLayer],
        oracle: &T,
        config: &NavConfig,
    ) -> Result<(), NavError> {
        let grid = NavGrid::build(layers, oracle, config)?;
        self.paths.set_range(grid.range());
        self.grid = Arc::new(grid);
        Ok(())
    }

    /// A shared snapshot of the current grid.
    pub fn grid(&self) -> Arc<NavGrid> {
        Arc::clone(&self.grid)
    }

    pub fn config(&self) -> &NavConfig {
        self.grid.config()
    }

    pub fn find_path(
        &mut self,
        origin: Point,
        destination: Point,
        terrain: PathfindTerrain,
    ) -> Option<Vec<Point>> {
        self.grid
            .find_path(&mut self.paths, origin, destination, terrain)
    }

    pub fn find_route(
        &mut self,
        origin: Point,
        destination: Point,
        terrain: PathfindTerrain,
    ) -> Option<Vec<PathStep>> {
        self.grid
            .find_route(&mut self.paths, origin, destination, terrain)
    }

    pub fn reachable_within(
        &mut self,
        origin: Point,
        terrain: PathfindTerrain,
        max_cost: i32,
    ) -> Vec<PathStep> {
        self.grid
            .reachable_within(&mut self.paths, origin, terrain, max_cost)
    }

    pub fn patrol_coordinates(
        &self,
        position: Point,
        direction: Direction,
        terrain: PathfindTerrain,
        radius: i32,
    ) -> Option<Point> {
        self.grid
            .patrol_coordinates(position, direction, terrain, radius)
    }

    pub fn destination_coordinates(&self, position: Point, terrain: PathfindTerrain) -> Option<Point> {
        self.grid.destination_coordinates(position, terrain)
    }

    pub fn is_valid_position(&self, p: Point) -> bool {
        self.grid.is_valid_position(p)
    }

    pub fn path_to_world(&self, path: &[Point]) -> Vec<Point> {
        self.grid.path_to_world(path)
    }

    pub fn map_to_world(&self, p: Point) -> Point {
        self.config().map_to_world(p)
    }

    pub fn world_to_map(&self, p: Point) -> Point {
        self.config().world_to_map(p)
    }
}
