//! **ledge-nav** — navigation for 2D platform levels, derived from tile data.
//!
//! A level's tile layers are classified into a [`NavGrid`]: every cell is
//! open air, solid terrain, or part of a *run* of standable cells with
//! marked ends. Cells are then linked by walk, fall and jump moves, and
//! searched with A* for ground or airborne agents.
//!
//! ```
//! use ledge_core::{Point, TileFlagTable, TileFlags, TileLayer};
//! use ledge_nav::{NavConfig, Navigator, PathfindTerrain};
//!
//! let layer = TileLayer::from_rows("ground", &["......", "......", "######"], |c| {
//!     if c == '#' { 1 } else { 0 }
//! });
//! let tiles = TileFlagTable::new().with(1, TileFlags::TERRAIN);
//! let mut nav = Navigator::build(&[layer], &tiles, &NavConfig::default()).unwrap();
//!
//! let path = nav.find_path(Point::new(0, 1), Point::new(3, 1), PathfindTerrain::Ground);
//! assert_eq!(path.map(|p| p.len()), Some(3));
//! ```

mod behaviour;
mod classify;
pub mod config;
pub mod error;
pub mod grid;
mod links;
pub mod navigator;
pub mod navtype;
mod pather;
mod search;

#[cfg(test)]
mod testutil;

pub use config::NavConfig;
pub use error::NavError;
pub use grid::{GridStats, NavGrid};
pub use navigator::Navigator;
pub use navtype::{
    DIAGONAL_COST, Direction, NavLink, NavLinkType, NavPoint, NavType, PathfindTerrain, STEP_COST,
};
pub use search::PathStep;
