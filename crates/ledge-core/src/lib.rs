//! **ledge-core** — core types for tile-derived platformer navigation.
//!
//! This crate provides the foundational types shared by the *ledge* crates:
//! integer geometry and the parsed tile-layer model with its terrain oracle.

pub mod geom;
pub mod tiles;

pub use geom::{Point, Range};
pub use tiles::{EMPTY_GID, TileFlagTable, TileFlags, TileLayer, TileTerrain};
