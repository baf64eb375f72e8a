//! Tile layer data and terrain metadata.
//!
//! A [`TileLayer`] is one already-parsed layer of a tile map: a row-major
//! array of global tile ids (gids), where gid `0` means "no tile". The
//! [`TileTerrain`] trait is the seam through which the map loader's tileset
//! metadata answers "is this tile solid ground / walkable".

use std::collections::HashMap;

use crate::geom::{Point, Range};

/// The gid of an empty tile slot.
pub const EMPTY_GID: u32 = 0;

/// One rectangular layer of tile ids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayer {
    pub name: String,
    pub width: i32,
    pub height: i32,
    /// Row-major tile ids, `data[y * width + x]`.
    pub data: Vec<u32>,
}

impl TileLayer {
    /// Create an empty layer of the given size.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        let len = Range::of_size(width, height).len();
        Self {
            name: name.into(),
            width: width.max(0),
            height: height.max(0),
            data: vec![EMPTY_GID; len],
        }
    }

    /// Build a layer from text rows, mapping each character to a gid.
    ///
    /// The layer is as wide as the longest row; shorter rows are padded with
    /// [`EMPTY_GID`].
    pub fn from_rows(
        name: impl Into<String>,
        rows: &[&str],
        gid_of: impl Fn(char) -> u32,
    ) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut layer = Self::new(name, width, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                layer.set(Point::new(x as i32, y as i32), gid_of(ch));
            }
        }
        layer
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::of_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// The gid at `p`, or `None` outside the layer or past the end of a
    /// short data array.
    #[inline]
    pub fn gid(&self, p: Point) -> Option<u32> {
        self.index(p).and_then(|i| self.data.get(i).copied())
    }

    /// Set the gid at `p`. No-op outside the layer.
    pub fn set(&mut self, p: Point, gid: u32) {
        if let Some(slot) = self.index(p).and_then(|i| self.data.get_mut(i)) {
            *slot = gid;
        }
    }
}

/// Navigation-relevant flags of a single tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileFlags {
    /// Solid ground.
    pub terrain: bool,
    /// Can be stood on even though it is not solid ground (one-way
    /// platforms, ladders' tops, bridges).
    pub walkable: bool,
}

impl TileFlags {
    pub const TERRAIN: Self = Self {
        terrain: true,
        walkable: false,
    };
    pub const WALKABLE: Self = Self {
        terrain: false,
        walkable: true,
    };

    /// Whether an agent can stand on top of this tile.
    #[inline]
    pub fn supports(self) -> bool {
        self.terrain || self.walkable
    }
}

/// Per-tile terrain oracle.
///
/// Implemented by whatever owns tileset metadata. Tiles with no metadata
/// return `None` from [`flags`](TileTerrain::flags) and count as neither
/// terrain nor walkable.
pub trait TileTerrain {
    /// Flags for `gid`, or `None` when the tile has no metadata.
    fn flags(&self, gid: u32) -> Option<TileFlags>;

    fn is_terrain(&self, gid: u32) -> bool {
        self.flags(gid).is_some_and(|f| f.terrain)
    }

    fn is_walkable(&self, gid: u32) -> bool {
        self.flags(gid).is_some_and(|f| f.walkable)
    }
}

impl<T: TileTerrain + ?Sized> TileTerrain for &T {
    fn flags(&self, gid: u32) -> Option<TileFlags> {
        (**self).flags(gid)
    }
}

/// A [`TileTerrain`] backed by a gid → flags table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileFlagTable {
    flags: HashMap<u32, TileFlags>,
}

impl TileFlagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `flags` for `gid`, replacing any previous entry.
    pub fn insert(&mut self, gid: u32, flags: TileFlags) -> &mut Self {
        self.flags.insert(gid, flags);
        self
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, gid: u32, flags: TileFlags) -> Self {
        self.insert(gid, flags);
        self
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl TileTerrain for TileFlagTable {
    fn flags(&self, gid: u32) -> Option<TileFlags> {
        self.flags.get(&gid).copied()
    }
}
