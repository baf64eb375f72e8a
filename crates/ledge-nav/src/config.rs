use ledge_core::Point;

use crate::error::NavError;

/// Tunables for building and querying a navigation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Shortest horizontal jump, in tiles.
    pub min_jump: i32,
    /// Longest horizontal jump and highest climb, in tiles.
    pub max_jump: i32,
    /// Tile width in world pixels.
    pub tile_width: i32,
    /// Tile height in world pixels.
    pub tile_height: i32,
    /// How far (Chebyshev, in tiles) an airborne destination may be snapped.
    pub snap_radius: i32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            min_jump: 2,
            max_jump: 4,
            tile_width: 32,
            tile_height: 32,
            snap_radius: 4,
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> Result<(), NavError> {
        if self.min_jump < 1 || self.min_jump > self.max_jump {
            return Err(NavError::InvalidJumpRange {
                min: self.min_jump,
                max: self.max_jump,
            });
        }
        if self.tile_width <= 0 || self.tile_height <= 0 {
            return Err(NavError::InvalidTileSize {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        if self.snap_radius < 0 {
            return Err(NavError::InvalidSnapRadius(self.snap_radius));
        }
        Ok(())
    }

    /// Checks that jump range and snap radius fit a `width` × `height` map.
    pub fn validate_for(&self, width: i32, height: i32) -> Result<(), NavError> {
        self.validate()?;
        let limit = width.max(height);
        for (setting, value) in [("max_jump", self.max_jump), ("snap_radius", self.snap_radius)] {
            if value > limit {
                return Err(NavError::ExceedsMap {
                    setting,
                    value,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Top-left world pixel of tile `p`.
    #[inline]
    pub fn map_to_world(&self, p: Point) -> Point {
        Point::new(p.x * self.tile_width, p.y * self.tile_height)
    }

    /// Centre world pixel of tile `p`.
    #[inline]
    pub fn tile_center(&self, p: Point) -> Point {
        self.map_to_world(p).shift(self.tile_width / 2, self.tile_height / 2)
    }

    /// The tile containing world pixel `w`. Rounds towards negative infinity,
    /// so positions left of or above the map give negative tiles.
    #[inline]
    pub fn world_to_map(&self, w: Point) -> Point {
        Point::new(
            w.x.div_euclid(self.tile_width.max(1)),
            w.y.div_euclid(self.tile_height.max(1)),
        )
    }
}
