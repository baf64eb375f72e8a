//! The [`NavGrid`] type: one [`NavPoint`] per tile of the level.

use std::fmt;

use ledge_core::{Point, Range, TileLayer, TileTerrain};

use crate::classify;
use crate::config::NavConfig;
use crate::error::NavError;
use crate::links;
use crate::navtype::{NavLink, NavLinkType, NavPoint, NavType};

/// Navigation data for a whole level.
///
/// Built once per level load by [`NavGrid::build`] and read-only afterwards.
/// A level change builds a new grid; cells are never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGrid {
    range: Range,
    points: Vec<NavPoint>,
    config: NavConfig,
}

impl NavGrid {
    /// Classify `layers` and link the result.
    ///
    /// Layers are classified in order; a cell keeps the classification of the
    /// first layer that assigns one. All layers must share the same size.
    pub fn build<T: TileTerrain>(
        layers: &[TileLayer],
        oracle: &T,
        config: &NavConfig,
    ) -> Result<NavGrid, NavError> {
        config.validate()?;
        let first = layers.first().ok_or(NavError::NoLayers)?;
        for layer in layers {
            if (layer.width, layer.height) != (first.width, first.height) {
                return Err(NavError::LayerSizeMismatch {
                    name: layer.name.clone(),
                    expected: (first.width, first.height),
                    found: (layer.width, layer.height),
                });
            }
            let expected = layer.bounds().len();
            if layer.data.len() != expected {
                return Err(NavError::LayerDataLength {
                    name: layer.name.clone(),
                    expected,
                    found: layer.data.len(),
                });
            }
        }
        config.validate_for(first.width, first.height)?;

        let mut grid = NavGrid::empty(first.width, first.height, *config);
        classify::classify(&mut grid, layers, oracle);
        links::build_links(&mut grid, config.min_jump, config.max_jump);

        log::debug!(
            "navigation grid {}x{} built from {} layer(s): {}",
            grid.width(),
            grid.height(),
            layers.len(),
            grid.stats()
        );
        Ok(grid)
    }

    /// A grid of the given size with every cell `None` and no links.
    pub fn empty(width: i32, height: i32, config: NavConfig) -> Self {
        let range = Range::of_size(width, height);
        Self {
            range,
            points: vec![NavPoint::default(); range.len()],
            config,
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.range.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.range.height()
    }

    /// The configuration the grid was built with.
    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.range.contains(p) {
            return None;
        }
        Some((p.y * self.range.width() + p.x) as usize)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range.contains(p)
    }

    /// The cell at `p`, or `None` out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&NavPoint> {
        self.idx(p).map(|i| &self.points[i])
    }

    /// Classification at `p`; out-of-bounds cells read as [`NavType::None`].
    #[inline]
    pub fn kind(&self, p: Point) -> NavType {
        self.at(p).map_or(NavType::None, |np| np.kind)
    }

    /// Outgoing links of `p`; empty out of bounds.
    #[inline]
    pub fn links(&self, p: Point) -> &[NavLink] {
        self.at(p).map(|np| np.links.as_slice()).unwrap_or(&[])
    }

    /// In bounds and classified: usable as a search endpoint.
    #[inline]
    pub fn is_valid_position(&self, p: Point) -> bool {
        !self.kind(p).is_none()
    }

    pub(crate) fn set_kind(&mut self, p: Point, kind: NavType) {
        if let Some(i) = self.idx(p) {
            self.points[i].kind = kind;
        }
    }

    pub(crate) fn push_links(&mut self, p: Point, links: impl IntoIterator<Item = NavLink>) {
        if let Some(i) = self.idx(p) {
            self.points[i].links.extend(links);
        }
    }

    /// Row-major iterator over `(Point, &NavPoint)`.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &NavPoint)> + '_ {
        self.range.iter().zip(self.points.iter())
    }

    /// Cell and link counts.
    pub fn stats(&self) -> GridStats {
        let mut s = GridStats::default();
        for (_, np) in self.iter() {
            match np.kind {
                NavType::None => s.open += 1,
                NavType::Terrain => s.terrain += 1,
                NavType::Platform => s.platform += 1,
                NavType::Left | NavType::Right | NavType::Solo => s.edges += 1,
            }
            for l in &np.links {
                match l.movement {
                    NavLinkType::Walk => s.walk += 1,
                    NavLinkType::Fall => s.fall += 1,
                    NavLinkType::Jump => s.jump += 1,
                    NavLinkType::Unknown => {}
                }
            }
        }
        s
    }

    /// One glyph per cell, one line per row (see [`NavType::glyph`]).
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.range.len() + self.height().max(0) as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.push(self.kind(Point::new(x, y)).glyph());
            }
            out.push('\n');
        }
        out
    }
}

/// Summary counts of a [`NavGrid`], used for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridStats {
    pub open: usize,
    pub terrain: usize,
    pub platform: usize,
    pub edges: usize,
    pub walk: usize,
    pub fall: usize,
    pub jump: usize,
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} open, {} terrain, {} platform, {} edge cells; {} walk, {} fall, {} jump links",
            self.open, self.terrain, self.platform, self.edges, self.walk, self.fall, self.jump
        )
    }
}
