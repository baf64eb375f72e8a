//! Walkability classification: one pass over the tile layers.
//!
//! A cell whose own tile supports is `Terrain`. An open cell resting on a
//! supporting tile is a surface cell; consecutive surface cells on a row form
//! a run whose ends are marked `Left`/`Right` (or `Solo` for one-cell runs).
//! The last row and column of the map are never classified.

use std::collections::BTreeSet;

use ledge_core::{EMPTY_GID, Point, TileLayer, TileTerrain};

use crate::grid::NavGrid;
use crate::navtype::NavType;

/// Answers "can something stand on this tile" for one layer, remembering
/// tile ids that had no metadata.
struct Support<'a, T> {
    oracle: &'a T,
    unknown: BTreeSet<u32>,
}

impl<T: TileTerrain> Support<'_, T> {
    fn at(&mut self, layer: &TileLayer, p: Point) -> bool {
        let Some(gid) = layer.gid(p) else {
            return false;
        };
        if gid == EMPTY_GID {
            return false;
        }
        match self.oracle.flags(gid) {
            Some(flags) => flags.supports(),
            None => {
                self.unknown.insert(gid);
                false
            }
        }
    }
}

/// Ends the open run at the current cell.
#[inline]
fn close(kind: NavType) -> NavType {
    if kind == NavType::Left {
        NavType::Solo
    } else {
        NavType::Right
    }
}

/// Classify every layer into `grid`, which must start out all `None`.
pub(crate) fn classify<T: TileTerrain>(grid: &mut NavGrid, layers: &[TileLayer], oracle: &T) {
    let mut support = Support {
        oracle,
        unknown: BTreeSet::new(),
    };

    for layer in layers {
        for y in 0..layer.height - 1 {
            let mut run_open = false;
            for x in 0..layer.width - 1 {
                let p = Point::new(x, y);
                if !grid.kind(p).is_none() {
                    continue;
                }
                if support.at(layer, p) {
                    grid.set_kind(p, NavType::Terrain);
                    continue;
                }
                if !support.at(layer, p.down()) {
                    continue;
                }

                let mut kind = NavType::None;
                if !run_open {
                    run_open = true;
                    kind = NavType::Left;
                }

                if !support.at(layer, p.down().right()) {
                    // Ledge.
                    kind = close(kind);
                    run_open = false;
                } else if kind != NavType::Left {
                    kind = NavType::Platform;
                }

                // Wall. Skipped when the ledge check already closed the run.
                if run_open && support.at(layer, p.right()) {
                    kind = close(kind);
                    run_open = false;
                }

                grid.set_kind(p, kind);
            }
        }
    }

    if !support.unknown.is_empty() {
        log::warn!(
            "{} tile id(s) without terrain metadata treated as empty: {:?}",
            support.unknown.len(),
            support.unknown
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use crate::testutil::{layer, table};

    fn classified(rows: &[&str]) -> NavGrid {
        let l = layer(rows);
        let mut grid = NavGrid::empty(l.width, l.height, NavConfig::default());
        classify(&mut grid, &[l], &table());
        grid
    }

    #[test]
    fn floor_run_has_left_edge_and_open_right_end() {
        let g = classified(&["......", "......", "######"]);
        // Right end reaches the unclassified last column without closing.
        assert_eq!(g.render(), "......\n<====.\n......\n");
    }

    #[test]
    fn terrain_cells_are_terrain() {
        let g = classified(&["......", "###...", "......"]);
        assert_eq!(g.kind(Point::new(0, 1)), NavType::Terrain);
        assert_eq!(g.kind(Point::new(2, 1)), NavType::Terrain);
        assert_eq!(g.kind(Point::new(3, 1)), NavType::None);
        assert_eq!(g.render(), "<=>...\n###...\n......\n");
    }

    #[test]
    fn walkable_tiles_support_runs() {
        let g = classified(&["......", ".===..", "......"]);
        assert_eq!(g.render(), ".<=>..\n.###..\n......\n");
    }

    #[test]
    fn run_closed_by_wall() {
        let g = classified(&["...#..", "######", "......"]);
        assert_eq!(g.render(), "<=>#<.\n#####.\n......\n");
    }

    #[test]
    fn solo_on_top_of_single_block() {
        let g = classified(&["......", "....#.", "######", "......"]);
        assert_eq!(g.render(), "....o.\n<==>#.\n#####.\n......\n");
    }

    #[test]
    fn solo_closed_by_ledge() {
        let g = classified(&["......", "..=...", "......"]);
        assert_eq!(g.kind(Point::new(2, 0)), NavType::Solo);
    }

    #[test]
    fn solo_closed_by_wall() {
        // One-cell pocket: support below-right, wall to the right.
        let g = classified(&["#.#...", "###...", "......"]);
        assert_eq!(g.kind(Point::new(1, 0)), NavType::Solo);
    }

    #[test]
    fn solo_when_both_closing_checks_fire() {
        // Ledge below-right and a wall to the right at the same time.
        let g = classified(&[".#....", "=.....", "......"]);
        assert_eq!(g.kind(Point::new(0, 0)), NavType::Solo);
    }

    #[test]
    fn last_row_and_column_stay_unclassified() {
        let g = classified(&["#####", "#####", "#####"]);
        for p in g.range() {
            let expected = if p.x == 4 || p.y == 2 {
                NavType::None
            } else {
                NavType::Terrain
            };
            assert_eq!(g.kind(p), expected, "at {p}");
        }
    }

    #[test]
    fn unknown_tiles_do_not_support() {
        let g = classified(&["......", "xxx###", "......"]);
        assert_eq!(g.kind(Point::new(0, 1)), NavType::None);
        assert_eq!(g.kind(Point::new(0, 0)), NavType::None);
        assert_eq!(g.kind(Point::new(3, 0)), NavType::Left);
    }

    #[test]
    fn first_layer_wins() {
        let front = layer(&["......", "..##..", "......"]);
        let back = layer(&["......", "######", "......"]);
        let mut grid = NavGrid::empty(6, 3, NavConfig::default());
        classify(&mut grid, &[front, back], &table());
        // Cells classified by the front layer keep their kind.
        assert_eq!(grid.kind(Point::new(2, 0)), NavType::Left);
        assert_eq!(grid.kind(Point::new(3, 0)), NavType::Right);
        assert_eq!(grid.kind(Point::new(2, 1)), NavType::Terrain);
        // The back layer fills in the rest.
        assert_eq!(grid.kind(Point::new(0, 1)), NavType::Terrain);
        assert_eq!(grid.kind(Point::new(0, 0)), NavType::Left);
    }

    #[test]
    fn classification_is_deterministic() {
        let rows = ["..........", "..=...##..", ".....#....", "##########"];
        assert_eq!(classified(&rows), classified(&rows));
    }
}
