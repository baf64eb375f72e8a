use ledge_core::Point;
use ledge_paths::{AstarPather, Edge, Pather, chebyshev};

use crate::grid::NavGrid;
use crate::navtype::{DIAGONAL_COST, NavLinkType, PathfindTerrain, STEP_COST};

/// A [`NavGrid`] seen by an agent with a given locomotion mode.
///
/// Ground agents follow the grid's links. Airborne agents may also move
/// freely between adjacent surface cells; terrain stays solid to them.
#[derive(Clone, Copy)]
pub(crate) struct NavPather<'a> {
    pub(crate) grid: &'a NavGrid,
    pub(crate) terrain: PathfindTerrain,
}

impl<'a> NavPather<'a> {
    pub(crate) fn new(grid: &'a NavGrid, terrain: PathfindTerrain) -> Self {
        Self { grid, terrain }
    }
}

impl Pather for NavPather<'_> {
    type Kind = NavLinkType;

    fn neighbors(&self, p: Point, buf: &mut Vec<Edge<NavLinkType>>) {
        if self.grid.kind(p).is_none() {
            return;
        }
        buf.extend(
            self.grid
                .links(p)
                .iter()
                .filter(|l| self.terrain.allows(l.movement))
                .filter(|l| !self.grid.kind(l.destination).is_none())
                .map(|l| Edge::new(l.destination, l.cost, l.movement)),
        );
        if self.terrain.is_airborne() {
            for q in p.neighbors_8() {
                if !self.grid.kind(q).is_surface() {
                    continue;
                }
                let cost = if q.x != p.x && q.y != p.y {
                    DIAGONAL_COST
                } else {
                    STEP_COST
                };
                buf.push(Edge::new(q, cost, NavLinkType::Unknown));
            }
        }
    }
}

impl AstarPather for NavPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        STEP_COST * chebyshev(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use crate::navtype::NavType;
    use crate::testutil::{layer, table};

    fn grid() -> NavGrid {
        NavGrid::build(
            &[layer(&[".......", "...#...", ".......", "######.", "......."])],
            &table(),
            &NavConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn ground_uses_links_only() {
        let g = grid();
        let pather = NavPather::new(&g, PathfindTerrain::Ground);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(3, 0), &mut buf);
        assert_eq!(buf.len(), g.links(Point::new(3, 0)).len());
        assert!(buf.iter().all(|e| e.kind == NavLinkType::Fall));
    }

    #[test]
    fn air_adds_free_moves() {
        let g = NavGrid::build(
            &[layer(&["......", "..#...", ".###..", "......"])],
            &table(),
            &NavConfig::default(),
        )
        .unwrap();
        let pather = NavPather::new(&g, PathfindTerrain::Air);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(2, 0), &mut buf);
        let free: Vec<_> = buf
            .iter()
            .filter(|e| e.kind == NavLinkType::Unknown)
            .map(|e| (e.to, e.cost))
            .collect();
        assert_eq!(
            free,
            vec![(Point::new(1, 1), DIAGONAL_COST), (Point::new(3, 1), DIAGONAL_COST)]
        );
    }

    #[test]
    fn air_never_enters_terrain() {
        let g = grid();
        let pather = NavPather::new(&g, PathfindTerrain::Air);
        let mut buf = Vec::new();
        // Solo on a one-tile block: the block below is solid.
        pather.neighbors(Point::new(3, 0), &mut buf);
        assert!(buf.iter().all(|e| e.kind != NavLinkType::Unknown));

        buf.clear();
        pather.neighbors(Point::new(1, 2), &mut buf);
        assert!(buf.iter().all(|e| g.kind(e.to) != NavType::Terrain));
        assert!(buf.iter().any(|e| e.to == Point::new(0, 2) && e.kind == NavLinkType::Unknown));
    }

    #[test]
    fn none_cells_are_dead_ends() {
        let g = grid();
        let mut buf = Vec::new();
        NavPather::new(&g, PathfindTerrain::Air).neighbors(Point::new(0, 0), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn estimate_never_exceeds_link_cost() {
        let g = grid();
        let pather = NavPather::new(&g, PathfindTerrain::Air);
        for (p, np) in g.iter() {
            for l in &np.links {
                assert!(pather.estimate(p, l.destination) <= l.cost);
            }
        }
    }
}
