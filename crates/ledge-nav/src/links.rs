//! Link building: turns a classified grid into a directed graph.

use ledge_core::Point;
use ledge_paths::chebyshev;

use crate::grid::NavGrid;
use crate::navtype::{Direction, NavLink, NavLinkType, NavType, STEP_COST};

const BOTH_WAYS: [Direction; 2] = [Direction::Left, Direction::Right];

/// Append walk, fall and jump links to every classified cell.
///
/// Links are appended, so calling this twice on the same grid duplicates
/// them.
pub(crate) fn build_links(grid: &mut NavGrid, min_jump: i32, max_jump: i32) {
    let mut pending: Vec<(Point, Vec<NavLink>)> = Vec::new();
    let mut buf = Vec::new();

    for (p, np) in grid.iter() {
        if np.kind.is_none() {
            continue;
        }
        buf.clear();
        walk_links(grid, p, np.kind, &mut buf);
        fall_links(grid, p, np.kind, &mut buf);
        jump_links(grid, p, np.kind, min_jump, max_jump, &mut buf);
        if !buf.is_empty() {
            pending.push((p, buf.clone()));
        }
    }

    for (p, links) in pending {
        grid.push_links(p, links);
    }
}

fn walk_links(grid: &NavGrid, p: Point, kind: NavType, out: &mut Vec<NavLink>) {
    for dir in BOTH_WAYS {
        if !kind.walks_towards(dir) {
            continue;
        }
        let q = p.shift(dir.dx(), 0);
        let to = grid.kind(q);
        let linked = if kind == NavType::Terrain {
            to == NavType::Terrain
        } else {
            // The neighbour must be able to walk back, i.e. belong to the
            // same run.
            to.is_surface() && to.walks_towards(dir.opposite())
        };
        if linked {
            out.push(NavLink::walk(q));
        }
    }
}

fn fall_links(grid: &NavGrid, p: Point, kind: NavType, out: &mut Vec<NavLink>) {
    let dirs: &[Direction] = match kind {
        NavType::Left => &[Direction::Left],
        NavType::Right => &[Direction::Right],
        NavType::Solo => &BOTH_WAYS,
        _ => return,
    };
    for &dir in dirs {
        let side = p.shift(dir.dx(), 0);
        if !grid.contains(side) || !grid.kind(side).is_none() {
            continue;
        }
        let landing = (side.y + 1..grid.height())
            .map(|y| Point::new(side.x, y))
            .find(|&q| !grid.kind(q).is_none());
        if let Some(q) = landing {
            out.push(NavLink::new(
                q,
                STEP_COST * (q.y - p.y),
                NavLinkType::Fall,
            ));
        }
    }
}

fn jump_links(
    grid: &NavGrid,
    p: Point,
    kind: NavType,
    min_jump: i32,
    max_jump: i32,
    out: &mut Vec<NavLink>,
) {
    if !kind.is_surface() || grid.kind(p.up()) == NavType::Terrain {
        return;
    }
    for dy in -max_jump..=0 {
        for dx in (-max_jump..=-min_jump).chain(min_jump..=max_jump) {
            let q = p.shift(dx, dy);
            if !grid.kind(q).is_surface() {
                continue;
            }
            if dy == 0 && walk_connected(grid, p, q) {
                continue;
            }
            if !line_clear(grid, p, q) {
                continue;
            }
            out.push(NavLink::new(
                q,
                STEP_COST * chebyshev(p, q),
                NavLinkType::Jump,
            ));
        }
    }
}

/// Whether every cell strictly between `a` and `b` on their shared row is
/// classified.
fn walk_connected(grid: &NavGrid, a: Point, b: Point) -> bool {
    let (lo, hi) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
    (lo + 1..hi).all(|x| !grid.kind(Point::new(x, a.y)).is_none())
}

/// Whether the Bresenham line from `from` to `to` crosses no terrain cell.
/// Endpoints are not checked.
fn line_clear(grid: &NavGrid, from: Point, to: Point) -> bool {
    line_between(from, to).all(|q| grid.kind(q) != NavType::Terrain)
}

/// Cells of the Bresenham line from `from` to `to`, endpoints excluded.
fn line_between(from: Point, to: Point) -> impl Iterator<Item = Point> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cur = from;

    std::iter::from_fn(move || {
        if cur == to {
            return None;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cur.x += sx;
        }
        if e2 <= dx {
            err += dx;
            cur.y += sy;
        }
        Some(cur)
    })
    .take_while(move |&q| q != to)
}
