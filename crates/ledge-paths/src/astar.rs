use std::collections::BinaryHeap;

use ledge_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, NodeRef, PathNode, UNREACHABLE};
use crate::traits::AstarPather;

impl<K: Copy + Default> PathRange<K> {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Returns every node of the path including both endpoints, each with
    /// its cumulative cost and the kind of edge that entered it, or `None`
    /// if `to` cannot be reached within the range.
    pub fn astar_path<P: AstarPather<Kind = K>>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<PathNode<K>>> {
        self.expanded = 0;
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![PathNode {
                pos: from,
                cost: 0,
                kind: K::default(),
            }]);
        }

        // Lazily invalidate every node of the previous search.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = NO_PARENT;
            node.kind = K::default();
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.astar_nodes[start_idx].f,
        });

        let mut ebuf = std::mem::take(&mut self.ebuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Stale heap entry: the node was closed or improved since.
            if self.astar_nodes[ci].generation != cur_gen
                || !self.astar_nodes[ci].open
                || current.f != self.astar_nodes[ci].f
            {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.astar_nodes[ci].open = false;
            self.expanded += 1;
            let current_g = self.astar_nodes[ci].g;
            let current_point = self.point(ci);

            ebuf.clear();
            pather.neighbors(current_point, &mut ebuf);

            for edge in ebuf.iter() {
                let Some(ni) = self.idx(edge.to) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(edge.cost.max(0));

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.f = tentative_g.saturating_add(pather.estimate(edge.to, to));
                n.parent = ci;
                n.kind = edge.kind;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.ebuf = ebuf;

        if !found {
            return None;
        }

        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            let n = &self.astar_nodes[ci];
            path.push(PathNode {
                pos: self.point(ci),
                cost: n.g,
                kind: n.kind,
            });
            ci = n.parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::chebyshev;
    use crate::traits::{Edge, Pather};
    use ledge_core::Range;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    enum Move {
        #[default]
        Start,
        Step,
        Hop,
    }

    /// Open field with 4-way steps, optional walls and hop edges.
    struct Field {
        rng: Range,
        walls: Vec<Point>,
        hops: Vec<(Point, Point, i32)>,
    }

    impl Pather for Field {
        type Kind = Move;
        fn neighbors(&self, p: Point, buf: &mut Vec<Edge<Move>>) {
            for n in [p.up(), p.right(), p.down(), p.left()] {
                if self.rng.contains(n) && !self.walls.contains(&n) {
                    buf.push(Edge::new(n, 10, Move::Step));
                }
            }
            for &(a, b, c) in &self.hops {
                if a == p {
                    buf.push(Edge::new(b, c, Move::Hop));
                }
            }
        }
    }

    impl AstarPather for Field {
        fn estimate(&self, from: Point, to: Point) -> i32 {
            10 * chebyshev(from, to)
        }
    }

    fn field(w: i32, h: i32) -> Field {
        Field {
            rng: Range::of_size(w, h),
            walls: Vec::new(),
            hops: Vec::new(),
        }
    }

    #[test]
    fn straight_line() {
        let f = field(6, 1);
        let mut pr = PathRange::new(f.rng);
        let path = pr
            .astar_path(&f, Point::new(0, 0), Point::new(5, 0))
            .unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path[0].kind, Move::Start);
        assert_eq!(path[0].cost, 0);
        assert_eq!(path[5].cost, 50);
        assert!(path[1..].iter().all(|n| n.kind == Move::Step));
    }

    #[test]
    fn same_start_and_goal() {
        let f = field(3, 3);
        let mut pr = PathRange::new(f.rng);
        let path = pr
            .astar_path(&f, Point::new(1, 1), Point::new(1, 1))
            .unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(pr.last_expanded(), 0);
    }

    #[test]
    fn walled_off_goal_is_none() {
        let mut f = field(5, 3);
        f.walls = vec![Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)];
        let mut pr = PathRange::new(f.rng);
        assert!(pr.astar_path(&f, Point::new(0, 1), Point::new(4, 1)).is_none());
        assert!(pr.last_expanded() > 0);
    }

    #[test]
    fn out_of_range_endpoint_is_none() {
        let f = field(3, 3);
        let mut pr = PathRange::new(f.rng);
        assert!(pr.astar_path(&f, Point::new(0, 0), Point::new(9, 9)).is_none());
        assert!(pr.astar_path(&f, Point::new(-1, 0), Point::new(1, 1)).is_none());
    }

    #[test]
    fn takes_cheaper_hop_and_reports_its_kind() {
        let mut f = field(8, 1);
        f.hops = vec![(Point::new(1, 0), Point::new(6, 0), 20)];
        let mut pr = PathRange::new(f.rng);
        let path = pr
            .astar_path(&f, Point::new(0, 0), Point::new(7, 0))
            .unwrap();
        let kinds: Vec<_> = path.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![Move::Start, Move::Step, Move::Hop, Move::Step]);
        assert_eq!(path.last().unwrap().cost, 40);
    }

    #[test]
    fn ignores_expensive_hop() {
        let mut f = field(8, 1);
        f.hops = vec![(Point::new(1, 0), Point::new(6, 0), 500)];
        let mut pr = PathRange::new(f.rng);
        let path = pr
            .astar_path(&f, Point::new(0, 0), Point::new(7, 0))
            .unwrap();
        assert!(path.iter().all(|n| n.kind != Move::Hop));
        assert_eq!(path.last().unwrap().cost, 70);
    }

    #[test]
    fn reused_range_gives_same_answer() {
        let mut f = field(6, 6);
        f.walls = vec![Point::new(3, 1), Point::new(3, 2), Point::new(3, 3)];
        let mut pr = PathRange::new(f.rng);
        let a = pr
            .astar_path(&f, Point::new(0, 2), Point::new(5, 2))
            .unwrap();
        let _ = pr.astar_path(&f, Point::new(5, 5), Point::new(0, 0));
        let b = pr
            .astar_path(&f, Point::new(0, 2), Point::new(5, 2))
            .unwrap();
        assert_eq!(a.last().unwrap().cost, b.last().unwrap().cost);
        assert_eq!(a.last().unwrap().cost, 90);
    }
}
