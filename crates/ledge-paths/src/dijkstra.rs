use std::collections::BinaryHeap;

use ledge_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, NodeRef, PathNode, UNREACHABLE};
use crate::traits::Pather;

impl<K: Copy + Default> PathRange<K> {
    /// Compute a multi-source Dijkstra cost map.
    ///
    /// Every source starts at cost 0. Positions whose cost would exceed
    /// `max_cost` are not expanded. Returns every reached node in the order
    /// it was settled (non-decreasing cost), each tagged with the kind of
    /// the edge that reached it.
    pub fn dijkstra_map<P: Pather<Kind = K>>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_cost: i32,
    ) -> &[PathNode<K>] {
        self.dijkstra_results.clear();
        self.dijkstra_generation = self.dijkstra_generation.wrapping_add(1);
        let cur_gen = self.dijkstra_generation;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                let n = &mut self.dijkstra_nodes[si];
                n.g = 0;
                n.f = 0;
                n.parent = NO_PARENT;
                n.kind = K::default();
                n.generation = cur_gen;
                n.open = true;
                open.push(NodeRef { idx: si, f: 0 });
            }
        }

        let mut ebuf = std::mem::take(&mut self.ebuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.dijkstra_nodes[ci];
            if cn.generation != cur_gen || !cn.open || cn.g != current.f {
                continue;
            }
            let current_g = cn.g;
            let kind = cn.kind;
            self.dijkstra_nodes[ci].open = false;

            let cp = self.point(ci);
            self.dijkstra_results.push(PathNode {
                pos: cp,
                cost: current_g,
                kind,
            });

            ebuf.clear();
            pather.neighbors(cp, &mut ebuf);

            for edge in ebuf.iter() {
                let Some(ni) = self.idx(edge.to) else {
                    continue;
                };
                let tentative = current_g.saturating_add(edge.cost.max(0));
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.dijkstra_nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative;
                n.f = tentative;
                n.parent = ci;
                n.kind = edge.kind;
                n.open = true;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
            }
        }

        self.ebuf = ebuf;
        &self.dijkstra_results
    }

    /// Cost at `p` from the last [`dijkstra_map`](Self::dijkstra_map) call,
    /// or [`UNREACHABLE`] if `p` was not reached or is out of range.
    pub fn dijkstra_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) if self.dijkstra_nodes[i].generation == self.dijkstra_generation => {
                self.dijkstra_nodes[i].g
            }
            _ => UNREACHABLE,
        }
    }
}
