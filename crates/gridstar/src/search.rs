//! A* over the grid store.
//!
//! The open set is not a priority queue: every iteration scans all cells
//! for the open one with the lowest `f` score, taking the lowest linear
//! index on ties. This keeps memory fixed and makes the expansion order
//! fully deterministic.

use log::{debug, trace, warn};

use crate::distance::manhattan;
use crate::store::PathFinder;
use crate::traits::CostFn;

/// Summary of one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Whether a route from start to end was found.
    pub found: bool,
    /// Cells moved from the open set to the closed set.
    pub expansions: usize,
    /// Score updates, i.e. times a better route to a cell was adopted.
    pub relaxations: usize,
}

impl PathFinder {
    /// Search for the shortest orthogonal route from start to end.
    ///
    /// On success [`has_path`](Self::has_path) becomes `true` and the
    /// interior cells of the route are marked (see
    /// [`is_path`](Self::is_path)). Call [`clear_path`](Self::clear_path)
    /// between searches on the same store.
    pub fn find(&mut self) -> SearchStats {
        self.run(None)
    }

    /// Like [`find`](Self::find), adding `cost`'s extra cost to the `f` score
    /// of every cell whose route is updated.
    pub fn find_with<C: CostFn>(&mut self, cost: &mut C) -> SearchStats {
        self.run(Some(cost as &mut dyn CostFn))
    }

    fn run(&mut self, mut cost: Option<&mut dyn CostFn>) -> SearchStats {
        if self.is_dirty() {
            warn!("search started without clear_path; results may be stale");
        }
        debug!(
            "search {} -> {} on {}x{} grid",
            self.start(),
            self.end(),
            self.cols,
            self.rows
        );

        let mut stats = SearchStats::default();
        self.nodes[self.start].open = true;

        loop {
            let Some(current) = self.lowest_in_open_set() else {
                self.has_path = false;
                break;
            };

            if current == self.end {
                self.reconstruct_path();
                self.has_path = true;
                break;
            }

            self.nodes[current].open = false;
            self.nodes[current].closed = true;
            stats.expansions += 1;
            trace!("expand {} g={}", self.point(current), self.nodes[current].g);

            for n in self.neighbors(current).into_iter().flatten() {
                if self.nodes[n].closed {
                    continue;
                }
                if !self.nodes[n].passable {
                    self.nodes[n].closed = true;
                    continue;
                }
                let tentative_g = self.nodes[current].g.saturating_add(1);
                if self.nodes[n].open && tentative_g >= self.nodes[n].g {
                    continue;
                }

                let np = self.point(n);
                let h = manhattan(np, self.point(self.end));
                let node = &mut self.nodes[n];
                node.parent = current;
                node.g = tentative_g;
                node.f = tentative_g.saturating_add(h);
                if let Some(cost) = cost.as_deref_mut() {
                    let extra = cost.extra_cost(&*self, np);
                    self.nodes[n].f = self.nodes[n].f.saturating_add(extra);
                }
                self.nodes[n].open = true;
                stats.relaxations += 1;
            }
        }

        stats.found = self.has_path;
        debug!(
            "search {}: {} expansions, {} relaxations",
            if stats.found { "found a path" } else { "exhausted" },
            stats.expansions,
            stats.relaxations
        );
        stats
    }

    /// Open cell with the lowest `f`, first in scan order on ties. `None`
    /// when the open set is empty.
    fn lowest_in_open_set(&self) -> Option<usize> {
        let mut lowest: Option<(usize, u32)> = None;
        for (i, n) in self.nodes[..self.len()].iter().enumerate() {
            if !n.open {
                continue;
            }
            match lowest {
                Some((_, f)) if n.f >= f => {}
                _ => lowest = Some((i, n.f)),
            }
        }
        lowest.map(|(i, _)| i)
    }

    /// Top, right, bottom, left. Left and right are dropped at the first and
    /// last column; top and bottom only by the overall grid bound.
    fn neighbors(&self, current: usize) -> [Option<usize>; 4] {
        let len = self.len();
        let in_grid = |i: usize| (i < len).then_some(i);
        let top = current.checked_sub(self.cols).and_then(in_grid);
        let right = if (current + 1) % self.cols == 0 {
            None
        } else {
            in_grid(current + 1)
        };
        let bottom = in_grid(current + self.cols);
        let left = if current % self.cols == 0 {
            None
        } else {
            in_grid(current - 1)
        };
        [top, right, bottom, left]
    }

    /// Walk parents back from the end, marking every parent except the
    /// start. The end itself is not marked.
    fn reconstruct_path(&mut self) {
        let mut i = self.end;
        while i != self.start {
            let parent = self.nodes[i].parent;
            if parent != self.start {
                self.nodes[parent].on_path = true;
            }
            i = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grid(cols: usize, rows: usize, walls: &[Point]) -> PathFinder {
        let mut pf = PathFinder::new(cols, rows).unwrap();
        pf.fill(|_, p| !walls.contains(&p));
        pf
    }

    fn search(pf: &mut PathFinder, start: Point, end: Point) -> SearchStats {
        pf.set_start(start);
        pf.set_end(end);
        pf.find()
    }

    fn marked(pf: &PathFinder) -> Vec<Point> {
        let mut v = Vec::new();
        for y in 0..pf.rows() as i32 {
            for x in 0..pf.cols() as i32 {
                if pf.is_path(Point::new(x, y)) {
                    v.push(Point::new(x, y));
                }
            }
        }
        v
    }

    #[test]
    fn three_by_three_open_grid() {
        let mut pf = grid(3, 3, &[]);
        let stats = search(&mut pf, Point::new(0, 0), Point::new(2, 2));
        assert!(stats.found);
        assert!(pf.has_path());
        assert_eq!(pf.g_score(Point::new(2, 2)), 4);
        assert_eq!(pf.heuristic_score(Point::new(2, 2)), 4);
        // Ties resolve to the lowest index, so the route hugs the top row.
        assert_eq!(
            marked(&pf),
            vec![Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)]
        );
        assert_eq!(stats.expansions, 8);
        assert!(!pf.is_path(Point::new(0, 0)));
        assert!(!pf.is_path(Point::new(2, 2)));
    }

    #[test]
    fn path_lists_both_endpoints() {
        let mut pf = grid(3, 3, &[]);
        search(&mut pf, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(
            pf.path(),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn tie_break_prefers_lowest_index() {
        // Two equal routes around the wall at (1, 1); the upper one is
        // discovered through lower indices.
        let mut pf = grid(3, 3, &[Point::new(1, 1)]);
        search(&mut pf, Point::new(0, 1), Point::new(2, 1));
        assert!(pf.has_path());
        assert_eq!(pf.g_score(Point::new(2, 1)), 4);
        assert_eq!(
            marked(&pf),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn start_equals_end() {
        let mut pf = grid(4, 4, &[]);
        let stats = search(&mut pf, Point::new(2, 1), Point::new(2, 1));
        assert!(stats.found);
        assert_eq!(stats.expansions, 0);
        assert!(marked(&pf).is_empty());
        assert_eq!(pf.path(), vec![Point::new(2, 1)]);
    }

    #[test]
    fn single_cell_grid() {
        let mut pf = grid(1, 1, &[]);
        let stats = search(&mut pf, Point::ZERO, Point::ZERO);
        assert_eq!(
            stats,
            SearchStats {
                found: true,
                expansions: 0,
                relaxations: 0,
            }
        );
    }

    #[test]
    fn walled_in_start_has_no_path() {
        let mut pf = PathFinder::new(5, 5).unwrap();
        pf.fill(|_, p| p == Point::new(2, 2));
        let stats = search(&mut pf, Point::new(2, 2), Point::new(4, 0));
        assert!(!stats.found);
        assert!(!pf.has_path());
        assert_eq!(stats.expansions, 1);
        assert!(marked(&pf).is_empty());
        assert!(pf.path().is_empty());
        // Walls met during expansion are closed without being expanded.
        assert!(pf.is_closed(Point::new(2, 1)));
        assert!(pf.is_closed(Point::new(1, 2)));
        assert!(!pf.is_closed(Point::new(0, 0)));
    }

    #[test]
    fn no_path_when_end_is_origin_and_unreachable() {
        let mut pf = grid(3, 1, &[Point::new(1, 0)]);
        let stats = search(&mut pf, Point::new(2, 0), Point::new(0, 0));
        assert!(!stats.found);
        assert!(!pf.has_path());
    }

    #[test]
    fn impassable_end_is_unreachable() {
        let mut pf = grid(3, 3, &[Point::new(2, 2)]);
        assert!(!search(&mut pf, Point::new(0, 0), Point::new(2, 2)).found);
    }

    #[test]
    fn impassable_start_still_expands() {
        let mut pf = grid(3, 1, &[Point::new(0, 0)]);
        assert!(search(&mut pf, Point::new(0, 0), Point::new(2, 0)).found);
        assert_eq!(marked(&pf), vec![Point::new(1, 0)]);
    }

    #[test]
    fn no_wraparound_between_rows() {
        // (2, 0) and (0, 1) are adjacent indices but not neighbours.
        let mut pf = grid(3, 2, &[Point::new(1, 0), Point::new(1, 1)]);
        assert!(!search(&mut pf, Point::new(2, 0), Point::new(0, 1)).found);
    }

    #[test]
    fn detour_around_wall() {
        //  S . . . .
        //  # # # # .
        //  E . . . .
        let walls: Vec<Point> = (0..4).map(|x| Point::new(x, 1)).collect();
        let mut pf = grid(5, 3, &walls);
        search(&mut pf, Point::new(0, 0), Point::new(0, 2));
        assert!(pf.has_path());
        assert_eq!(pf.g_score(Point::new(0, 2)), 10);
        assert_eq!(marked(&pf).len(), 9);
    }

    #[test]
    fn empty_grids_give_manhattan_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pf = grid(17, 11, &[]);
        for _ in 0..50 {
            let s = Point::new(rng.random_range(0..17), rng.random_range(0..11));
            let e = Point::new(rng.random_range(0..17), rng.random_range(0..11));
            pf.clear_path();
            search(&mut pf, s, e);
            assert!(pf.has_path());
            let len = manhattan(s, e);
            assert_eq!(pf.g_score(e), len);
            assert_eq!(marked(&pf).len() as u32, len.saturating_sub(1));
        }
    }

    #[test]
    fn random_maps_keep_path_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..30 {
            let mut pf = PathFinder::new(20, 20).unwrap();
            pf.fill(|_, _| rng.random::<f64>() <= 0.7);
            let s = Point::new(rng.random_range(0..20), rng.random_range(0..20));
            let e = Point::new(rng.random_range(0..20), rng.random_range(0..20));
            pf.set_passable(s, true);
            pf.set_passable(e, true);
            if !search(&mut pf, s, e).found {
                assert!(marked(&pf).is_empty());
                continue;
            }
            let path = pf.path();
            assert_eq!(path.len() as u32, pf.g_score(e) + 1);
            assert!(pf.g_score(e) >= manhattan(s, e));
            for w in path.windows(2) {
                assert_eq!(manhattan(w[0], w[1]), 1);
                assert!(pf.is_passable(w[1]));
            }
            if s != e {
                assert_eq!(marked(&pf).len() as u32, pf.g_score(e) - 1);
            }
        }
    }

    #[test]
    fn rerun_after_clear_is_identical() {
        let walls = [Point::new(1, 0), Point::new(1, 1), Point::new(3, 2)];
        let mut pf = grid(5, 4, &walls);
        let first = search(&mut pf, Point::new(0, 0), Point::new(4, 3));
        let snapshot = pf.nodes.clone();

        pf.clear_path();
        let second = search(&mut pf, Point::new(0, 0), Point::new(4, 3));
        assert_eq!(first, second);
        assert_eq!(pf.nodes, snapshot);
    }

    #[test]
    fn cost_callback_steers_route() {
        // Penalize the top row so the route goes through the middle one.
        let mut pf = grid(3, 3, &[]);
        pf.set_start(Point::new(0, 0));
        pf.set_end(Point::new(2, 2));
        let mut calls = 0;
        let stats = pf.find_with(&mut |_: &PathFinder, p: Point| -> u32 {
            calls += 1;
            if p.y == 0 { 5 } else { 0 }
        });
        assert!(stats.found);
        assert_eq!(calls, stats.relaxations);
        assert_eq!(pf.g_score(Point::new(2, 2)), 4);
        assert_eq!(
            marked(&pf),
            vec![Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)]
        );
        assert_eq!(pf.heuristic_score(Point::new(1, 0)), 1 + 3 + 5);
    }

    #[test]
    fn cost_callback_receives_column_and_row() {
        let mut pf = grid(4, 2, &[]);
        pf.set_start(Point::new(0, 0));
        pf.set_end(Point::new(3, 1));
        let mut seen = Vec::new();
        pf.find_with(&mut |grid: &PathFinder, p: Point| -> u32 {
            assert!(grid.contains(p));
            seen.push(p);
            0
        });
        assert!(seen.contains(&Point::new(1, 0)));
        assert!(seen.contains(&Point::new(0, 1)));
    }
}
