use crate::geom::Point;
use crate::store::PathFinder;

/// Extra cost added to a cell's `f` score whenever the search adopts a new
/// route to it.
///
/// Closures `FnMut(&PathFinder, Point) -> u32` implement this directly;
/// any user data they need is captured. Returning values that make
/// `g + manhattan + extra` overestimate the remaining cost voids the
/// optimality guarantee.
pub trait CostFn {
    /// Extra cost for the cell at `p` (column `p.x`, row `p.y`).
    fn extra_cost(&mut self, grid: &PathFinder, p: Point) -> u32;
}

impl<F> CostFn for F
where
    F: FnMut(&PathFinder, Point) -> u32,
{
    #[inline]
    fn extra_cost(&mut self, grid: &PathFinder, p: Point) -> u32 {
        self(grid, p)
    }
}
