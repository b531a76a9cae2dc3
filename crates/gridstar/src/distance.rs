use crate::geom::Point;

/// Manhattan (L1) distance between two cells.
///
/// This is the search heuristic: admissible and consistent for unit-cost
/// orthogonal moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
