use mazepath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Admissible and consistent for unit-cost 4-directional movement, which is
/// what makes A* return optimal paths.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
