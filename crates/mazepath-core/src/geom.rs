//! The [`Coord`] type, a (row, column) maze position.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A maze position. Rows grow down, columns grow right.
///
/// The derived ordering is row-major (row first, then column).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// One row up.
    pub const UP: Self = Self::new(-1, 0);
    /// One row down.
    pub const DOWN: Self = Self::new(1, 0);
    /// One column left.
    pub const LEFT: Self = Self::new(0, -1);
    /// One column right.
    pub const RIGHT: Self = Self::new(0, 1);

    /// Cardinal unit steps in exploration order: up, down, left, right.
    pub const CARDINALS: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours (up, down, left, right), unfiltered.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one step away along a single axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Coord ---

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let c = Coord::new(3, 5);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(2, 5),
                Coord::new(4, 5),
                Coord::new(3, 4),
                Coord::new(3, 6),
            ]
        );
    }

    #[test]
    fn adjacency_is_single_axis_unit_step() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(2, 2)));
        assert!(!c.is_adjacent(Coord::new(1, 3)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn hashes_by_value() {
        let mut set = HashSet::new();
        set.insert(Coord::new(2, 3));
        assert!(set.contains(&Coord::from((2, 3))));
    }

    #[test]
    fn display_and_arithmetic() {
        let c = Coord::new(2, 3) + Coord::RIGHT - Coord::UP;
        assert_eq!(c, Coord::new(3, 4));
        assert_eq!(c.to_string(), "(3, 4)");
        assert_eq!(<(i32, i32)>::from(c), (3, 4));
    }
}
