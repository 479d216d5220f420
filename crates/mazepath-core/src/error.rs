//! Maze configuration errors.

use std::fmt;

use crate::geom::Coord;

/// One of the two markers a solvable maze must carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start (S)"),
            Self::Goal => f.write_str("goal (E)"),
        }
    }
}

/// Errors raised while building a maze or preparing a search over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The maze has no start or no goal marker.
    MissingEndpoint(Endpoint),
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A text character that is not a known tile.
    InvalidTile { ch: char, pos: Coord },
    /// The requested dimensions exceed [`MAX_CELLS`](crate::maze::MAX_CELLS).
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(which) => write!(f, "maze has no {which} marker"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "maze contains invalid tile '{ch}' at {pos}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "maze of {rows}x{cols} cells is too large")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            MazeError::MissingEndpoint(Endpoint::Goal).to_string(),
            "maze has no goal (E) marker"
        );
        assert_eq!(
            MazeError::Ragged {
                row: 2,
                expected: 5,
                found: 4
            }
            .to_string(),
            "maze row 2 has 4 cells, expected 5"
        );
        let err = MazeError::InvalidTile {
            ch: 'x',
            pos: Coord::new(1, 3),
        };
        assert_eq!(err.to_string(), "maze contains invalid tile 'x' at (1, 3)");
        assert_eq!(
            MazeError::TooLarge {
                rows: 70_000,
                cols: 70_000
            }
            .to_string(),
            "maze of 70000x70000 cells is too large"
        );
    }
}
