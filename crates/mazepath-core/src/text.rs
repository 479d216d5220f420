//! Mazes written as text.
//!
//! One line per row, one character per cell:
//!
//! ```text
//! S..#
//! .#..
//! ...E
//! ```
//!
//! `S` marks the start, `E` (or `G`) the goal, `.` (or `0`) open floor and
//! `#` (or `1`) a wall. Leading/trailing whitespace is trimmed from the whole
//! string but not from individual lines.

use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Coord;
use crate::maze::Maze;
use crate::tile::Tile;

impl Maze {
    /// Parse a maze from its text form.
    ///
    /// Every line must have the same width and contain only known tile
    /// characters. An empty string yields an empty maze.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Maze::default());
        }

        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (r, line) in s.lines().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    Tile::from_char(ch).ok_or(MazeError::InvalidTile {
                        ch,
                        pos: Coord::new(r as i32, c as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Maze::from_rows(rows)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#..
...E";

    #[test]
    fn parse_and_size() {
        let m = Maze::parse(ROOM).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.at(Coord::new(0, 3)), Some(Tile::Wall));
        assert_eq!(m.at(Coord::new(2, 3)), Some(Tile::Goal));
    }

    #[test]
    fn display_round_trips() {
        let m: Maze = ROOM.parse().unwrap();
        assert_eq!(m.to_string(), ROOM);
    }

    #[test]
    fn numeric_style_is_accepted() {
        let m = Maze::parse("S01\n00E").unwrap();
        assert_eq!(m.to_string(), "S.#\n..E");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let m = Maze::parse("\n\n  S.E  \n").unwrap();
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn crlf_line_endings() {
        let m = Maze::parse("S.\r\n.E").unwrap();
        assert_eq!(m.to_string(), "S.\n.E");
    }

    #[test]
    fn invalid_tile_reports_position() {
        let err = Maze::parse("S..\n.x.\n..E").unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidTile {
                ch: 'x',
                pos: Coord::new(1, 1)
            }
        );
    }

    #[test]
    fn inconsistent_width_error() {
        let err = Maze::parse("S..\n.E").unwrap_err();
        assert!(matches!(err, MazeError::Ragged { row: 1, .. }));
    }

    #[test]
    fn empty_text_is_empty_maze() {
        let m = Maze::parse("   ").unwrap();
        assert!(m.is_empty());
    }
}
