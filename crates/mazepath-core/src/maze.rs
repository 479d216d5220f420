//! The [`Maze`] type: a rectangular grid of [`Tile`]s.
//!
//! Besides storage, `Maze` is the grid accessor used by the search: it
//! locates the start and goal markers and enumerates the passable cardinal
//! neighbours of a cell in a fixed order.

use std::fmt;

use crate::error::{Endpoint, MazeError};
use crate::geom::Coord;
use crate::tile::Tile;

/// Largest number of cells a maze may hold. Keeps every flat index and
/// `row * cols` product within `i32`.
pub const MAX_CELLS: usize = i32::MAX as usize;

fn checked_len(rows: usize, cols: usize) -> Result<usize, MazeError> {
    rows.checked_mul(cols)
        .filter(|&n| n <= MAX_CELLS)
        .ok_or(MazeError::TooLarge { rows, cols })
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A rectangular grid of tiles stored row-major in a flat buffer.
///
/// The search never mutates a maze; [`set`](Maze::set) exists for builders
/// and generators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Maze {
    tiles: Vec<Tile>,
    rows: i32,
    cols: i32,
}

impl Maze {
    /// Create a new maze of the given dimensions, filled with open floor.
    ///
    /// Negative dimensions count as zero. Fails with
    /// [`MazeError::TooLarge`] if the maze would hold more than
    /// [`MAX_CELLS`] cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let len = checked_len(rows as usize, cols as usize)?;
        Ok(Self {
            tiles: vec![Tile::Open; len],
            rows,
            cols,
        })
    }

    /// Build a maze from rows of tiles.
    ///
    /// Every row must have the same width as the first one.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Tile]>,
    {
        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (r, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                Some(w) if w != row.len() => {
                    return Err(MazeError::Ragged {
                        row: r,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
                None => width = Some(row.len()),
            }
            tiles.extend_from_slice(row);
            height += 1;
        }

        let cols = width.unwrap_or(0);
        let height = if cols == 0 { 0 } else { height };
        checked_len(height, cols)?;
        Ok(Self {
            tiles,
            rows: height as i32,
            cols: cols as i32,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns (the width of every row).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the maze has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the maze.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Coord) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Coord) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Set the tile at `p`. No-op if `p` is outside the maze.
    pub fn set(&mut self, p: Coord, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Whether `p` is inside the maze and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Coord) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// One row as a slice, or `None` if `row` is out of range.
    pub fn row(&self, row: i32) -> Option<&[Tile]> {
        if row < 0 || row >= self.rows {
            return None;
        }
        let cols = self.cols as usize;
        let start = row as usize * cols;
        Some(&self.tiles[start..start + cols])
    }

    /// Row-major iterator over `(Coord, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.coord(i), t))
    }

    /// First coordinate, in row-major order, carrying `tile`.
    pub fn find(&self, tile: Tile) -> Option<Coord> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|i| self.coord(i))
    }

    /// Locate the start and goal markers.
    ///
    /// The first marker of each kind in row-major order wins. A maze missing
    /// either one cannot be searched.
    pub fn locate_markers(&self) -> Result<(Coord, Coord), MazeError> {
        let start = self
            .find(Tile::Start)
            .ok_or(MazeError::MissingEndpoint(Endpoint::Start))?;
        let goal = self
            .find(Tile::Goal)
            .ok_or(MazeError::MissingEndpoint(Endpoint::Goal))?;
        Ok((start, goal))
    }

    /// Append the passable neighbours of `p` into `buf`, in the order up,
    /// down, left, right. The caller clears `buf` before calling.
    ///
    /// The order decides which of several equally promising cells is
    /// discovered first, and therefore preferred on ties.
    pub fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

impl fmt::Display for Maze {
    /// Renders the maze back into the text format accepted by
    /// [`Maze::parse`](Maze::parse).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                f.write_str("\n")?;
            }
            for &t in self.row(r).unwrap_or_default() {
                write!(f, "{t}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<&[Tile]> = (0..self.rows).filter_map(|r| self.row(r)).collect();
        rows.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Tile>>::deserialize(deserializer)?;
        Maze::from_rows(rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_serializes_as_rows() {
        let m = Maze::from_rows([[Tile::Start, Tile::Wall], [Tile::Open, Tile::Goal]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"[["Start","Wall"],["Open","Goal"]]"#);
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn ragged_json_is_rejected() {
        let res: Result<Maze, _> = serde_json::from_str(r#"[["Start","Wall"],["Goal"]]"#);
        assert!(res.is_err());
    }
}
