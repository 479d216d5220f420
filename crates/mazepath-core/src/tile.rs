//! The [`Tile`] cell marker.

use std::fmt;

/// What occupies a single maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Where the search begins.
    Start,
    /// Where the search ends.
    Goal,
    /// Walkable floor.
    #[default]
    Open,
    /// Impassable cell.
    Wall,
}

impl Tile {
    /// Whether a walker may step onto this tile. Only walls block.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Decode a text character.
    ///
    /// `S` is the start, `E` or `G` the goal, `.` or `0` open floor and
    /// `#` or `1` a wall.
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            'S' => Some(Tile::Start),
            'E' | 'G' => Some(Tile::Goal),
            '.' | '0' => Some(Tile::Open),
            '#' | '1' => Some(Tile::Wall),
            _ => None,
        }
    }

    /// Canonical text character, the inverse of [`from_char`](Self::from_char).
    pub const fn to_char(self) -> char {
        match self {
            Tile::Start => 'S',
            Tile::Goal => 'E',
            Tile::Open => '.',
            Tile::Wall => '#',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
