//! **mazepath-core**: maze grids for the *mazepath* pathfinder.
//!
//! This crate provides the types the search works on: the [`Coord`]
//! position, the [`Tile`] cell marker, the rectangular [`Maze`] with its
//! grid accessor (marker lookup, passability, cardinal neighbours), a text
//! format, and a seeded random maze generator.

pub mod error;
pub mod geom;
pub mod mapgen;
pub mod maze;
pub mod text;
pub mod tile;

pub use error::{Endpoint, MazeError};
pub use geom::Coord;
pub use mapgen::MazeGen;
pub use maze::{MAX_CELLS, Maze};
pub use tile::Tile;
