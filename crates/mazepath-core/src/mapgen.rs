//! Random maze generation.
//!
//! Provides two generators, both placing the start in the top-left corner
//! and the goal in the bottom-right corner:
//! - **Scatter**: every other cell independently becomes a wall with a given
//!   probability. The result may or may not be solvable.
//! - **Carved**: a scatter maze through which a random monotone corridor
//!   (steps only down or right) is carved, so a path always exists.

use rand::Rng;

use crate::error::MazeError;
use crate::geom::Coord;
use crate::maze::Maze;
use crate::tile::Tile;

/// Maze generator driven by a caller-supplied random number generator.
///
/// Seeding the RNG (e.g. `StdRng::seed_from_u64`) makes the output
/// reproducible.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Scatter walls over a `rows × cols` maze.
    ///
    /// Each cell except the two corners becomes a wall with probability
    /// `wall_pct` (clamped to 0.0 to 1.0; NaN means no walls). Dimensions are
    /// clamped to at least one row and two columns so that start and goal
    /// never overlap.
    ///
    /// Fails with [`MazeError::TooLarge`] if the maze would not fit.
    pub fn scatter(&mut self, rows: i32, cols: i32, wall_pct: f64) -> Result<Maze, MazeError> {
        let rows = rows.max(1);
        let cols = cols.max(2);
        let wall_pct = if wall_pct.is_nan() {
            0.0
        } else {
            wall_pct.clamp(0.0, 1.0)
        };

        let mut maze = Maze::new(rows, cols)?;
        for r in 0..rows {
            for c in 0..cols {
                if self.rng.random_bool(wall_pct) {
                    maze.set(Coord::new(r, c), Tile::Wall);
                }
            }
        }
        maze.set(Coord::ZERO, Tile::Start);
        maze.set(Coord::new(rows - 1, cols - 1), Tile::Goal);
        Ok(maze)
    }

    /// Scatter walls, then carve a random down/right corridor from start to
    /// goal. The returned maze always has a path.
    ///
    /// Returns the maze and the number of walls the corridor removed.
    pub fn carved(
        &mut self,
        rows: i32,
        cols: i32,
        wall_pct: f64,
    ) -> Result<(Maze, usize), MazeError> {
        let mut maze = self.scatter(rows, cols, wall_pct)?;
        let goal = Coord::new(maze.rows() - 1, maze.cols() - 1);
        let mut pos = Coord::ZERO;
        let mut carved = 0usize;

        while pos != goal {
            let step = if pos.row == goal.row {
                Coord::RIGHT
            } else if pos.col == goal.col || self.rng.random_bool(0.5) {
                Coord::DOWN
            } else {
                Coord::RIGHT
            };
            pos = pos + step;
            if maze.at(pos) == Some(Tile::Wall) {
                maze.set(pos, Tile::Open);
                carved += 1;
            }
        }

        Ok((maze, carved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_places_markers_in_corners() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
        let m = mg.scatter(6, 9, 0.3).unwrap();
        assert_eq!(m.rows(), 6);
        assert_eq!(m.cols(), 9);
        assert_eq!(
            m.locate_markers(),
            Ok((Coord::new(0, 0), Coord::new(5, 8)))
        );
    }

    #[test]
    fn scatter_is_reproducible_for_a_seed() {
        let a = MazeGen::new(StdRng::seed_from_u64(42)).scatter(8, 8, 0.4).unwrap();
        let b = MazeGen::new(StdRng::seed_from_u64(42)).scatter(8, 8, 0.4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn scatter_extremes() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(1));
        let open = mg.scatter(4, 4, 0.0).unwrap();
        assert_eq!(open.iter().filter(|&(_, t)| t == Tile::Wall).count(), 0);

        let full = mg.scatter(4, 4, 1.0).unwrap();
        // everything but the two markers
        assert_eq!(full.iter().filter(|&(_, t)| t == Tile::Wall).count(), 14);
    }

    #[test]
    fn tiny_dimensions_are_clamped() {
        let m = MazeGen::new(StdRng::seed_from_u64(3)).scatter(0, 1, 0.5).unwrap();
        assert_eq!((m.rows(), m.cols()), (1, 2));
        assert!(m.locate_markers().is_ok());
    }

    #[test]
    fn nan_density_means_no_walls() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(1));
        let m = mg.scatter(3, 3, f64::NAN).unwrap();
        assert_eq!(m.iter().filter(|&(_, t)| t == Tile::Wall).count(), 0);
        let (m, carved) = mg.carved(3, 3, f64::NAN).unwrap();
        assert_eq!(carved, 0);
        assert!(m.locate_markers().is_ok());
    }

    #[test]
    fn infinite_density_is_clamped() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(2));
        let full = mg.scatter(3, 3, f64::INFINITY).unwrap();
        assert_eq!(full.iter().filter(|&(_, t)| t == Tile::Wall).count(), 7);
        let open = mg.scatter(3, 3, f64::NEG_INFINITY).unwrap();
        assert_eq!(open.iter().filter(|&(_, t)| t == Tile::Wall).count(), 0);
    }

    #[test]
    fn oversized_mazes_are_an_error() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(4));
        assert_eq!(
            mg.scatter(70_000, 70_000, 0.3),
            Err(MazeError::TooLarge {
                rows: 70_000,
                cols: 70_000
            })
        );
        assert!(mg.carved(70_000, 70_000, 0.3).is_err());
    }

    #[test]
    fn carved_corridor_is_walkable() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(9));
        let (m, _) = mg.carved(7, 11, 1.0).unwrap();
        // With a fully walled start, only the corridor is open:
        // exactly rows + cols - 1 passable cells.
        let passable = m.iter().filter(|&(_, t)| t.is_passable()).count();
        assert_eq!(passable, 7 + 11 - 1);
    }
}
