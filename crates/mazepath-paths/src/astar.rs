use mazepath_core::{Coord, Maze, MazeError};

use crate::config::{FrontierKind, SearchConfig};
use crate::distance::manhattan;
use crate::frontier::{Frontier, HeapFrontier, LinearFrontier};
use crate::observer::SearchObserver;
use crate::reconstruct::{CameFrom, reconstruct};

/// Sentinel meaning "no recorded cost" in the per-search tables.
const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// How a search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The goal was reached.
    Succeeded,
    /// The frontier emptied first: start and goal are not connected.
    Exhausted,
}

/// Result of a completed search.
///
/// An empty path means "no path", which is a normal outcome and not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    path: Vec<Coord>,
    expansions: usize,
}

impl SearchOutcome {
    /// The path from start to goal, both inclusive, or empty.
    #[inline]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Take ownership of the path.
    pub fn into_path(self) -> Vec<Coord> {
        self.path
    }

    /// Path length, counted in coordinates (start and goal included).
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether no path was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// How the search ended: [`Succeeded`](SearchStatus::Succeeded) when a
    /// path was found, [`Exhausted`](SearchStatus::Exhausted) otherwise.
    pub fn status(&self) -> SearchStatus {
        if self.is_found() {
            SearchStatus::Succeeded
        } else {
            SearchStatus::Exhausted
        }
    }

    /// Last coordinate of the path.
    pub fn goal(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// Number of nodes moved to the closed set.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// A* shortest-path search between a maze's start and goal markers.
///
/// Holds configuration only. Each call builds its own cost tables and drops
/// them on return, so one `PathFinder` can serve any number of mazes, from
/// any number of threads.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    /// Create a new path finder.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute the shortest path from the maze's start to its goal.
    ///
    /// Fails with [`MazeError::MissingEndpoint`] before any expansion if a
    /// marker is missing. An unreachable goal yields an empty outcome.
    pub fn find_path(&self, maze: &Maze) -> Result<SearchOutcome, MazeError> {
        self.find_path_with(maze, &mut ())
    }

    /// Like [`find_path`](Self::find_path), reporting progress to `observer`.
    pub fn find_path_with<O: SearchObserver + ?Sized>(
        &self,
        maze: &Maze,
        observer: &mut O,
    ) -> Result<SearchOutcome, MazeError> {
        let (start, goal) = maze.locate_markers()?;
        let outcome = match self.config.frontier {
            FrontierKind::LinearScan => {
                Search::new(maze, goal, LinearFrontier::default()).run(start, observer)
            }
            FrontierKind::BinaryHeap => {
                Search::new(maze, goal, HeapFrontier::default()).run(start, observer)
            }
        };
        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// Search (per-call state)
// ---------------------------------------------------------------------------

/// Tables owned by a single search call.
struct Search<'m, F: Frontier> {
    maze: &'m Maze,
    goal: Coord,
    // Cheapest known cost from the start.
    g: Vec<i32>,
    // g + heuristic, updated together with g.
    f: Vec<i32>,
    came_from: CameFrom,
    frontier: F,
    closed: Vec<bool>,
    expansions: usize,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Coord>,
}

impl<'m, F: Frontier> Search<'m, F> {
    fn new(maze: &'m Maze, goal: Coord, frontier: F) -> Self {
        let len = maze.len();
        Self {
            maze,
            goal,
            g: vec![UNREACHABLE; len],
            f: vec![UNREACHABLE; len],
            came_from: CameFrom::new(),
            frontier,
            closed: vec![false; len],
            expansions: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    fn run<O: SearchObserver + ?Sized>(mut self, start: Coord, observer: &mut O) -> SearchOutcome {
        log::debug!(
            "astar: {}x{} maze, {} -> {}",
            self.maze.rows(),
            self.maze.cols(),
            start,
            self.goal
        );

        if let Some(si) = self.maze.index(start) {
            self.g[si] = 0;
            self.f[si] = manhattan(start, self.goal);
            self.frontier.push(start, self.f[si]);
        }

        while let Some(current) = self.frontier.pop() {
            let Some(ci) = self.maze.index(current) else {
                continue;
            };

            // Visualize, then check.
            let path = reconstruct(&self.came_from, current);
            log::trace!(
                "astar: select {} (g={}, f={}, open={})",
                current,
                self.g[ci],
                self.f[ci],
                self.frontier.len()
            );
            observer.on_step(self.maze, &path);

            if current == self.goal {
                log::debug!(
                    "astar: found path of {} cells after {} expansions",
                    path.len(),
                    self.expansions
                );
                observer.on_found(self.maze, &path);
                return SearchOutcome {
                    path,
                    expansions: self.expansions,
                };
            }

            self.closed[ci] = true;
            self.expansions += 1;
            self.expand(current, ci);
        }

        log::debug!("astar: no path after {} expansions", self.expansions);
        observer.on_exhausted(self.maze);
        SearchOutcome {
            path: Vec::new(),
            expansions: self.expansions,
        }
    }

    /// Relax every open neighbour of `current`.
    fn expand(&mut self, current: Coord, ci: usize) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.maze.neighbors(current, &mut nbuf);

        let tentative = self.g[ci] + 1;
        for &np in nbuf.iter() {
            let Some(ni) = self.maze.index(np) else {
                continue;
            };
            if self.closed[ni] {
                continue;
            }
            if self.g[ni] != UNREACHABLE && tentative >= self.g[ni] {
                continue;
            }

            self.came_from.insert(np, current);
            self.g[ni] = tentative;
            self.f[ni] = tentative + manhattan(np, self.goal);

            if self.frontier.contains(np) {
                self.frontier.decrease(np, self.f[ni]);
            } else {
                self.frontier.push(np, self.f[ni]);
            }
        }

        self.nbuf = nbuf;
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let maze = Maze::parse("S.\n.E").unwrap();
        let out = PathFinder::default().find_path(&maze).unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
        assert_eq!(back.expansions(), 3);
    }
}
