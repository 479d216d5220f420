//! A* shortest-path search over mazes.
//!
//! The search is split into four small pieces:
//!
//! - the **grid accessor** lives on [`Maze`](mazepath_core::Maze)
//!   (`locate_markers`, `neighbors`);
//! - the **heuristic** is [`manhattan`];
//! - the **search driver** is [`PathFinder`], which owns nothing between
//!   calls: every search builds and drops its own cost tables;
//! - the **path reconstructor** is [`reconstruct`].
//!
//! Every iteration of the driver hands the current best partial path to a
//! [`SearchObserver`], which is how renderers follow the search.
//!
//! # Frontier
//!
//! | [`FrontierKind`] | Selection |
//! |---|---|
//! | `LinearScan` (default) | full scan, first minimum wins |
//! | `BinaryHeap` | heap keyed by `(f, discovery order)` |
//!
//! Both pick the same node on every iteration, so paths and observer call
//! sequences are identical.

mod astar;
mod bfs;
mod config;
mod distance;
mod frontier;
mod observer;
mod reconstruct;

pub use astar::{PathFinder, SearchOutcome, SearchStatus};
pub use bfs::bfs_distance;
pub use config::{FrontierKind, SearchConfig, UnknownFrontier};
pub use distance::manhattan;
pub use observer::{SearchObserver, StepRecorder};
pub use reconstruct::{CameFrom, reconstruct};
