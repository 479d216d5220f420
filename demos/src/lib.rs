//! Text rendering and sample mazes shared by the demo binaries.
//!
//! [`TextRenderer`] is a [`SearchObserver`] that prints a snapshot of the
//! maze on every search iteration, with the current best path drawn as `*`.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};
use mazepath_core::{Coord, Maze};
use mazepath_paths::SearchObserver;

/// Character drawn on path cells.
pub const PATH_MARK: char = '*';

/// Classic maze whose goal is walled off from the start.
pub const MAZE_WITHOUT_SOLUTION: &str = "\
S.#..
..#.#
.#...
#..E#";

/// Classic maze with a 10-cell shortest path.
pub const MAZE_WITH_SOLUTION: &str = "\
S....
##.#.
.....
.###.
...E.";

/// Render `maze` as text with every cell of `path` replaced by
/// [`PATH_MARK`]. Rows end with `'\n'`.
pub fn render_state(maze: &Maze, path: &[Coord], color: bool) -> String {
    let mut out = String::with_capacity(maze.len() + maze.rows() as usize);
    for (p, tile) in maze.iter() {
        if path.contains(&p) {
            if color {
                out.push_str(&style(PATH_MARK).with(Color::Yellow).bold().to_string());
            } else {
                out.push(PATH_MARK);
            }
        } else {
            out.push(tile.to_char());
        }
        if p.col == maze.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Observer that writes maze snapshots and the final verdict to `W`.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// returned by [`finish`](Self::finish); later output is dropped.
pub struct TextRenderer<W: Write> {
    out: W,
    quiet: bool,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    /// Wrap a writer. Every iteration is drawn.
    pub fn new(out: W) -> Self {
        Self {
            out,
            quiet: false,
            color: false,
            error: None,
        }
    }

    /// Only draw the final path, not every iteration (builder).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Highlight path cells with terminal colours (builder).
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> SearchObserver for TextRenderer<W> {
    fn on_step(&mut self, maze: &Maze, path: &[Coord]) {
        if self.quiet {
            return;
        }
        let frame = render_state(maze, path, self.color);
        self.emit(&frame);
        self.emit("\n");
    }

    fn on_found(&mut self, maze: &Maze, path: &[Coord]) {
        if self.quiet {
            let frame = render_state(maze, path, self.color);
            self.emit(&frame);
            self.emit("\n");
        }
        self.emit(&format!("Found path with {} steps\n", path.len()));
    }

    fn on_exhausted(&mut self, _maze: &Maze) {
        self.emit("No path found\n");
    }
}
