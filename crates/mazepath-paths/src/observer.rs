use mazepath_core::{Coord, Maze};

/// Receives the search's progress, e.g. to render it.
///
/// All methods default to no-ops. `()` is the silent observer.
pub trait SearchObserver {
    /// Called once per iteration with the best known path to the node that
    /// was just selected, before that node is checked against the goal.
    fn on_step(&mut self, _maze: &Maze, _path: &[Coord]) {}

    /// Called once when the goal is selected, with the final path.
    fn on_found(&mut self, _maze: &Maze, _path: &[Coord]) {}

    /// Called once when the frontier runs dry without reaching the goal.
    fn on_exhausted(&mut self, _maze: &Maze) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_step(&mut self, maze: &Maze, path: &[Coord]) {
        (**self).on_step(maze, path);
    }

    fn on_found(&mut self, maze: &Maze, path: &[Coord]) {
        (**self).on_found(maze, path);
    }

    fn on_exhausted(&mut self, maze: &Maze) {
        (**self).on_exhausted(maze);
    }
}

/// Observer that keeps every path it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRecorder {
    /// Partial paths, one per iteration.
    pub steps: Vec<Vec<Coord>>,
    /// Final path, if the goal was reached.
    pub found: Option<Vec<Coord>>,
    /// Whether the search ended without a path.
    pub exhausted: bool,
}

impl StepRecorder {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for StepRecorder {
    fn on_step(&mut self, _maze: &Maze, path: &[Coord]) {
        self.steps.push(path.to_vec());
    }

    fn on_found(&mut self, _maze: &Maze, path: &[Coord]) {
        self.found = Some(path.to_vec());
    }

    fn on_exhausted(&mut self, _maze: &Maze) {
        self.exhausted = true;
    }
}
