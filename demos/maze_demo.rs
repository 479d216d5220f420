//! Terminal A* demo: prints every search step of a maze.
//!
//! Run: cargo run --bin maze-demo -- [--file MAZE] [--random] [--quiet]
//!
//! Without arguments, the two classic sample mazes are solved. Set
//! `RUST_LOG=mazepath_paths=trace` to follow the search in the log.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use mazepath_core::{Maze, MazeGen};
use mazepath_demos::{MAZE_WITH_SOLUTION, MAZE_WITHOUT_SOLUTION, TextRenderer};
use mazepath_paths::{FrontierKind, PathFinder, SearchConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "maze-demo", about = "Shortest paths through text mazes with A*")]
struct Args {
    /// Maze file in text form (S start, E goal, . open, # wall).
    #[arg(short, long, conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Solve a randomly generated, always solvable maze.
    #[arg(short, long)]
    random: bool,

    /// Rows of the random maze.
    #[arg(long, default_value_t = 10)]
    rows: i32,

    /// Columns of the random maze.
    #[arg(long, default_value_t = 20)]
    cols: i32,

    /// Wall probability of the random maze (0.0 to 1.0).
    #[arg(long, default_value_t = 0.3, value_parser = parse_density)]
    density: f64,

    /// Seed for the random maze; a fresh one is drawn and logged if absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Open-set structure: "linear" or "heap".
    #[arg(long, default_value_t = FrontierKind::LinearScan)]
    frontier: FrontierKind,

    /// Only print the final path.
    #[arg(short, long)]
    quiet: bool,

    /// Highlight the path with terminal colours.
    #[arg(long)]
    color: bool,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("{s} is not between 0.0 and 1.0"))
    }
}

fn load_mazes(args: &Args) -> Result<Vec<(String, Maze)>, Box<dyn std::error::Error>> {
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)?;
        return Ok(vec![(path.display().to_string(), Maze::parse(&text)?)]);
    }

    if args.random {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("random maze seed: {seed}");
        let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
        let (maze, carved) = mg.carved(args.rows, args.cols, args.density)?;
        log::debug!("carved {carved} walls to guarantee a path");
        return Ok(vec![(format!("Random maze (seed {seed})"), maze)]);
    }

    Ok(vec![
        (
            "Maze without solution".to_string(),
            Maze::parse(MAZE_WITHOUT_SOLUTION)?,
        ),
        (
            "Maze with solution".to_string(),
            Maze::parse(MAZE_WITH_SOLUTION)?,
        ),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let finder = PathFinder::new(SearchConfig::new().with_frontier(args.frontier));
    let mazes = load_mazes(&args)?;

    for (i, (title, maze)) in mazes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {title} ===");

        let mut renderer = TextRenderer::new(io::stdout().lock())
            .quiet(args.quiet)
            .color(args.color);
        let outcome = finder.find_path_with(maze, &mut renderer)?;
        renderer.finish()?;

        log::info!(
            "{title}: {} cells, {} expansions",
            outcome.len(),
            outcome.expansions()
        );
    }
    Ok(())
}
