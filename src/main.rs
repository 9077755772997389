use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use maze_search::{MazeGrid, PathFinder, TraceObserver};

/// Solves a maze file by recursive backtracking and prints the explored
/// grid, with `S` marking the found path and `W` marking dead ends.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the maze file (`<width> <height>` header, then the rows).
    maze: PathBuf,
}

/// Exit codes: 0 when a path to a goal was found, 2 when the search
/// exhausted the maze without finding one, 1 for usage and file errors.
fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let mut grid = MazeGrid::load(&args.maze)
        .with_context(|| format!("failed to load maze {}", args.maze.display()))?;
    let mut finder = PathFinder::new(&mut grid, TraceObserver);
    let solved = finder.solve().context("cannot start search")?;
    drop(finder);
    print!("{}", grid);
    if solved {
        println!("Found the pot of gold!");
    } else {
        println!("This maze has no solution.");
    }
    Ok(solved)
}
