//! # maze_search
//!
//! A maze-solving system based on recursive
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) with
//! [backtracking](https://en.wikipedia.org/wiki/Backtracking). The maze is a
//! character grid loaded from a plain-text description; the search marks
//! every explored cell in place and reports each step to an observer, so a
//! consumer can render or record the exploration as it happens. Note that
//! the search stops at the first goal cell it reaches; it does not look for
//! a shortest path.
pub mod grid;
pub mod observer;
pub mod solver;

pub use grid::{Cell, GridError, MazeGrid};
pub use observer::{RecordingObserver, SearchObserver, SearchStatus, TraceObserver};
pub use solver::{NO_PATH, PathFinder};
