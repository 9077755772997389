use crate::grid::{Cell, GridError, MazeGrid};
use crate::observer::{SearchObserver, SearchStatus};
use grid_util::point::Point;
use log::info;
use std::ops::ControlFlow;

/// Sentinel coordinates reported with [SearchStatus::Impossible].
pub const NO_PATH: Point = Point { x: -1, y: -1 };

/// The four neighbour offsets in exploration order: up, right, down, left.
/// This order is a contract, not an implementation detail; it decides which
/// of several possible paths the search commits to first.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Depth-first backtracking search over a [MazeGrid].
///
/// The finder borrows the grid mutably for the duration of the search and
/// marks every explored cell in place ([Cell::Valid] while a cell is part of
/// the candidate path, [Cell::Invalid] once its exploration is exhausted).
/// The marks persist after the search, so the grid itself is the record of
/// what was explored; they also double as the visited set that keeps the
/// recursion from looping. Every visited cell is reported to the
/// [SearchObserver] before the search moves on.
///
/// The search stops at the first goal cell it reaches; it makes no attempt
/// to find a shortest path. Recursion depth is bounded by the number of
/// reachable cells.
pub struct PathFinder<'g, O> {
    grid: &'g mut MazeGrid,
    observer: O,
}

impl<'g, O: SearchObserver> PathFinder<'g, O> {
    pub fn new(grid: &'g mut MazeGrid, observer: O) -> PathFinder<'g, O> {
        PathFinder { grid, observer }
    }

    /// Locates the start cell and searches from it. Fails only if the grid
    /// has no [Cell::Start].
    pub fn solve(&mut self) -> Result<bool, GridError> {
        let start = self.grid.locate(Cell::Start).ok_or(GridError::NoStart)?;
        Ok(self.search(start))
    }

    /// Searches for any path from `start` to a goal cell, reporting every
    /// visited cell to the observer. Returns [true] if a goal was reached.
    ///
    /// If the whole reachable region is exhausted without finding a goal,
    /// the observer receives a final [SearchStatus::Impossible] at the
    /// [NO_PATH] sentinel. A found goal unwinds immediately: no sibling
    /// cells are explored and no further statuses are reported after the
    /// [SearchStatus::Complete] event.
    pub fn search(&mut self, start: Point) -> bool {
        info!("searching from row {}, col {}", start.y, start.x);
        match self.explore(start) {
            ControlFlow::Break(goal) => {
                info!("goal reached at row {}, col {}", goal.y, goal.x);
                true
            }
            ControlFlow::Continue(()) => {
                info!("search exhausted, no path exists");
                self.observer.notify(SearchStatus::Impossible, NO_PATH);
                false
            }
        }
    }

    fn explore(&mut self, p: Point) -> ControlFlow<Point> {
        let cell = match self.grid.cell(p) {
            None => {
                self.observer.notify(SearchStatus::Illegal, p);
                return ControlFlow::Continue(());
            }
            Some(cell) => cell,
        };
        match cell {
            Cell::Goal => {
                self.observer.notify(SearchStatus::Complete, p);
                ControlFlow::Break(p)
            }
            // Walls and already-explored cells end the branch silently.
            Cell::Wall | Cell::Valid | Cell::Invalid => ControlFlow::Continue(()),
            Cell::Open | Cell::Start => {
                self.observer.notify(SearchStatus::Valid, p);
                // Mark before recursing so cycles hit the explored case.
                self.grid.set_cell(p, Cell::Valid);
                for (dx, dy) in NEIGHBOUR_OFFSETS {
                    self.explore(Point::new(p.x + dx, p.y + dy))?;
                }
                self.observer.notify(SearchStatus::Invalid, p);
                self.grid.set_cell(p, Cell::Invalid);
                ControlFlow::Continue(())
            }
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;

    #[test]
    fn dead_end_leaves_invalid_marks() {
        let mut grid = MazeGrid::parse("3 1\nL #\n").unwrap();
        let mut finder = PathFinder::new(&mut grid, RecordingObserver::new());
        assert!(!finder.solve().unwrap());
        drop(finder);
        assert_eq!(format!("{}", grid), "WW#\n");
    }

    #[test]
    fn solved_maze_keeps_path_marks() {
        let mut grid = MazeGrid::parse("3 1\nL G\n").unwrap();
        let mut finder = PathFinder::new(&mut grid, RecordingObserver::new());
        assert!(finder.solve().unwrap());
        drop(finder);
        // The goal cell itself is never overwritten.
        assert_eq!(format!("{}", grid), "SSG\n");
    }

    #[test]
    fn preexisting_visited_marks_are_never_explored() {
        let mut grid = MazeGrid::parse("3 1\nLSG\n").unwrap();
        let mut finder = PathFinder::new(&mut grid, RecordingObserver::new());
        assert!(!finder.solve().unwrap());
        let statuses = finder.observer().statuses();
        assert!(!statuses.contains(&SearchStatus::Complete));
        assert_eq!(*statuses.last().unwrap(), SearchStatus::Impossible);
    }

    #[test]
    fn missing_start_is_an_error() {
        let mut grid = MazeGrid::parse("2 1\n G\n").unwrap();
        let mut finder = PathFinder::new(&mut grid, RecordingObserver::new());
        assert!(matches!(finder.solve(), Err(GridError::NoStart)));
    }
}
