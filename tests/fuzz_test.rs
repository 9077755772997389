//! Fuzzes the backtracking search by checking for many random mazes that a
//! path is found exactly when the goal is reachable from the start, where
//! reachability is established independently by a breadth-first flood fill.
use grid_util::point::Point;
use maze_search::{Cell, MazeGrid, PathFinder, RecordingObserver, SearchStatus};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_maze(n: usize, rng: &mut StdRng) -> MazeGrid {
    let mut rows = String::new();
    for y in 0..n {
        for x in 0..n {
            let c = if (x, y) == (0, 0) {
                'L'
            } else if (x, y) == (n - 1, n - 1) {
                'G'
            } else if rng.gen_bool(0.4) {
                '#'
            } else {
                ' '
            };
            rows.push(c);
        }
        rows.push('\n');
    }
    MazeGrid::parse(&format!("{} {}\n{}", n, n, rows)).unwrap()
}

/// Breadth-first flood fill from the start; the oracle the solver is
/// checked against.
fn reachable(grid: &MazeGrid) -> bool {
    let start = grid.locate(Cell::Start).unwrap();
    let mut seen = vec![false; grid.width * grid.height];
    let mut queue = VecDeque::from([start]);
    seen[start.y as usize * grid.width + start.x as usize] = true;
    while let Some(p) = queue.pop_front() {
        match grid.cell(p) {
            Some(Cell::Goal) => return true,
            Some(Cell::Wall) | None => continue,
            _ => {}
        }
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let n = Point::new(p.x + dx, p.y + dy);
            if grid.in_bounds(n) {
                let ix = n.y as usize * grid.width + n.x as usize;
                if !seen[ix] {
                    seen[ix] = true;
                    queue.push_back(n);
                }
            }
        }
    }
    false
}

fn visualize_grid(grid: &MazeGrid) {
    print!("{}", grid);
}

#[test]
fn fuzz() {
    const N: usize = 12;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, &mut rng);
        let expected = reachable(&maze);
        let mut explored = maze.clone();
        let mut finder = PathFinder::new(&mut explored, RecordingObserver::new());
        let solved = finder.solve().unwrap();
        let events = finder.into_observer().events;
        // Show the maze if the solver disagrees with the flood fill
        if solved != expected {
            visualize_grid(&maze);
        }
        assert!(solved == expected);

        // Exactly one COMPLETE on success, a final IMPOSSIBLE otherwise.
        let completes = events
            .iter()
            .filter(|(s, _)| *s == SearchStatus::Complete)
            .count();
        if solved {
            assert_eq!(completes, 1);
            assert_eq!(events.last().unwrap().0, SearchStatus::Complete);
        } else {
            assert_eq!(completes, 0);
            assert_eq!(*events.last().unwrap(), (SearchStatus::Impossible, Point::new(-1, -1)));
        }

        // No cell is ever entered twice.
        let mut valids: Vec<Point> = events
            .iter()
            .filter(|(s, _)| *s == SearchStatus::Valid)
            .map(|&(_, p)| p)
            .collect();
        let total = valids.len();
        valids.sort_by_key(|p| (p.y, p.x));
        valids.dedup();
        assert_eq!(valids.len(), total);
    }
}
