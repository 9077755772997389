use grid_util::point::Point;
use maze_search::{MazeGrid, PathFinder, SearchStatus};

// Shows the raw event stream of a search by attaching a closure observer.
// Every status the search reports is printed with its row and column, in
// the exact order the recursion produces them.
fn main() {
    let source = "3 3\nL  \n## \nG  \n";
    let mut grid = MazeGrid::parse(source).expect("demo maze is well-formed");
    let mut step = 0;
    let mut finder = PathFinder::new(&mut grid, |status: SearchStatus, at: Point| {
        step += 1;
        println!("{:>3}: {} at row {}, col {}", step, status, at.y, at.x);
    });
    finder.solve().expect("demo maze has a start");
}
