use maze_search::{MazeGrid, PathFinder, TraceObserver};

// In this demo a path is searched on a maze with shape
// L  #
//  # G
//  #
// L marks the start
// G marks the goal
// After the search the grid is printed: S cells carry the found path,
// W cells are explored dead ends.
fn main() {
    let source = "4 3\nL  #\n # G\n #  \n";
    let mut grid = MazeGrid::parse(source).expect("demo maze is well-formed");
    let mut finder = PathFinder::new(&mut grid, TraceObserver);
    let solved = finder.solve().expect("demo maze has a start");
    drop(finder);
    println!("{}", grid);
    if solved {
        println!("A path has been found");
    } else {
        println!("No path exists");
    }
}
