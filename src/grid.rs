use core::fmt;
use grid_util::grid::Grid;
use grid_util::point::Point;
use log::info;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// The symbol held by a single maze cell.
///
/// `Valid` and `Invalid` are written by the search itself to record explored
/// cells; a maze file normally contains only the other four symbols. If a
/// file does contain `S` or `W` they are kept as-is and the search treats
/// them as already explored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Walkable space (`' '`).
    Open,
    /// Blocking wall (`'#'`).
    Wall,
    /// The search origin (`'L'`).
    Start,
    /// A search target (`'G'`).
    Goal,
    /// Explored, currently part of a candidate path (`'S'`).
    Valid,
    /// Explored and exhausted without reaching a goal (`'W'`).
    Invalid,
}

impl Cell {
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            ' ' => Some(Cell::Open),
            '#' => Some(Cell::Wall),
            'L' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            'S' => Some(Cell::Valid),
            'W' => Some(Cell::Invalid),
            _ => None,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Cell::Open => ' ',
            Cell::Wall => '#',
            Cell::Start => 'L',
            Cell::Goal => 'G',
            Cell::Valid => 'S',
            Cell::Invalid => 'W',
        }
    }
}

/// Error raised when a maze file cannot be read or does not follow the
/// `<width> <height>` + rows layout.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("maze source is empty")]
    Empty,
    #[error("malformed header {header:?}: expected `<width> <height>`")]
    MalformedHeader { header: String },
    #[error("maze dimensions must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("expected {expected} maze rows, found {found}")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("maze has no start cell ('L')")]
    NoStart,
}

/// A rectangular maze of [Cell] symbols stored in row-major order.
///
/// Coordinates are [Point]s with `x` as the column and `y` as the row,
/// origin at the top-left; the first line of a maze file is row 0. The grid
/// doubles as the search's visited set: the solver overwrites cells with
/// [Cell::Valid] / [Cell::Invalid] as it explores, so a finished search
/// leaves a readable trace of the path and every dead end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Reads a maze file from disk. See [parse](Self::parse) for the layout.
    pub fn load(path: impl AsRef<Path>) -> Result<MazeGrid, GridError> {
        let source = fs::read_to_string(path)?;
        MazeGrid::parse(&source)
    }

    /// Parses the textual maze layout: a `<width> <height>` header line
    /// followed by exactly `height` lines of exactly `width` symbols each.
    /// Any mismatch fails with a [GridError] naming the offending row rather
    /// than truncating silently.
    pub fn parse(source: &str) -> Result<MazeGrid, GridError> {
        let mut lines = source.lines();
        let header = lines.next().ok_or(GridError::Empty)?;
        let mut dims = header.split_whitespace().map(str::parse::<usize>);
        let (width, height) = match (dims.next(), dims.next(), dims.next()) {
            (Some(Ok(w)), Some(Ok(h)), None) => (w, h),
            _ => {
                return Err(GridError::MalformedHeader {
                    header: header.to_string(),
                })
            }
        };
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let mut cells = Vec::with_capacity(width * height);
        let mut rows = 0;
        for (y, line) in lines.enumerate() {
            rows += 1;
            if rows > height {
                break;
            }
            let row_len = line.chars().count();
            if row_len != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row_len,
                });
            }
            for (x, c) in line.chars().enumerate() {
                let cell = Cell::from_symbol(c).ok_or(GridError::UnknownSymbol {
                    symbol: c,
                    row: y,
                    col: x,
                })?;
                cells.push(cell);
            }
        }
        if rows != height {
            return Err(GridError::RowCountMismatch {
                expected: height,
                found: rows,
            });
        }
        info!("loaded {}x{} maze", width, height);
        Ok(MazeGrid {
            width,
            height,
            cells,
        })
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Bounds-checked read; [None] outside the grid.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if self.in_bounds(p) {
            Some(self.cells[p.y as usize * self.width + p.x as usize])
        } else {
            None
        }
    }

    /// Bounds-checked write, used by the solver to mark explored cells.
    pub fn set_cell(&mut self, p: Point, cell: Cell) {
        if self.in_bounds(p) {
            self.cells[p.y as usize * self.width + p.x as usize] = cell;
        }
    }

    /// Finds the first cell equal to `cell` in row-major order, the same
    /// order the parser fills the grid in.
    pub fn locate(&self, cell: Cell) -> Option<Point> {
        self.cells.iter().position(|&c| c == cell).map(|ix| {
            Point::new((ix % self.width) as i32, (ix / self.width) as i32)
        })
    }
}

impl Grid<Cell> for MazeGrid {
    fn new(width: usize, height: usize, default_value: Cell) -> Self {
        MazeGrid {
            width,
            height,
            cells: vec![default_value; width * height],
        }
    }
    fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }
    fn set(&mut self, x: usize, y: usize, value: Cell) {
        self.cells[y * self.width + x] = value;
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| self.cells[y * self.width + x].symbol())
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
