use std::collections::VecDeque;

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::grid::Coord;
use crate::grid::Direction;
use crate::grid::Grid;
use crate::grid::Point;

pub const BLOCKED: u8 = 0;
pub const PASSABLE: u8 = 1;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Cell {
    #[display("░")]
    Passable,
    #[display("█")]
    Blocked,
}

impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        if value == BLOCKED {
            Cell::Blocked
        } else {
            Cell::Passable
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Passable => PASSABLE,
            Cell::Blocked => BLOCKED,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Cell {
    type Error = CellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            ' ' | '.' | '░' => Ok(Cell::Passable),
            '#' | '█' => Ok(Cell::Blocked),
            ch => Err(CellParseError::InvalidCharacter(ch)),
        }
    }
}

/// The line a wall segment runs along.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A row, `sy == ey`.
    #[display("x")]
    X,
    /// A column, `sx == ex`.
    #[display("y")]
    Y,
}

/// One step of maze construction, in the order it happened.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum GenerationStep {
    /// A passage was opened between `(sx, sy)` and `(ex, ey)`.
    #[display("road ({sx},{sy})->({ex},{ey})")]
    Road {
        sx: Coord,
        sy: Coord,
        ex: Coord,
        ey: Coord,
    },
    /// A wall was laid from `(sx, sy)` to `(ex, ey)` along `axis`.
    #[display("wall ({sx},{sy})->({ex},{ey}) along {axis}")]
    Wall {
        sx: Coord,
        sy: Coord,
        ex: Coord,
        ey: Coord,
        axis: Axis,
    },
}

impl GenerationStep {
    #[must_use]
    pub fn road(start: Point, end: Point) -> Self {
        GenerationStep::Road {
            sx: start.x,
            sy: start.y,
            ex: end.x,
            ey: end.y,
        }
    }

    #[must_use]
    pub fn wall(start: Point, end: Point, axis: Axis) -> Self {
        GenerationStep::Wall {
            sx: start.x,
            sy: start.y,
            ex: end.x,
            ey: end.y,
            axis,
        }
    }

    #[must_use]
    pub fn is_road(&self) -> bool {
        matches!(self, GenerationStep::Road { .. })
    }
}

/// An edge a search examined, in the order it was processed.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("({sx},{sy})->({ex},{ey})")]
pub struct SearchStep {
    pub sx: Coord,
    pub sy: Coord,
    pub ex: Coord,
    pub ey: Coord,
}

impl SearchStep {
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            sx: from.x,
            sy: from.y,
            ex: to.x,
            ey: to.y,
        }
    }
    #[must_use]
    pub fn source(&self) -> Point {
        Point::new(self.sx, self.sy)
    }
    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.ex, self.ey)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid dimensions {rows}x{cols}: rows and cols must be odd")]
    InvalidDimensions { rows: Coord, cols: Coord },
    #[error("Expected {expected} cells, found {found}")]
    DataLength { expected: usize, found: usize },
    #[error("Invalid cell value {value} at index {index}")]
    InvalidCellValue { index: usize, value: u8 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell {e} found at ({x},{y})")]
    InvalidCell { e: CellParseError, x: usize, y: usize },
    #[error("Line {y} has {found} cells, expected {expected}")]
    RaggedLine {
        y: usize,
        found: usize,
        expected: usize,
    },
    #[error("Missing '{0}' marker")]
    MissingMarker(char),
    #[error("Duplicate '{0}' marker")]
    DuplicateMarker(char),
}

/// A rectangular maze and the steps that built it.
///
/// Cells hold [`PASSABLE`] or [`BLOCKED`].
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    data: Vec<u8>,
    records: Vec<GenerationStep>,
}

impl Maze {
    pub(crate) fn new_unchecked(grid: Grid, data: Vec<u8>, records: Vec<GenerationStep>) -> Self {
        debug_assert_eq!(grid.len(), data.len());
        Self {
            grid,
            data,
            records,
        }
    }

    /// Wraps externally constructed cell data.
    ///
    /// Dimensions need not be odd here; searches accept any grid.
    pub fn from_data(rows: Coord, cols: Coord, data: Vec<u8>) -> Result<Self, MazeError> {
        let grid = Grid::new(rows, cols);
        if data.len() != grid.len() {
            return Err(MazeError::DataLength {
                expected: grid.len(),
                found: data.len(),
            });
        }
        if let Some((index, value)) = data
            .iter()
            .enumerate()
            .find(|(_, v)| **v != BLOCKED && **v != PASSABLE)
        {
            return Err(MazeError::InvalidCellValue {
                index,
                value: *value,
            });
        }
        Ok(Self::new_unchecked(grid, data, vec![]))
    }

    #[inline(always)]
    #[must_use]
    pub fn rows(&self) -> Coord {
        self.grid.rows
    }
    #[inline(always)]
    #[must_use]
    pub fn cols(&self) -> Coord {
        self.grid.cols
    }
    #[inline(always)]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    #[inline(always)]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    #[inline(always)]
    #[must_use]
    pub fn records(&self) -> &[GenerationStep] {
        &self.records
    }

    /// Cells with both coordinates even.
    #[inline(always)]
    #[must_use]
    pub fn rooms(&self) -> usize {
        self.grid.rooms()
    }

    #[inline(always)]
    #[must_use]
    pub(crate) fn at(&self, p: &Point) -> Cell {
        Cell::from(self.data[self.grid.index(p)])
    }

    /// In bounds and passable.
    #[inline(always)]
    #[must_use]
    pub fn is_passable(&self, p: &Point) -> bool {
        self.grid.contains(p) && self.data[self.grid.index(p)] != BLOCKED
    }

    /// Passable unit-step neighbours of `p`, in [`Direction::ALL`] order.
    /// None for points outside the maze.
    #[must_use]
    pub fn neighbours(&self, p: &Point) -> SmallVec<[Point; 4]> {
        let mut v = SmallVec::<[Point; 4]>::new();
        if !self.grid.contains(p) {
            return v;
        }
        for d in Direction::ALL {
            if let Some(n) = self.grid.step(p, d, 1) {
                if self.data[self.grid.index(&n)] != BLOCKED {
                    v.push(n);
                }
            }
        }
        v
    }

    #[must_use]
    pub fn passable_count(&self) -> usize {
        self.data.iter().filter(|c| **c != BLOCKED).count()
    }

    /// Number of passable cells reachable from `start` (itself included).
    #[must_use]
    pub fn reachable_count(&self, start: &Point) -> usize {
        if !self.is_passable(start) {
            return 0;
        }
        let mut seen = vec![false; self.grid.len()];
        let mut queue = VecDeque::<Point>::new();
        seen[self.grid.index(start)] = true;
        queue.push_back(*start);

        let mut count = 0;
        while let Some(p) = queue.pop_front() {
            count += 1;
            for n in self.neighbours(&p) {
                let i = self.grid.index(&n);
                if !seen[i] {
                    seen[i] = true;
                    queue.push_back(n);
                }
            }
        }
        count
    }

    /// Every passable cell can reach every other one.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        match self.data.iter().position(|c| *c != BLOCKED) {
            Some(i) => self.reachable_count(&self.grid.point(i)) == self.passable_count(),
            None => true,
        }
    }

    /// Connected, and the passages form a tree over the rooms.
    ///
    /// A tree over `n` rooms opens exactly `n - 1` wall cells between them, and
    /// no other cell.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        let rooms = self.grid.rooms();
        let rooms_open = (0..self.grid.len())
            .map(|i| self.grid.point(i))
            .filter(|p| p.is_room())
            .all(|p| self.at(&p) == Cell::Passable);

        rooms_open && self.passable_count() + 1 == 2 * rooms && self.is_connected()
    }

    /// Renders the maze with `path` drawn over it.
    #[must_use]
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut on_path = vec![false; self.grid.len()];
        for p in path.iter().filter(|p| self.grid.contains(p)) {
            on_path[self.grid.index(p)] = true;
        }

        let mut s = String::with_capacity((self.cols() + 1) * self.rows());
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                let p = Point::new(x, y);
                let c = if path.first() == Some(&p) {
                    'S'
                } else if path.last() == Some(&p) {
                    'G'
                } else if on_path[self.grid.index(&p)] {
                    '*'
                } else {
                    match self.at(&p) {
                        Cell::Passable => ' ',
                        Cell::Blocked => '█',
                    }
                };
                s.push(c);
            }
            s.push('\n');
        }
        s
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Maze({}x{}):", self.rows(), self.cols())?;
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                write!(f, "{}", self.at(&Point::new(x, y)))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Maze({}x{}, {} records)",
            self.rows(),
            self.cols(),
            self.records.len()
        )
    }
}

/// Parses `#`/`█` as blocked and ` `/`.`/`░` as passable, one line per row.
impl std::convert::TryFrom<&str> for Maze {
    type Error = MazeParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();

        if lines.is_empty() || lines[0].is_empty() {
            return Err(MazeParseError::EmptyInput);
        }

        let cols = lines[0].chars().count();
        let rows = lines.len();
        let mut data = Vec::<u8>::with_capacity(rows * cols);

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeParseError::RaggedLine {
                    y,
                    found,
                    expected: cols,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell =
                    Cell::try_from(ch).map_err(|e| MazeParseError::InvalidCell { e, x, y })?;
                data.push(cell.into());
            }
        }

        Ok(Maze::new_unchecked(Grid::new(rows, cols), data, vec![]))
    }
}

/// The outcome of a successful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeSearchResult {
    pub rows: Coord,
    pub cols: Coord,
    /// From start to end, both included.
    pub points: Vec<Point>,
    pub records: Vec<SearchStep>,
}

impl MazeSearchResult {
    /// Number of unit steps along the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Starts at `start`, ends at `end` and only moves by unit steps.
    #[must_use]
    pub fn is_valid_path(&self, start: &Point, end: &Point) -> bool {
        self.points.first() == Some(start)
            && self.points.last() == Some(end)
            && self
                .points
                .windows(2)
                .all(|w| w[0].manhattan_distance(&w[1]) == 1)
    }
}

impl std::fmt::Display for MazeSearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.points.first(), self.points.last()) {
            (Some(start), Some(end)) => write!(
                f,
                "Path({}, {start}..{end}, {} records)",
                self.len(),
                self.records.len()
            ),
            _ => write!(f, "Path()"),
        }
    }
}
