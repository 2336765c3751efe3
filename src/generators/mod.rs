//! Maze generation.
//!
//! Every generator works on a `rows x cols` grid where cells with both
//! coordinates even are rooms and every other cell is a wall. Rooms connect to
//! the rooms two cells away, through the wall cell between them.
//!
//! All generators but [`Generator::Divide`] start from a fully blocked grid and
//! carve passages. Division starts fully open and lays walls instead.

use derive_more::Display;
use rand::Rng;
use thiserror::Error;

use crate::grid::Coord;
use crate::grid::Direction;
use crate::grid::Grid;
use crate::grid::Point;
use crate::maze::BLOCKED;
use crate::maze::GenerationStep;
use crate::maze::Maze;
use crate::maze::MazeError;
use crate::maze::PASSABLE;

mod bfs;
mod dfs;
mod divide;
mod kruskal;
mod prim;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Generator {
    #[display("dfs_recursive")]
    #[value(name = "dfs_recursive")]
    DfsRecursive,
    #[display("dfs")]
    #[value(name = "dfs")]
    Dfs,
    #[display("bfs")]
    #[value(name = "bfs")]
    Bfs,
    #[display("kruskal")]
    #[value(name = "kruskal")]
    Kruskal,
    #[display("prim")]
    #[value(name = "prim")]
    Prim,
    #[display("divide")]
    #[value(name = "divide")]
    Divide,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::DfsRecursive,
        Generator::Dfs,
        Generator::Bfs,
        Generator::Kruskal,
        Generator::Prim,
        Generator::Divide,
    ];

    /// Builds a `rows x cols` maze.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] unless both are odd.
    pub fn generate<R: Rng>(self, rows: Coord, cols: Coord, rng: &mut R) -> Result<Maze, MazeError> {
        let grid = Grid::new(rows, cols);
        if !grid.has_odd_dimensions() {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let maze = match self {
            Generator::DfsRecursive => dfs::dfs_recursive(grid, rng),
            Generator::Dfs => dfs::dfs(grid, rng),
            Generator::Bfs => bfs::bfs(grid, rng),
            Generator::Kruskal => kruskal::kruskal(grid, rng),
            Generator::Prim => prim::prim(grid, rng),
            Generator::Divide => divide::divide(grid, rng),
        };
        log::debug!(
            "{self}: generated {rows}x{cols} maze with {} records",
            maze.records().len()
        );
        verify_maze(&maze);

        Ok(maze)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl std::str::FromStr for Generator {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.to_string() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// Builds a maze with the generator named `algorithm` and a process-seeded RNG.
pub fn generate(algorithm: &str, rows: Coord, cols: Coord) -> Result<Maze, GenerateError> {
    let generator: Generator = algorithm.parse()?;
    Ok(generator.generate(rows, cols, &mut rand::rng())?)
}

#[inline(always)]
#[cfg(not(feature = "verify"))]
fn verify_maze(_maze: &Maze) {
    // All good... (hopefully)
}
#[inline(always)]
#[cfg(feature = "verify")]
fn verify_maze(maze: &Maze) {
    debug_assert!(maze.is_connected(), "Disconnected maze {maze}");
    debug_assert!(maze.is_perfect(), "Maze has cycles {maze}");
}

/// A candidate connection between two rooms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) from: Point,
    pub(crate) to: Point,
}

/// Cell data and construction log shared by all generators.
pub(crate) struct Carving {
    grid: Grid,
    data: Vec<u8>,
    records: Vec<GenerationStep>,
}

impl Carving {
    /// A grid where every cell holds `fill`.
    pub(crate) fn new(grid: Grid, fill: u8) -> Self {
        Self {
            grid,
            data: vec![fill; grid.len()],
            records: Vec::with_capacity(grid.rooms()),
        }
    }

    pub(crate) fn blocked(grid: Grid) -> Self {
        Self::new(grid, BLOCKED)
    }

    pub(crate) fn passable(grid: Grid) -> Self {
        Self::new(grid, PASSABLE)
    }

    #[inline(always)]
    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline(always)]
    pub(crate) fn is_open(&self, p: &Point) -> bool {
        self.data[self.grid.index(p)] != BLOCKED
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, p: &Point, value: u8) {
        let i = self.grid.index(p);
        self.data[i] = value;
    }

    #[inline(always)]
    pub(crate) fn open(&mut self, p: &Point) {
        self.set(p, PASSABLE);
    }

    #[inline(always)]
    pub(crate) fn record(&mut self, step: GenerationStep) {
        self.records.push(step);
    }

    /// Opens both rooms of `edge` and the wall between them, and records it.
    pub(crate) fn carve(&mut self, edge: &Edge) {
        let from = self.grid.index(&edge.from);
        let to = self.grid.index(&edge.to);
        debug_assert_eq!(edge.from.manhattan_distance(&edge.to), 2);
        self.data[from] = PASSABLE;
        self.data[(from + to) / 2] = PASSABLE;
        self.data[to] = PASSABLE;
        self.records.push(GenerationStep::road(edge.from, edge.to));
    }

    /// Rooms next to `from`, towards each of `directions` in order, that are
    /// still blocked.
    pub(crate) fn closed_edges<'a>(
        &'a self,
        from: Point,
        directions: &'a [Direction],
    ) -> impl Iterator<Item = Edge> + 'a {
        directions
            .iter()
            .filter_map(move |d| self.grid.step(&from, *d, 2))
            .filter(move |to| !self.is_open(to))
            .map(move |to| Edge { from, to })
    }

    pub(crate) fn into_maze(self) -> Maze {
        Maze::new_unchecked(self.grid, self.data, self.records)
    }
}
