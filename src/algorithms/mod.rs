//! Path search over a [`Maze`].
//!
//! Searches move one cell at a time between passable cells. Room parity plays
//! no part here, so any maze can be searched, including hand-made ones.

use derive_more::Display;
use rand::Rng;
use thiserror::Error;

use crate::generators::UnknownAlgorithm;
use crate::grid::Coord;
use crate::grid::Point;
use crate::maze::Maze;
use crate::maze::MazeSearchResult;
use crate::maze::SearchStep;

mod astar;
mod best_first;
mod bfs;
mod dfs;
mod dfs_min_distance;
mod dijkstra;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Searcher {
    #[display("dfs")]
    #[value(name = "dfs")]
    Dfs,
    #[display("dfs_min_distance")]
    #[value(name = "dfs_min_distance")]
    DfsMinDistance,
    #[display("bfs")]
    #[value(name = "bfs")]
    Bfs,
    #[display("bestfirst")]
    #[value(name = "bestfirst")]
    BestFirst,
    #[display("dijkstra")]
    #[value(name = "dijkstra")]
    Dijkstra,
    #[display("astar")]
    #[value(name = "astar")]
    AStar,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Point {point} is outside the {rows}x{cols} maze")]
    OutOfBounds {
        point: Point,
        rows: Coord,
        cols: Coord,
    },
}

impl Searcher {
    pub const ALL: [Searcher; 6] = [
        Searcher::Dfs,
        Searcher::DfsMinDistance,
        Searcher::Bfs,
        Searcher::BestFirst,
        Searcher::Dijkstra,
        Searcher::AStar,
    ];

    /// Finds a path from `start` to `end`.
    ///
    /// Endpoints outside the maze are an error. A blocked endpoint or an
    /// unreachable `end` is `Ok(None)`.
    ///
    /// Only [`Searcher::Dfs`] draws from `rng`.
    pub fn search<R: Rng>(
        self,
        maze: &Maze,
        start: Point,
        end: Point,
        rng: &mut R,
    ) -> Result<Option<MazeSearchResult>, SearchError> {
        for point in [start, end] {
            if !maze.grid().contains(&point) {
                return Err(SearchError::OutOfBounds {
                    point,
                    rows: maze.rows(),
                    cols: maze.cols(),
                });
            }
        }
        if !maze.is_passable(&start) || !maze.is_passable(&end) {
            log::debug!("{self}: {start}->{end} has a blocked endpoint");
            return Ok(None);
        }

        let result = match self {
            Searcher::Dfs => dfs::dfs(maze, start, end, rng),
            Searcher::DfsMinDistance => dfs_min_distance::dfs_min_distance(maze, start, end),
            Searcher::Bfs => bfs::bfs(maze, start, end),
            Searcher::BestFirst => best_first::BestFirstSearch::new(maze, start, end).find(),
            Searcher::Dijkstra => dijkstra::DijkstraSearch::new(maze, start, end).find(),
            Searcher::AStar => astar::AStarSearch::new(maze, start, end).find(),
        };
        match &result {
            Some(r) => log::debug!(
                "{self}: {start}->{end} in {} steps, {} records",
                r.len(),
                r.records.len()
            ),
            None => log::debug!("{self}: {end} is unreachable from {start}"),
        }

        Ok(result)
    }
}

impl std::str::FromStr for Searcher {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Searcher::ALL
            .into_iter()
            .find(|a| a.to_string() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchByNameError {
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Runs the searcher named `algorithm` with a process-seeded RNG.
pub fn search(
    algorithm: &str,
    maze: &Maze,
    start: Point,
    end: Point,
) -> Result<Option<MazeSearchResult>, SearchByNameError> {
    let searcher: Searcher = algorithm.parse()?;
    Ok(searcher.search(maze, start, end, &mut rand::rng())?)
}

#[inline(always)]
pub(crate) fn found(maze: &Maze, points: Vec<Point>, records: Vec<SearchStep>) -> MazeSearchResult {
    MazeSearchResult {
        rows: maze.rows(),
        cols: maze.cols(),
        points,
        records,
    }
}
