use rand::Rng;

use crate::algorithms::SearchError;
use crate::algorithms::Searcher;
use crate::grid::Grid;
use crate::grid::Point;
use crate::maze::Cell;
use crate::maze::Maze;
use crate::maze::MazeParseError;
use crate::maze::MazeSearchResult;

const RANDOM_STATE_MAX_TRIES: usize = 10_000;

/// A maze together with the two points to connect.
#[derive(Clone, PartialEq, Eq)]
pub struct MazeProblem {
    pub maze: Maze,
    pub start: Point,
    pub end: Point,
}

impl MazeProblem {
    #[must_use]
    pub fn new(maze: Maze, start: Point, end: Point) -> Self {
        Self { maze, start, end }
    }

    /// From the top-left cell to the bottom-right one.
    ///
    /// Both are rooms when the dimensions are odd.
    #[must_use]
    pub fn corners(maze: Maze) -> Self {
        let end = Point::new(maze.cols().saturating_sub(1), maze.rows().saturating_sub(1));
        Self::new(maze, Point::new(0, 0), end)
    }

    /// Picks both endpoints among the passable cells at random.
    ///
    /// Gives up with `None` after a bounded number of draws, which only
    /// happens on (nearly) fully blocked mazes.
    pub fn randomize<R: Rng>(maze: Maze, rng: &mut R) -> Option<Self> {
        let start = random_passable(&maze, rng);
        let end = random_passable(&maze, rng);
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(maze, start, end)),
            _ => {
                log::warn!(
                    "No passable cell found in {RANDOM_STATE_MAX_TRIES} tries on {:?}",
                    maze
                );
                None
            }
        }
    }

    pub fn solve<R: Rng>(
        &self,
        searcher: Searcher,
        rng: &mut R,
    ) -> Result<Option<MazeSearchResult>, SearchError> {
        searcher.search(&self.maze, self.start, self.end, rng)
    }
}

fn random_passable<R: Rng>(maze: &Maze, rng: &mut R) -> Option<Point> {
    if maze.grid().is_empty() {
        return None;
    }
    for _tries in 0..RANDOM_STATE_MAX_TRIES {
        let p = Point::new(
            rng.random_range(0..maze.cols()),
            rng.random_range(0..maze.rows()),
        );
        if maze.is_passable(&p) {
            return Some(p);
        }
    }
    None
}

impl std::fmt::Display for MazeProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "MazeProblem({}x{}, {}->{}):",
            self.maze.rows(),
            self.maze.cols(),
            self.start,
            self.end
        )?;
        for y in 0..self.maze.rows() {
            for x in 0..self.maze.cols() {
                let p = Point::new(x, y);
                if p == self.start {
                    write!(f, "S")?;
                } else if p == self.end {
                    write!(f, "G")?;
                } else {
                    write!(f, "{}", self.maze.at(&p))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for MazeProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "MazeProblem({:?}, {}->{})", self.maze, self.start, self.end)
    }
}

/// Parses a maze with exactly one `S` (start) and one `G` (goal), both on
/// passable cells.
impl std::convert::TryFrom<&str> for MazeProblem {
    type Error = MazeParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();

        if lines.is_empty() || lines[0].is_empty() {
            return Err(MazeParseError::EmptyInput);
        }

        let cols = lines[0].chars().count();
        let rows = lines.len();
        let mut data = Vec::<u8>::with_capacity(rows * cols);
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;

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
                let marker = match ch {
                    'S' => &mut start,
                    'G' => &mut end,
                    ch => {
                        let cell = Cell::try_from(ch)
                            .map_err(|e| MazeParseError::InvalidCell { e, x, y })?;
                        data.push(cell.into());
                        continue;
                    }
                };
                if marker.replace(Point::new(x, y)).is_some() {
                    return Err(MazeParseError::DuplicateMarker(ch));
                }
                data.push(Cell::Passable.into());
            }
        }

        let start = start.ok_or(MazeParseError::MissingMarker('S'))?;
        let end = end.ok_or(MazeParseError::MissingMarker('G'))?;
        let maze = Maze::new_unchecked(Grid::new(rows, cols), data, vec![]);

        Ok(Self::new(maze, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use crate::generators::Generator;

    #[test]
    fn parse() {
        let p = MazeProblem::try_from(indoc! {"
            S.#
            #..
            #.G
        "})
        .unwrap();
        assert_eq!(p.start, Point::new(0, 0));
        assert_eq!(p.end, Point::new(2, 2));
        assert_eq!(p.maze.data(), &[1, 1, 0, 0, 1, 1, 0, 1, 1]);
        assert_eq!(
            p.to_string(),
            "MazeProblem(3x3, (0,0)->(2,2)):\nS░█\n█░░\n█░G\n"
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            MazeProblem::try_from("").err(),
            Some(MazeParseError::EmptyInput)
        );
        assert_eq!(
            MazeProblem::try_from("S..\n...").err(),
            Some(MazeParseError::MissingMarker('G'))
        );
        assert_eq!(
            MazeProblem::try_from("..G\n...").err(),
            Some(MazeParseError::MissingMarker('S'))
        );
        assert_eq!(
            MazeProblem::try_from("S.G\nG..").err(),
            Some(MazeParseError::DuplicateMarker('G'))
        );
        assert_eq!(
            MazeProblem::try_from("S.G\n..").err(),
            Some(MazeParseError::RaggedLine {
                y: 1,
                found: 2,
                expected: 3
            })
        );
        assert!(matches!(
            MazeProblem::try_from("S.G\n.x."),
            Err(MazeParseError::InvalidCell { x: 1, y: 1, .. })
        ));
    }

    #[test]
    fn corners_of_a_generated_maze() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let maze = Generator::Prim.generate(9, 11, &mut rng).unwrap();
        let p = MazeProblem::corners(maze);
        assert_eq!((p.start, p.end), (Point::new(0, 0), Point::new(10, 8)));

        for searcher in Searcher::ALL {
            let r = p.solve(searcher, &mut rng).unwrap().unwrap();
            assert!(r.is_valid_path(&p.start, &p.end), "{searcher}");
        }
    }

    #[test]
    fn randomize_picks_passable_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let maze = Generator::Kruskal.generate(7, 7, &mut rng).unwrap();
        for _ in 0..50 {
            let p = MazeProblem::randomize(maze.clone(), &mut rng).unwrap();
            assert!(p.maze.is_passable(&p.start));
            assert!(p.maze.is_passable(&p.end));
        }

        let blocked = Maze::from_data(3, 3, vec![0; 9]).unwrap();
        assert_eq!(MazeProblem::randomize(blocked, &mut rng), None);
    }
}
