//! Grid addressing.
//!
//! Cells are addressed by `(x, y)` with `0 <= x < cols` and `0 <= y < rows`,
//! and stored row-major, so `index = x + y * cols`.

use derive_more::Display;

pub type Coord = usize;

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({x},{y})")]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline(always)]
    #[must_use]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The number of unit steps between two points when moving along the axes.
    ///
    /// ```
    /// use maze::grid::Point;
    /// assert_eq!(Point::new(0, 0).manhattan_distance(&Point::new(2, 2)), 4);
    /// assert_eq!(Point::new(3, 1).manhattan_distance(&Point::new(1, 4)), 5);
    /// assert_eq!(Point::new(7, 7).manhattan_distance(&Point::new(7, 7)), 0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn manhattan_distance(&self, other: &Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Both coordinates are even.
    #[inline(always)]
    #[must_use]
    pub fn is_room(&self) -> bool {
        self.x & 1 == 0 && self.y & 1 == 0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right, // x++
    Down,  // y++
    Left,  // x--
    Up,    // y--
}

impl Direction {
    /// Expansion order used by every search.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    pub rows: Coord,
    pub cols: Coord,
}

impl Grid {
    #[inline(always)]
    #[must_use]
    pub const fn new(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether a point lies within the grid.
    ///
    /// ```
    /// use maze::grid::{Grid, Point};
    /// let g = Grid::new(3, 5);
    /// assert!(g.contains(&Point::new(4, 2)));
    /// assert!(!g.contains(&Point::new(5, 2)));
    /// assert!(!g.contains(&Point::new(4, 3)));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        p.x < self.cols && p.y < self.rows
    }

    /// Linear index of a point.
    ///
    /// ```
    /// use maze::grid::{Grid, Point};
    /// let g = Grid::new(3, 5);
    /// assert_eq!(g.index(&Point::new(0, 0)), 0);
    /// assert_eq!(g.index(&Point::new(4, 0)), 4);
    /// assert_eq!(g.index(&Point::new(1, 2)), 11);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index(&self, p: &Point) -> usize {
        debug_assert!(self.contains(p), "{p} is outside {self:?}");
        p.x + p.y * self.cols
    }

    #[inline(always)]
    #[must_use]
    pub fn point(&self, index: usize) -> Point {
        debug_assert!(index < self.len());
        Point::new(index % self.cols, index / self.cols)
    }

    /// Moves `distance` cells towards `direction`, if that stays within the grid.
    ///
    /// Generation moves between rooms with `distance = 2`; searches use unit steps.
    ///
    /// ```
    /// use maze::grid::{Direction, Grid, Point};
    /// let g = Grid::new(5, 5);
    /// assert_eq!(g.step(&Point::new(0, 0), Direction::Right, 2), Some(Point::new(2, 0)));
    /// assert_eq!(g.step(&Point::new(0, 0), Direction::Up, 1), None);
    /// assert_eq!(g.step(&Point::new(4, 4), Direction::Down, 2), None);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn step(&self, p: &Point, direction: Direction, distance: Coord) -> Option<Point> {
        #[rustfmt::skip]
        let next = match direction {
            Direction::Right => Point::new(p.x.checked_add(distance)?, p.y),
            Direction::Down  => Point::new(p.x, p.y.checked_add(distance)?),
            Direction::Left  => Point::new(p.x.checked_sub(distance)?, p.y),
            Direction::Up    => Point::new(p.x, p.y.checked_sub(distance)?),
        };
        self.contains(&next).then_some(next)
    }

    /// Number of rooms (cells with both coordinates even).
    ///
    /// ```
    /// use maze::grid::Grid;
    /// assert_eq!(Grid::new(3, 3).rooms(), 4);
    /// assert_eq!(Grid::new(25, 25).rooms(), 169);
    /// assert_eq!(Grid::new(1, 7).rooms(), 4);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn rooms(&self) -> usize {
        self.rows.div_ceil(2) * self.cols.div_ceil(2)
    }

    /// Both dimensions are odd.
    #[inline(always)]
    #[must_use]
    pub fn has_odd_dimensions(&self) -> bool {
        self.rows & 1 == 1 && self.cols & 1 == 1
    }
}
