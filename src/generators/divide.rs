use rand::Rng;

use crate::generators::Carving;
use crate::grid::Coord;
use crate::grid::Grid;
use crate::grid::Point;
use crate::maze::Axis;
use crate::maze::BLOCKED;
use crate::maze::GenerationStep;
use crate::maze::Maze;

/// Recursive division.
///
/// Starts fully open, splits the grid with a wall along an odd row or column
/// and punches a single passage through it at an even position, then repeats
/// on both halves. Regions two cells thin or less are left alone.
///
/// Records come in `Wall` then `Road` pairs, one per division. Thin strips
/// never divide, so there are usually fewer roads than rooms.
pub(crate) fn divide<R: Rng>(grid: Grid, rng: &mut R) -> Maze {
    let mut carving = Carving::passable(grid);
    let region = Region {
        sx: 0,
        sy: 0,
        ex: grid.cols - 1,
        ey: grid.rows - 1,
    };
    let bias = rng.random::<bool>();
    split(&mut carving, region, bias, rng);
    carving.into_maze()
}

/// Inclusive bounds, all even.
#[derive(Copy, Clone, Debug)]
struct Region {
    sx: Coord,
    sy: Coord,
    ex: Coord,
    ey: Coord,
}

fn split<R: Rng>(carving: &mut Carving, region: Region, bias: bool, rng: &mut R) {
    let Region { sx, sy, ex, ey } = region;
    let (w, h) = (ex - sx + 1, ey - sy + 1);
    if w <= 2 || h <= 2 {
        return;
    }

    // Cut across the longer side, squares take turns.
    let across_rows = match w.cmp(&h) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => bias,
    };

    if across_rows {
        let dy = (sy + rng.random_range(0..h - 1)) | 1;
        for x in sx..=ex {
            carving.set(&Point::new(x, dy), BLOCKED);
        }
        carving.record(GenerationStep::wall(Point::new(sx, dy), Point::new(ex, dy), Axis::X));

        let door = Point::new((sx + rng.random_range(0..=w)) & !1, dy);
        carving.open(&door);
        carving.record(GenerationStep::road(door, door));

        split(carving, Region { ey: dy - 1, ..region }, !bias, rng);
        split(carving, Region { sy: dy + 1, ..region }, !bias, rng);
    } else {
        let dx = (sx + rng.random_range(0..w - 1)) | 1;
        for y in sy..=ey {
            carving.set(&Point::new(dx, y), BLOCKED);
        }
        carving.record(GenerationStep::wall(Point::new(dx, sy), Point::new(dx, ey), Axis::Y));

        let door = Point::new(dx, (sy + rng.random_range(0..=h)) & !1);
        carving.open(&door);
        carving.record(GenerationStep::road(door, door));

        split(carving, Region { ex: dx - 1, ..region }, !bias, rng);
        split(carving, Region { sx: dx + 1, ..region }, !bias, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn builds_spanning_trees() {
        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = Grid::new(15, 21);
            let maze = divide(grid, &mut rng);
            assert!(maze.is_perfect(), "seed {seed}:\n{maze}");
        }
    }

    #[test]
    fn every_wall_gets_one_door() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let grid = Grid::new(11, 13);
        let maze = divide(grid, &mut rng);
        let records = maze.records();

        assert!(!records.is_empty());
        assert_eq!(records.len() % 2, 0);
        assert!(records.len() / 2 < grid.rooms());
        for pair in records.chunks(2) {
            let (
                GenerationStep::Wall { sx, sy, ex, ey, axis },
                GenerationStep::Road { sx: px, sy: py, ex: qx, ey: qy },
            ) = (pair[0], pair[1])
            else {
                panic!("Expected a wall followed by a road, got {pair:?}");
            };
            assert_eq!((px, py), (qx, qy));
            match axis {
                Axis::X => {
                    assert_eq!(sy, ey);
                    assert_eq!(py, sy);
                    assert_eq!(sy % 2, 1);
                    assert!((sx..=ex).contains(&px));
                    assert_eq!(px % 2, 0);
                }
                Axis::Y => {
                    assert_eq!(sx, ex);
                    assert_eq!(px, sx);
                    assert_eq!(sx % 2, 1);
                    assert!((sy..=ey).contains(&py));
                    assert_eq!(py % 2, 0);
                }
            }
            assert!(maze.is_passable(&Point::new(px, py)));
        }
    }

    #[test]
    fn thin_grids_stay_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for (rows, cols) in [(1, 9), (9, 1), (1, 1)] {
            let maze = divide(Grid::new(rows, cols), &mut rng);
            assert!(maze.records().is_empty());
            assert_eq!(maze.passable_count(), rows * cols);
        }
    }

    #[test]
    fn smallest_split() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let maze = divide(Grid::new(3, 3), &mut rng);
        assert_eq!(maze.records().len(), 2);
        assert_eq!(maze.passable_count(), 7);
        assert!(!maze.is_passable(&Point::new(1, 1)));
    }
}
