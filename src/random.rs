//! Randomised selection primitives.

use rand::Rng;

use crate::grid::Grid;
use crate::grid::Point;

/// Shuffles a slice in place (Fisher–Yates, backwards pass).
///
/// ```
/// use rand_chacha::ChaCha8Rng;
/// use rand_chacha::rand_core::SeedableRng;
/// use maze::random::shuffle;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let mut a = [1, 2, 3, 4, 5];
/// shuffle(&mut a, &mut rng);
/// a.sort();
/// assert_eq!(a, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(a: &mut [T], rng: &mut R) {
    for i in (2..=a.len()).rev() {
        let j = rng.random_range(0..i);
        a.swap(i - 1, j);
    }
}

/// Removes and returns a uniformly random element in O(1).
///
/// The tail is popped and moved into the drawn slot, so the order of the
/// remaining elements is not preserved.
///
/// ```
/// use rand_chacha::ChaCha8Rng;
/// use rand_chacha::rand_core::SeedableRng;
/// use maze::random::pick_any;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let mut v = vec![7];
/// assert_eq!(pick_any(&mut v, &mut rng), Some(7));
/// assert_eq!(pick_any(&mut v, &mut rng), None);
/// ```
pub fn pick_any<T, R: Rng>(v: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if v.is_empty() {
        return None;
    }
    let i = rng.random_range(0..v.len());
    let mut value = v.pop()?;
    // The drawn slot survived the pop unless it was the tail itself.
    if i < v.len() {
        std::mem::swap(&mut value, &mut v[i]);
    }
    Some(value)
}

/// A random room (both coordinates even) within the grid.
#[must_use]
pub fn random_room<R: Rng>(grid: &Grid, rng: &mut R) -> Point {
    debug_assert!(!grid.is_empty());
    let x = rng.random_range(0..grid.cols) & !1;
    let y = rng.random_range(0..grid.rows) & !1;
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in 0..40 {
            let original: Vec<usize> = (0..n).collect();
            for _ in 0..25 {
                let mut shuffled = original.clone();
                shuffle(&mut shuffled, &mut rng);
                assert_eq!(shuffled.len(), n);
                shuffled.sort_unstable();
                assert_eq!(shuffled, original);
            }
        }
    }

    #[test]
    fn shuffle_reaches_every_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [[false; 4]; 4];
        for _ in 0..500 {
            let mut a = [0, 1, 2, 3];
            shuffle(&mut a, &mut rng);
            for (position, value) in a.iter().enumerate() {
                seen[*value][position] = true;
            }
        }
        assert!(seen.iter().flatten().all(|s| *s));
    }

    #[test]
    fn pick_any_drains_the_collection() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let n = 100usize;
        let mut v: Vec<usize> = (0..n).collect();
        let mut picked = Vec::with_capacity(n);

        while let Some(x) = pick_any(&mut v, &mut rng) {
            assert!(!v.contains(&x), "{x} is still in the collection");
            picked.push(x);
            assert_eq!(picked.len() + v.len(), n);
        }

        assert!(v.is_empty());
        picked.sort_unstable();
        assert_eq!(picked, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn pick_any_is_uniform() {
        const TRIALS: usize = 40_000;
        const N: usize = 4;

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut counts = [0usize; N];
        for _ in 0..TRIALS {
            let mut v: Vec<usize> = (0..N).collect();
            if let Some(x) = pick_any(&mut v, &mut rng) {
                counts[x] += 1;
            }
        }

        let expected = TRIALS / N;
        for (value, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 600,
                "{value} was picked {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn random_rooms_are_rooms() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let grid = Grid::new(7, 11);
        for _ in 0..200 {
            let p = random_room(&grid, &mut rng);
            assert!(p.is_room());
            assert!(grid.contains(&p));
        }
    }
}
