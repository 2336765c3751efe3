// Linear-scan selection of the best element in an unordered working set.
//
// The open sets of best-first, Dijkstra and A* are plain vectors. Extracting
// the best element is a single left-to-right fold over the candidates followed
// by a swap-with-last removal, so it costs O(n) per extraction and O(1) per
// insertion.
//
// Ties keep the earliest candidate found by the fold:
//
// ```text
//   0   1   2   3   4
//   3   1   4   1   5
//       ^       ^
//    kept     ignored (not strictly better)
// ```

use std::cmp::Ordering;

/// Index of the best element by `cmp`, or `None` on an empty slice.
///
/// Only strict improvements replace the current candidate.
///
/// ```
/// use maze::derank::derank_by;
/// let a = [3, 1, 4, 1, 5];
/// assert_eq!(derank_by(&a, |l, r| l.cmp(r)), Some(1));
/// assert_eq!(derank_by::<u8, _>(&[], |l, r| l.cmp(r)), None);
/// ```
#[inline(always)]
#[must_use]
pub fn derank_by<T, F>(a: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if a.is_empty() {
        return None;
    }
    let mut best = 0usize;
    for i in 1..a.len() {
        if cmp(&a[best], &a[i]) == Ordering::Greater {
            best = i;
        }
    }
    Some(best)
}

/// Removes and returns the best element by `cmp`.
///
/// The last element takes the removed element's slot.
///
/// ```
/// use maze::derank::pick;
/// let mut v = vec![3, 1, 4, 1, 5];
/// assert_eq!(pick(&mut v, |l, r| l.cmp(r)), Some(1));
/// assert_eq!(v, vec![3, 5, 4, 1]);
/// ```
#[inline(always)]
pub fn pick<T, F>(v: &mut Vec<T>, cmp: F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let i = derank_by(v.as_slice(), cmp)?;
    Some(v.swap_remove(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_min_index<T: PartialOrd>(xs: &[T]) -> usize {
        let mut min_i = 0;
        for (i, x) in xs.iter().enumerate() {
            if *x < xs[min_i] {
                min_i = i;
            }
        }
        min_i
    }

    #[test]
    fn matches_first_minimum() {
        let a = vec![
            1u8, 5u8, 0u8, 5u8, 0u8, 4u8, 4u8, 6u8, 3u8, 7u8, 2u8, 1u8, 6u8, 3u8, 7u8, 2u8,
        ];
        assert_eq!(derank_by(&a, |l, r| l.cmp(r)), Some(linear_min_index(&a)));
        assert_eq!(derank_by(&a, |l, r| l.cmp(r)), Some(2));
    }

    #[test]
    fn single_element() {
        let mut v = vec![9u8];
        assert_eq!(pick(&mut v, |l, r| l.cmp(r)), Some(9));
        assert!(v.is_empty());
        assert_eq!(pick(&mut v, |l, r| l.cmp(r)), None);
    }

    #[test]
    fn picks_in_sorted_order() {
        let mut v = vec![7u32, 3, 9, 1, 4, 4, 8, 0, 2];
        let mut sorted = v.clone();
        sorted.sort_unstable();

        let mut out = vec![];
        while let Some(x) = pick(&mut v, |l, r| l.cmp(r)) {
            out.push(x);
        }
        assert_eq!(out, sorted);
    }

    #[test]
    fn ties_prefer_earliest() {
        // (key, insertion order)
        let mut v = vec![(2, 'a'), (1, 'b'), (1, 'c'), (2, 'd')];
        let by_key = |l: &(u8, char), r: &(u8, char)| l.0.cmp(&r.0);

        assert_eq!(pick(&mut v, by_key), Some((1, 'b')));
        // 'd' moved into 'b's slot, 'c' is still ahead of it.
        assert_eq!(v, vec![(2, 'a'), (2, 'd'), (1, 'c')]);
        assert_eq!(pick(&mut v, by_key), Some((1, 'c')));
        assert_eq!(pick(&mut v, by_key), Some((2, 'a')));
        assert_eq!(pick(&mut v, by_key), Some((2, 'd')));
    }
}
