//! Depth-first search.

use rand::Rng;

use crate::algorithms::found;
use crate::grid::Point;
use crate::maze::Maze;
use crate::maze::MazeSearchResult;
use crate::maze::SearchStep;
use crate::random::shuffle;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// Depth-first search over a stack of nodes.
///
/// Cells are marked at push time, so each is stacked at most once. Neighbours
/// are pushed in random order. The path found is not shortest in general, but
/// is the only one when the maze is a tree.
///
/// Records the edge into each node as it is popped.
pub(crate) fn dfs<R: Rng>(maze: &Maze, start: Point, end: Point, rng: &mut R) -> Option<MazeSearchResult> {
    let mut search_tree = SearchTree::<()>::new(*maze.grid());
    let mut stack = vec![search_tree.push(SearchTreeNode::new(start, None, ()))];
    let mut records = Vec::<SearchStep>::new();

    while let Some(node_index) = stack.pop() {
        records.extend(search_tree.step_into(node_index));

        let p = *search_tree[node_index].point();
        if p == end {
            return Some(found(maze, search_tree.path(node_index), records));
        }

        let mut next = maze.neighbours(&p);
        shuffle(next.as_mut_slice(), rng);
        for n in next {
            if search_tree.contains(search_tree.index(&n)) {
                continue;
            }
            stack.push(search_tree.push(SearchTreeNode::new(n, Some(node_index), ())));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use crate::problem::MazeProblem;

    #[test]
    fn follows_the_only_corridor() {
        let problem = MazeProblem::try_from(indoc! {"
            S.#...
            #.#.#.
            #...#G
        "})
        .unwrap();
        let expected = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(2, 2),
            Point::new(3, 2),
            Point::new(3, 1),
            Point::new(3, 0),
            Point::new(4, 0),
            Point::new(5, 0),
            Point::new(5, 1),
            Point::new(5, 2),
        ];

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let r = dfs(&problem.maze, problem.start, problem.end, &mut rng).unwrap();
            assert_eq!(r.points, expected);
            assert_eq!(r.records.len(), expected.len() - 1);
        }
    }

    #[test]
    fn records_are_tree_edges() {
        let maze = Maze::from_data(5, 5, vec![1; 25]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let r = dfs(&maze, Point::new(0, 0), Point::new(4, 4), &mut rng).unwrap();

        assert!(r.is_valid_path(&Point::new(0, 0), &Point::new(4, 4)));
        let mut seen = vec![Point::new(0, 0)];
        for step in &r.records {
            assert!(seen.contains(&step.source()), "{step} from an unseen cell");
            assert!(!seen.contains(&step.target()), "{step} revisits a cell");
            assert_eq!(step.source().manhattan_distance(&step.target()), 1);
            seen.push(step.target());
        }
    }
}
