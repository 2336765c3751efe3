//! Greedy best-first search.

use crate::algorithms::found;
use crate::derank::pick;
use crate::grid::Point;
use crate::maze::Maze;
use crate::maze::MazeSearchResult;
use crate::maze::SearchStep;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// Greedy search ranked only by the Manhattan distance to the goal.
///
/// Ignores how far nodes are from the start, so paths can be long, but it
/// heads straight for the goal on open ground. Each cell is discovered once
/// and never relaxed.
#[derive(Debug)]
pub(crate) struct BestFirstSearch<'m> {
    maze: &'m Maze,
    end: Point,
    /// Node payload is `h`.
    search_tree: SearchTree<usize>,
    /// Discovered but unexpanded nodes, by tree index.
    open: Vec<usize>,
    records: Vec<SearchStep>,
}

impl<'m> BestFirstSearch<'m> {
    #[must_use]
    pub(crate) fn new(maze: &'m Maze, start: Point, end: Point) -> Self {
        let mut search = Self {
            maze,
            end,
            search_tree: SearchTree::new(*maze.grid()),
            open: Vec::new(),
            records: Vec::new(),
        };
        let h = start.manhattan_distance(&end);
        let start_index = search.search_tree.push(SearchTreeNode::new(start, None, h));
        search.open.push(start_index);
        search
    }

    /// Runs to completion, recording the edge into each node as it is picked.
    #[must_use]
    pub(crate) fn find(mut self) -> Option<MazeSearchResult> {
        while let Some(node_index) = self.pop() {
            self.records.extend(self.search_tree.step_into(node_index));

            let p = *self.search_tree[node_index].point();
            if p == self.end {
                return Some(found(self.maze, self.search_tree.path(node_index), self.records));
            }

            for n in self.maze.neighbours(&p) {
                if self.search_tree.contains(self.search_tree.index(&n)) {
                    continue;
                }
                let h = n.manhattan_distance(&self.end);
                let i = self.search_tree.push(SearchTreeNode::new(n, Some(node_index), h));
                self.open.push(i);
            }
        }

        None
    }

    /// Takes the open node closest to the goal, the earliest one on ties.
    #[inline(always)]
    fn pop(&mut self) -> Option<usize> {
        let search_tree = &self.search_tree;
        pick(&mut self.open, |a, b| {
            search_tree[*a].value().cmp(search_tree[*b].value())
        })
    }
}
