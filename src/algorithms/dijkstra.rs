//! Implementation of Dijkstra's path-finding algorithm.

use crate::algorithms::found;
use crate::derank::pick;
use crate::grid::Point;
use crate::maze::Maze;
use crate::maze::MazeSearchResult;
use crate::maze::SearchStep;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// Payload of a Dijkstra node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct DijkstraValue {
    /// Steps from the start along the best known path.
    pub(crate) g: usize,
    /// Expanded, so `g` is final.
    pub(crate) closed: bool,
}

impl DijkstraValue {
    pub(crate) fn new(g: usize) -> Self {
        Self { g, closed: false }
    }
}

/// Dijkstra's algorithm with a linear-scan open list.
///
/// Nodes are closed when picked. Open nodes that are reached through a
/// shorter path are relaxed in place; their open-list entry already exists
/// and reads the new `g` on the next pick.
#[derive(Debug)]
pub(crate) struct DijkstraSearch<'m> {
    maze: &'m Maze,
    end: Point,
    search_tree: SearchTree<DijkstraValue>,
    /// Open nodes, by tree index.
    open: Vec<usize>,
    records: Vec<SearchStep>,
}

impl<'m> DijkstraSearch<'m> {
    #[must_use]
    pub(crate) fn new(maze: &'m Maze, start: Point, end: Point) -> Self {
        let mut search = Self {
            maze,
            end,
            search_tree: SearchTree::new(*maze.grid()),
            open: Vec::new(),
            records: Vec::new(),
        };
        let start_index = search
            .search_tree
            .push(SearchTreeNode::new(start, None, DijkstraValue::new(0)));
        search.open.push(start_index);
        search
    }

    /// Runs until `end` is closed or nothing is left open.
    ///
    /// Records the edge into each node as it is closed.
    #[must_use]
    pub(crate) fn find(mut self) -> Option<MazeSearchResult> {
        while let Some(node_index) = self.pop() {
            let node = &mut self.search_tree[node_index];
            node.value.closed = true;
            let (p, g) = (*node.point(), node.value().g);

            self.records.extend(self.search_tree.step_into(node_index));
            if p == self.end {
                return Some(found(self.maze, self.search_tree.path(node_index), self.records));
            }

            for n in self.maze.neighbours(&p) {
                let i = self.search_tree.index(&n);
                if !self.search_tree.contains(i) {
                    let new_index = self
                        .search_tree
                        .push(SearchTreeNode::new(n, Some(node_index), DijkstraValue::new(g + 1)));
                    self.open.push(new_index);
                    continue;
                }

                let neigh = &mut self.search_tree[i];
                if !neigh.value().closed && neigh.value().g > g + 1 {
                    log::trace!("{n}: g {} -> {} through {p}", neigh.value().g, g + 1);
                    neigh.reach(node_index, DijkstraValue::new(g + 1));
                }
            }
        }

        None
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<usize> {
        let search_tree = &self.search_tree;
        pick(&mut self.open, |a, b| {
            search_tree[*a].value().g.cmp(&search_tree[*b].value().g)
        })
    }
}
