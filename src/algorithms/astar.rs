use crate::algorithms::found;
use crate::derank::pick;
use crate::grid::Point;
use crate::maze::Maze;
use crate::maze::MazeSearchResult;
use crate::maze::SearchStep;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// `g` of a node that has been discovered but not reached yet.
const UNREACHED: usize = usize::MAX;

/// Payload of an A* node.
///
/// Keeps the raw `h` around so relaxing `g` does not recompute it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct AStarValue {
    pub(crate) g: usize,
    pub(crate) h: usize,
    pub(crate) closed: bool,
}

impl AStarValue {
    pub(crate) fn new(g: usize, h: usize) -> Self {
        Self { g, h, closed: false }
    }

    /// The ranking value, `g + h`.
    #[inline(always)]
    #[must_use]
    pub(crate) fn f(&self) -> usize {
        self.g.saturating_add(self.h)
    }
}

/// A* with the Manhattan distance to the goal as heuristic.
///
/// The heuristic never overestimates on a unit-step grid and is consistent,
/// so closed nodes are final and the path is a shortest one.
#[derive(Debug)]
pub(crate) struct AStarSearch<'m> {
    maze: &'m Maze,
    end: Point,
    search_tree: SearchTree<AStarValue>,
    /// Open nodes, by tree index.
    open: Vec<usize>,
    records: Vec<SearchStep>,
}

impl<'m> AStarSearch<'m> {
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
        let start_index = search
            .search_tree
            .push(SearchTreeNode::new(start, None, AStarValue::new(0, h)));
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
                    // Discovered unreached, then relaxed right below.
                    let h = n.manhattan_distance(&self.end);
                    let node = SearchTreeNode::new(n, Some(node_index), AStarValue::new(UNREACHED, h));
                    self.open.push(self.search_tree.push(node));
                }

                let neigh = &mut self.search_tree[i];
                if neigh.value().closed || neigh.value().g <= g + 1 {
                    continue;
                }
                if neigh.value().g != UNREACHED {
                    log::trace!("{n}: g {} -> {} through {p}", neigh.value().g, g + 1);
                }
                let h = neigh.value().h;
                neigh.reach(node_index, AStarValue::new(g + 1, h));
            }
        }

        None
    }

    /// Takes the open node with the lowest `f`, the earliest one on ties.
    #[inline(always)]
    fn pop(&mut self) -> Option<usize> {
        let search_tree = &self.search_tree;
        pick(&mut self.open, |a, b| {
            search_tree[*a].value().f().cmp(&search_tree[*b].value().f())
        })
    }
}
