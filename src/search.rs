use crate::grid::Grid;
use crate::grid::Point;
use crate::maze::SearchStep;

/// A discovered cell.
///
/// `parent` is the grid index of the node it was reached from, `None` for the
/// start. `V` is the algorithm-specific payload (distances, flags).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTreeNode<V> {
    pub(crate) point: Point,
    pub(crate) parent: Option<usize>,
    pub(crate) value: V,
}

impl<V> SearchTreeNode<V> {
    pub fn new(point: Point, parent: Option<usize>, value: V) -> Self {
        Self {
            point,
            parent,
            value,
        }
    }

    /// Gives this Node a better path through a new parent.
    pub fn reach(&mut self, new_parent: usize, value: V) {
        self.parent = Some(new_parent);
        self.value = value;
    }

    pub fn point(&self) -> &Point {
        &self.point
    }
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// All the nodes discovered by one search call.
///
/// Nodes live in a slot per grid cell, addressed by the same linear index as
/// the maze, and are created lazily on discovery. Parents are slot indices.
pub(crate) struct SearchTree<V> {
    grid: Grid,
    nodes: Vec<Option<SearchTreeNode<V>>>,
    len: usize,
}

impl<V> SearchTree<V> {
    #[must_use]
    pub(crate) fn new(grid: Grid) -> Self {
        let mut nodes = Vec::with_capacity(grid.len());
        nodes.resize_with(grid.len(), || None);
        Self {
            grid,
            nodes,
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn index(&self, p: &Point) -> usize {
        self.grid.index(p)
    }

    #[inline(always)]
    pub(crate) fn get(&self, i: usize) -> Option<&SearchTreeNode<V>> {
        self.nodes[i].as_ref()
    }

    #[inline(always)]
    pub(crate) fn contains(&self, i: usize) -> bool {
        self.nodes[i].is_some()
    }

    /// Stores a newly discovered node, returning its index.
    #[inline(always)]
    pub(crate) fn push(&mut self, node: SearchTreeNode<V>) -> usize {
        let i = self.grid.index(&node.point);
        debug_assert!(self.nodes[i].is_none(), "{} discovered twice", node.point);
        self.nodes[i] = Some(node);
        self.len += 1;
        i
    }

    #[inline(always)]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The edge a node was reached through, if it has a parent.
    #[inline(always)]
    pub(crate) fn step_into(&self, i: usize) -> Option<SearchStep> {
        let node = self.get(i)?;
        let parent = self.get(node.parent()?)?;
        Some(SearchStep::new(parent.point, node.point))
    }

    /// Follows parents from `end` back to the start.
    ///
    /// Returns the points from start to `end`, both included.
    #[must_use]
    pub(crate) fn path(&self, end: usize) -> Vec<Point> {
        let mut points = Vec::<Point>::new();
        let mut node_index = Some(end);

        while let Some(i) = node_index {
            let Some(node) = self.get(i) else {
                break;
            };
            points.push(node.point);
            debug_assert!(points.len() <= self.len, "Parent links form a cycle");
            node_index = node.parent();
        }

        points.reverse();
        points
    }
}

impl<V> std::ops::Index<usize> for SearchTree<V> {
    type Output = SearchTreeNode<V>;

    /// Panics on an undiscovered slot.
    #[inline(always)]
    fn index(&self, i: usize) -> &Self::Output {
        match &self.nodes[i] {
            Some(node) => node,
            None => panic!("No node at {}", self.grid.point(i)),
        }
    }
}

impl<V> std::ops::IndexMut<usize> for SearchTree<V> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let p = self.grid.point(i);
        match &mut self.nodes[i] {
            Some(node) => node,
            None => panic!("No node at {p}"),
        }
    }
}

impl<V> std::fmt::Debug for SearchTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}
