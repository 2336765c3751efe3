//! Union–find over `0..n`.

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<usize>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Finds the representative of `i`'s set.
    ///
    /// Every node visited on the way up is relinked to its grandparent.
    pub fn find(&mut self, i: usize) -> usize {
        let mut p = i;
        while p != self.parents[p] {
            self.parents[p] = self.parents[self.parents[p]];
            p = self.parents[p];
        }
        p
    }

    /// Merges the sets of `a` and `b`.
    ///
    /// Returns false if they were already the same set.
    ///
    /// ```
    /// use maze::disjoint_set::DisjointSet;
    /// let mut s = DisjointSet::new(3);
    /// assert!(s.union(0, 1));
    /// assert!(!s.union(1, 0));
    /// assert!(s.union(2, 1));
    /// assert_eq!(s.find(0), s.find(2));
    /// ```
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parents[rb] = ra;
        true
    }
}
