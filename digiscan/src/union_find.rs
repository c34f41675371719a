//! Disjoint-set forest over provisional component labels.
//!
//! Labels are dense indices handed out by [`DisjointSet::make_set`] in
//! increasing order starting at 0. Sets are merged by size and `find`
//! compresses paths iteratively, so deep chains built on large components
//! never recurse.

/// Union-find with path compression and union-by-size.
///
/// Not thread-safe: one instance is owned by a single labeling pass.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
        }
    }

    /// Number of labels created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Append a singleton set and return its label.
    #[inline]
    pub fn make_set(&mut self) -> u32 {
        assert!(
            self.parent.len() < u32::MAX as usize,
            "DisjointSet label space exhausted"
        );
        let label = self.parent.len() as u32;
        self.parent.push(label);
        self.size.push(1);
        label
    }

    /// Canonical representative of the set containing `label`.
    ///
    /// # Panics
    /// If `label` was never returned by [`make_set`](Self::make_set).
    pub fn find(&mut self, label: u32) -> u32 {
        self.check(label);

        // First pass: find root
        let mut root = label;
        loop {
            let parent = self.parent[root as usize];
            if parent == root {
                break;
            }
            root = parent;
        }

        // Second pass: compress path
        let mut current = label;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The smaller set is attached under the larger one. On equal sizes the
    /// root of `a` becomes the new root.
    pub fn union(&mut self, a: u32, b: u32) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        let (child, root) = if self.size[root_a as usize] < self.size[root_b as usize] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[child as usize] = root;
        self.size[root as usize] += self.size[child as usize];
    }

    #[inline]
    pub fn same_set(&mut self, a: u32, b: u32) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of labels in the set containing `label`.
    pub fn set_size(&mut self, label: u32) -> usize {
        let root = self.find(label);
        self.size[root as usize] as usize
    }

    #[inline]
    fn check(&self, label: u32) {
        assert!(
            (label as usize) < self.parent.len(),
            "label {} out of range for DisjointSet of {} labels",
            label,
            self.parent.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_set_assigns_sequential_labels() {
        let mut set = DisjointSet::new();
        for expected in 0..5 {
            assert_eq!(set.make_set(), expected);
        }
        assert_eq!(set.len(), 5);

        // Every label starts as its own root.
        let roots: Vec<u32> = (0..5).map(|l| set.find(l)).collect();
        assert_eq!(roots, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut set = DisjointSet::with_capacity(8);
        for _ in 0..8 {
            set.make_set();
        }
        set.union(0, 1);
        set.union(2, 3);
        set.union(1, 3);
        set.union(5, 6);

        for label in 0..8 {
            let root = set.find(label);
            assert_eq!(set.find(root), root);
        }
    }

    #[test]
    fn test_union_is_persistent() {
        let mut set = DisjointSet::new();
        for _ in 0..6 {
            set.make_set();
        }
        set.union(0, 1);
        assert!(set.same_set(0, 1));

        set.union(2, 3);
        set.union(4, 5);
        set.union(3, 5);
        assert!(set.same_set(0, 1));
        assert!(set.same_set(2, 4));
        assert!(!set.same_set(1, 2));

        set.union(1, 4);
        for a in 0..6 {
            for b in 0..6 {
                assert!(set.same_set(a, b));
            }
        }
    }

    #[test]
    fn test_union_by_size() {
        let mut set = DisjointSet::new();
        for _ in 0..4 {
            set.make_set();
        }
        set.union(1, 2);
        set.union(1, 3);
        assert_eq!(set.set_size(3), 3);

        // Singleton 0 goes under the larger set even when passed first.
        set.union(0, 3);
        assert_eq!(set.find(0), set.find(1));
        assert_eq!(set.find(0), 1);
        assert_eq!(set.set_size(0), 4);
    }

    #[test]
    fn test_union_tie_keeps_first_root() {
        let mut set = DisjointSet::new();
        set.make_set();
        set.make_set();
        set.union(0, 1);
        assert_eq!(set.find(1), 0);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut set = DisjointSet::new();
        set.make_set();
        set.make_set();
        set.union(0, 1);
        set.union(1, 0);
        set.union(0, 0);
        assert_eq!(set.set_size(0), 2);
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut set = DisjointSet::new();
        let n = 100_000;
        for _ in 0..n {
            set.make_set();
        }
        // Each union attaches a singleton under the growing set rooted at 0.
        for label in 1..n {
            set.union(label - 1, label);
        }
        assert_eq!(set.find(n - 1), 0);
        assert_eq!(set.set_size(n / 2), n as usize);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_find_unknown_label_panics() {
        let mut set = DisjointSet::new();
        set.make_set();
        set.find(1);
    }
}
