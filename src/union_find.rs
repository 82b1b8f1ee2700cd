//! Disjoint-set partition used by the grid to track open-site connectivity.
//!
//! The grid only relies on the [`UnionFind`] contract: an equivalence relation
//! over `0..len` that can be merged and queried in near-constant amortized time.
//! [`WeightedQuickUnion`] is the shipped implementation (union by size with
//! path halving).

/// Contract for a union-find partition over labels `0..len`.
///
/// Labels outside `0..len` are a programming error and panic.
pub trait UnionFind {
    /// Partition of `len` singleton classes.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Number of labels.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct classes.
    fn count(&self) -> usize;

    /// Representative of the class containing `a`.
    fn find(&mut self, a: usize) -> usize;

    /// Representative of the class containing `a`, without restructuring.
    ///
    /// Same answer as [`find`](Self::find); used where only `&self` is available.
    fn root(&self, a: usize) -> usize;

    /// Merge the classes containing `a` and `b`. No-op if already merged.
    fn union(&mut self, a: usize, b: usize);

    /// Whether `a` and `b` are in the same class.
    fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Weighted quick-union with path halving.
///
/// `find` takes `&mut self` because it compresses paths as it walks them.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind for WeightedQuickUnion {
    fn with_len(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut a: usize) -> usize {
        while self.parent[a] != a {
            // Point every other node at its grandparent
            self.parent[a] = self.parent[self.parent[a]];
            a = self.parent[a];
        }
        a
    }

    fn root(&self, mut a: usize) -> usize {
        while self.parent[a] != a {
            a = self.parent[a];
        }
        a
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        // Smaller tree hangs under the larger root
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
        }
        self.count -= 1;
    }
}
