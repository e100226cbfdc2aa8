// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Disjoint-set forest and the exercises built on it.
//!
//! ```text
//!   parent: [0, 0, 0, 3, 3]      0       3
//!   rank:   [1, 0, 0, 1, 0]     / \      |
//!                              1   2     4
//! ```
//!
//! `find` compresses paths as it walks; `union` hangs the shallower root
//! under the deeper one. Together they keep operations near-constant.

mod connectivity;
mod grouping;

pub use connectivity::*;
pub use grouping::*;

/// Disjoint sets over `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.components
    }

    /// Representative of `x`'s set.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were
    /// already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (low, high) = if self.rank[ra] < self.rank[rb] { (ra, rb) } else { (rb, ra) };
        self.parent[low] = high;
        if self.rank[low] == self.rank[high] {
            self.rank[high] += 1;
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Index pair from an `[a, b]` edge row, if both ends lie in `0..n`.
pub(crate) fn edge(row: &[i32], n: usize) -> Option<(usize, usize)> {
    let &[a, b] = row else { return None };
    let a = usize::try_from(a).ok().filter(|&a| a < n)?;
    let b = usize::try_from(b).ok().filter(|&b| b < n)?;
    Some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_track_components() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.count(), 5);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2));
        assert!(uf.union(3, 4));
        assert_eq!(uf.count(), 2);
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(2, 3));
        assert_eq!(uf.len(), 5);
    }

    #[test]
    fn find_compresses() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(1, 3);
        let root = uf.find(0);
        for x in 0..4 {
            assert_eq!(uf.find(x), root);
            assert_eq!(uf.parent[x], root);
        }
    }

    #[test]
    fn edge_rows() {
        assert_eq!(edge(&[0, 2], 3), Some((0, 2)));
        assert_eq!(edge(&[0, 3], 3), None);
        assert_eq!(edge(&[-1, 0], 3), None);
        assert_eq!(edge(&[0], 3), None);
    }
}
