// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary indexed (Fenwick) tree.
//!
//! Slot `i` (1-based) holds the sum of the `i & -i` values ending at `i`;
//! prefix sums and point additions each touch O(log n) slots.

/// Prefix sums over `0..len` with point additions.
#[derive(Debug, Clone)]
pub struct Fenwick {
    slots: Vec<i64>,
}

impl Fenwick {
    pub fn new(len: usize) -> Self {
        Fenwick {
            slots: vec![0; len + 1],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` at `index`; out-of-range indices are ignored.
    pub fn add(&mut self, index: usize, delta: i64) {
        let mut i = index + 1;
        while i < self.slots.len() {
            self.slots[i] += delta;
            i += i & i.wrapping_neg();
        }
    }

    /// Sum of positions `0..end` (clamped to the length).
    pub fn prefix(&self, end: usize) -> i64 {
        let mut i = end.min(self.len());
        let mut sum = 0;
        while i > 0 {
            sum += self.slots[i];
            i -= i & i.wrapping_neg();
        }
        sum
    }
}

/// 315. Count of Smaller Numbers After Self
///
/// Walks right to left, counting already-seen values of lower rank.
pub fn count_smaller(nums: Vec<i32>) -> Vec<i32> {
    let mut ranks = nums.clone();
    ranks.sort_unstable();
    ranks.dedup();
    let mut seen = Fenwick::new(ranks.len());
    let mut counts = vec![0; nums.len()];
    for (i, &num) in nums.iter().enumerate().rev() {
        let rank = ranks.partition_point(|&v| v < num);
        counts[i] = seen.prefix(rank) as i32;
        seen.add(rank, 1);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_sums() {
        let mut tree = Fenwick::new(5);
        for (i, v) in [3, 1, 4, 1, 5].into_iter().enumerate() {
            tree.add(i, v);
        }
        assert_eq!(tree.prefix(0), 0);
        assert_eq!(tree.prefix(3), 8);
        assert_eq!(tree.prefix(5), 14);
        assert_eq!(tree.prefix(99), 14);
        tree.add(0, -3);
        assert_eq!(tree.prefix(2), 1);
        tree.add(10, 7);
        assert_eq!(tree.prefix(5), 11);
    }

    #[test]
    fn smaller_after_self() {
        assert_eq!(count_smaller(vec![5, 2, 6, 1]), vec![2, 1, 1, 0]);
        assert_eq!(count_smaller(vec![-1]), vec![0]);
        assert_eq!(count_smaller(vec![-1, -1]), vec![0, 0]);
        assert!(count_smaller(Vec::new()).is_empty());
    }
}
