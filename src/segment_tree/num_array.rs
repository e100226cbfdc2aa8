// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range sums over a mutable array.

use super::SegmentTree;

fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// 307. Range Sum Query - Mutable
///
/// Prefix-free range sums with point updates, both O(log n).
pub struct NumArray {
    tree: SegmentTree<i64, fn(i64, i64) -> i64>,
}

impl NumArray {
    pub fn new(nums: Vec<i32>) -> Self {
        let values: Vec<i64> = nums.into_iter().map(i64::from).collect();
        NumArray {
            tree: SegmentTree::from_slice(&values, add),
        }
    }

    /// Out-of-range indices are ignored.
    pub fn update(&mut self, index: i32, val: i32) {
        if let Ok(index) = usize::try_from(index) {
            let _ = self.tree.update(index, i64::from(val));
        }
    }

    /// Sum of `nums[left..=right]`; 0 for an invalid range.
    pub fn sum_range(&self, left: i32, right: i32) -> i32 {
        let (Ok(left), Ok(right)) = (usize::try_from(left), usize::try_from(right)) else {
            return 0;
        };
        match self.tree.query(left..right + 1) {
            Ok(Some(sum)) => sum as i32,
            _ => 0,
        }
    }
}
