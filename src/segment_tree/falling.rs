// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stacking squares on a compressed skyline.

use std::ops::Range;

/// Range-assign / range-max tree with lazy propagation.
struct MaxAssignTree {
    len: usize,
    max: Vec<i32>,
    pending: Vec<Option<i32>>,
}

impl MaxAssignTree {
    fn new(len: usize) -> Self {
        let size = 4 * len.max(1);
        MaxAssignTree {
            len,
            max: vec![0; size],
            pending: vec![None; size],
        }
    }

    fn apply(&mut self, node: usize, value: i32) {
        self.max[node] = value;
        self.pending[node] = Some(value);
    }

    fn push_down(&mut self, node: usize) {
        if let Some(value) = self.pending[node].take() {
            self.apply(2 * node, value);
            self.apply(2 * node + 1, value);
        }
    }

    fn query(&mut self, target: Range<usize>) -> i32 {
        self.query_in(1, 0..self.len, &target)
    }

    fn query_in(&mut self, node: usize, span: Range<usize>, target: &Range<usize>) -> i32 {
        if span.start >= target.end || span.end <= target.start {
            return 0;
        }
        if target.start <= span.start && span.end <= target.end {
            return self.max[node];
        }
        self.push_down(node);
        let mid = span.start + span.len() / 2;
        let left = self.query_in(2 * node, span.start..mid, target);
        let right = self.query_in(2 * node + 1, mid..span.end, target);
        left.max(right)
    }

    fn assign(&mut self, target: Range<usize>, value: i32) {
        self.assign_in(1, 0..self.len, &target, value);
    }

    fn assign_in(&mut self, node: usize, span: Range<usize>, target: &Range<usize>, value: i32) {
        if span.start >= target.end || span.end <= target.start {
            return;
        }
        if target.start <= span.start && span.end <= target.end {
            self.apply(node, value);
            return;
        }
        self.push_down(node);
        let mid = span.start + span.len() / 2;
        self.assign_in(2 * node, span.start..mid, target, value);
        self.assign_in(2 * node + 1, mid..span.end, target, value);
        self.max[node] = self.max[2 * node].max(self.max[2 * node + 1]);
    }
}

/// 699. Falling Squares
///
/// Each `[left, side]` square drops onto the stack below it and lands on
/// the tallest surface under `[left, left + side)`. Returns the tallest
/// stack after each drop.
///
/// Square edges become compressed coordinates; leaf `i` stands for the gap
/// between the `i`-th and `i + 1`-th distinct edge.
pub fn falling_squares(positions: Vec<Vec<i32>>) -> Vec<i32> {
    let squares: Vec<(i64, i64)> = positions
        .iter()
        .filter_map(|p| match p.as_slice() {
            &[left, side, ..] if side > 0 => Some((i64::from(left), i64::from(left) + i64::from(side))),
            _ => None,
        })
        .collect();
    let mut edges: Vec<i64> = squares.iter().flat_map(|&(l, r)| [l, r]).collect();
    edges.sort_unstable();
    edges.dedup();
    let gap = |x: i64| edges.partition_point(|&e| e < x);

    let mut tree = MaxAssignTree::new(edges.len().saturating_sub(1));
    let mut tallest = 0;
    let mut heights = Vec::with_capacity(squares.len());
    for &(left, right) in &squares {
        let span = gap(left)..gap(right);
        let top = tree.query(span.clone()) + (right - left) as i32;
        tree.assign(span, top);
        tallest = tallest.max(top);
        heights.push(tallest);
    }
    heights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks() {
        assert_eq!(falling_squares(vec![vec![1, 2], vec![2, 3], vec![6, 1]]), vec![2, 5, 5]);
        assert_eq!(falling_squares(vec![vec![100, 100], vec![200, 100]]), vec![100, 100]);
    }

    #[test]
    fn touching_edges_do_not_stack() {
        assert_eq!(falling_squares(vec![vec![1, 2], vec![3, 2], vec![2, 2]]), vec![2, 2, 4]);
    }

    #[test]
    fn covered_square_rises() {
        assert_eq!(falling_squares(vec![vec![1, 5], vec![2, 2], vec![3, 1]]), vec![5, 7, 8]);
    }
}
