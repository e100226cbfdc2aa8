// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Picking the k best elements.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// 1046. Last Stone Weight
pub fn last_stone_weight(stones: Vec<i32>) -> i32 {
    let mut heap = BinaryHeap::from(stones);
    while heap.len() > 1 {
        let (Some(heaviest), Some(second)) = (heap.pop(), heap.pop()) else {
            break;
        };
        if heaviest != second {
            heap.push(heaviest - second);
        }
    }
    heap.pop().unwrap_or(0)
}

/// 973. K Closest Points to Origin
///
/// Closest first; equal distances keep input order.
pub fn k_closest(points: Vec<Vec<i32>>, k: i32) -> Vec<Vec<i32>> {
    let k = k.max(0) as usize;
    let distance = |p: &[i32]| -> i64 { p.iter().map(|&c| i64::from(c) * i64::from(c)).sum() };
    // Max-heap of the k best so far, keyed by (distance, index).
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (i, point) in points.iter().enumerate() {
        heap.push((distance(point), i));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec()
        .into_iter()
        .map(|(_, i)| points[i].clone())
        .collect()
}

/// 215. Kth Largest Element in an Array
///
/// -1 when `k` is out of range.
pub fn find_kth_largest(nums: Vec<i32>, k: i32) -> i32 {
    let k = k.max(0) as usize;
    if k == 0 || k > nums.len() {
        return -1;
    }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for num in nums {
        heap.push(Reverse(num));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.peek().map_or(-1, |Reverse(v)| *v)
}

/// 347. Top K Frequent Elements
///
/// Most frequent first; ties go to the smaller value.
pub fn top_k_frequent(nums: Vec<i32>, k: i32) -> Vec<i32> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for num in nums {
        *counts.entry(num).or_default() += 1;
    }
    let mut heap: BinaryHeap<(usize, Reverse<i32>)> =
        counts.into_iter().map(|(num, count)| (count, Reverse(num))).collect();
    std::iter::from_fn(|| heap.pop())
        .take(k.max(0) as usize)
        .map(|(_, Reverse(num))| num)
        .collect()
}

/// 378. Kth Smallest Element in a Sorted Matrix
///
/// Rows and columns are sorted ascending. -1 when `k` is out of range.
pub fn kth_smallest_matrix(matrix: Vec<Vec<i32>>, k: i32) -> i32 {
    let mut heap: BinaryHeap<Reverse<(i32, usize, usize)>> = matrix
        .iter()
        .enumerate()
        .filter_map(|(r, row)| row.first().map(|&v| Reverse((v, r, 0))))
        .collect();
    let mut remaining = k;
    while let Some(Reverse((value, r, c))) = heap.pop() {
        remaining -= 1;
        if remaining == 0 {
            return value;
        }
        if let Some(&next) = matrix[r].get(c + 1) {
            heap.push(Reverse((next, r, c + 1)));
        }
    }
    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stones() {
        assert_eq!(last_stone_weight(vec![2, 7, 4, 1, 8, 1]), 1);
        assert_eq!(last_stone_weight(vec![1]), 1);
        assert_eq!(last_stone_weight(vec![3, 3]), 0);
    }

    #[test]
    fn closest_points() {
        assert_eq!(k_closest(vec![vec![1, 3], vec![-2, 2]], 1), vec![vec![-2, 2]]);
        assert_eq!(
            k_closest(vec![vec![3, 3], vec![5, -1], vec![-2, 4]], 2),
            vec![vec![3, 3], vec![-2, 4]]
        );
    }

    #[test]
    fn kth_largest() {
        assert_eq!(find_kth_largest(vec![3, 2, 1, 5, 6, 4], 2), 5);
        assert_eq!(find_kth_largest(vec![3, 2, 3, 1, 2, 4, 5, 5, 6], 4), 4);
        assert_eq!(find_kth_largest(vec![1], 2), -1);
    }

    #[test]
    fn frequent() {
        assert_eq!(top_k_frequent(vec![1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(vec![1], 1), vec![1]);
        assert_eq!(top_k_frequent(vec![4, 4, 2, 2, 7], 2), vec![2, 4]);
    }

    #[test]
    fn sorted_matrix() {
        let matrix = vec![vec![1, 5, 9], vec![10, 11, 13], vec![12, 13, 15]];
        assert_eq!(kth_smallest_matrix(matrix.clone(), 8), 13);
        assert_eq!(kth_smallest_matrix(matrix, 10), -1);
        assert_eq!(kth_smallest_matrix(vec![vec![-5]], 1), -5);
    }
}
