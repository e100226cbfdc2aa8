// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two indices walking toward (or alongside) each other.

use std::cmp::Ordering;

/// 167. Two Sum II - Input Array Is Sorted
///
/// 1-indexed positions of the pair, or empty when none exists.
pub fn two_sum_sorted(numbers: Vec<i32>, target: i32) -> Vec<i32> {
    if numbers.len() < 2 {
        return Vec::new();
    }
    let (mut lo, mut hi) = (0, numbers.len() - 1);
    while lo < hi {
        match (numbers[lo] + numbers[hi]).cmp(&target) {
            Ordering::Equal => return vec![lo as i32 + 1, hi as i32 + 1],
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
        }
    }
    Vec::new()
}

/// 15. 3Sum
///
/// Unique triplets summing to zero, each sorted ascending, in ascending order.
pub fn three_sum(mut nums: Vec<i32>) -> Vec<Vec<i32>> {
    nums.sort_unstable();
    let n = nums.len();
    let mut triplets = Vec::new();

    for i in 0..n.saturating_sub(2) {
        if nums[i] > 0 {
            break;
        }
        if i > 0 && nums[i] == nums[i - 1] {
            continue;
        }
        let (mut lo, mut hi) = (i + 1, n - 1);
        while lo < hi {
            let sum = nums[i] + nums[lo] + nums[hi];
            match sum.cmp(&0) {
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
                Ordering::Equal => {
                    triplets.push(vec![nums[i], nums[lo], nums[hi]]);
                    lo += 1;
                    hi -= 1;
                    while lo < hi && nums[lo] == nums[lo - 1] {
                        lo += 1;
                    }
                    while lo < hi && nums[hi] == nums[hi + 1] {
                        hi -= 1;
                    }
                }
            }
        }
    }
    triplets
}

/// 11. Container With Most Water
pub fn max_area(height: Vec<i32>) -> i32 {
    if height.len() < 2 {
        return 0;
    }
    let (mut lo, mut hi) = (0, height.len() - 1);
    let mut best = 0;
    while lo < hi {
        let width = (hi - lo) as i32;
        best = best.max(width * height[lo].min(height[hi]));
        if height[lo] < height[hi] {
            lo += 1;
        } else {
            hi -= 1;
        }
    }
    best
}

/// 42. Trapping Rain Water
///
/// The lower wall bounds the water on its side, so move it inward.
pub fn trap(height: Vec<i32>) -> i32 {
    if height.is_empty() {
        return 0;
    }
    let (mut lo, mut hi) = (0, height.len() - 1);
    let (mut left_max, mut right_max) = (0, 0);
    let mut water = 0;
    while lo < hi {
        if height[lo] < height[hi] {
            left_max = left_max.max(height[lo]);
            water += left_max - height[lo];
            lo += 1;
        } else {
            right_max = right_max.max(height[hi]);
            water += right_max - height[hi];
            hi -= 1;
        }
    }
    water
}

/// 88. Merge Sorted Array
///
/// Fills `nums1` from the back so nothing is overwritten before it is read.
pub fn merge(nums1: &mut Vec<i32>, m: i32, nums2: &mut Vec<i32>, n: i32) {
    let (mut i, mut j) = (m as usize, n as usize);
    let mut write = i + j;
    while j > 0 {
        write -= 1;
        if i > 0 && nums1[i - 1] > nums2[j - 1] {
            nums1[write] = nums1[i - 1];
            i -= 1;
        } else {
            nums1[write] = nums2[j - 1];
            j -= 1;
        }
    }
}

/// 977. Squares of a Sorted Array
pub fn sorted_squares(nums: Vec<i32>) -> Vec<i32> {
    let n = nums.len();
    let mut squares = vec![0; n];
    let (mut lo, mut hi) = (0, n);
    for write in (0..n).rev() {
        let (a, b) = (nums[lo].abs(), nums[hi - 1].abs());
        if a > b {
            squares[write] = a * a;
            lo += 1;
        } else {
            squares[write] = b * b;
            hi -= 1;
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_pair() {
        assert_eq!(two_sum_sorted(vec![2, 7, 11, 15], 9), vec![1, 2]);
        assert_eq!(two_sum_sorted(vec![2, 3, 4], 6), vec![1, 3]);
        assert_eq!(two_sum_sorted(vec![-1, 0], -1), vec![1, 2]);
        assert!(two_sum_sorted(vec![1, 2], 10).is_empty());
    }

    #[test]
    fn triplets() {
        assert_eq!(
            three_sum(vec![-1, 0, 1, 2, -1, -4]),
            vec![vec![-1, -1, 2], vec![-1, 0, 1]]
        );
        assert!(three_sum(vec![0, 1, 1]).is_empty());
        assert_eq!(three_sum(vec![0, 0, 0, 0]), vec![vec![0, 0, 0]]);
        assert!(three_sum(vec![]).is_empty());
    }

    #[test]
    fn container() {
        assert_eq!(max_area(vec![1, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
        assert_eq!(max_area(vec![1, 1]), 1);
    }

    #[test]
    fn rain_water() {
        assert_eq!(trap(vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
        assert_eq!(trap(vec![4, 2, 0, 3, 2, 5]), 9);
        assert_eq!(trap(vec![]), 0);
    }

    #[test]
    fn merge_into_first() {
        let mut a = vec![1, 2, 3, 0, 0, 0];
        merge(&mut a, 3, &mut vec![2, 5, 6], 3);
        assert_eq!(a, vec![1, 2, 2, 3, 5, 6]);
        let mut a = vec![0];
        merge(&mut a, 0, &mut vec![1], 1);
        assert_eq!(a, vec![1]);
    }

    #[test]
    fn squares() {
        assert_eq!(sorted_squares(vec![-4, -1, 0, 3, 10]), vec![0, 1, 9, 16, 100]);
        assert_eq!(sorted_squares(vec![-7, -3, 2, 3, 11]), vec![4, 9, 9, 49, 121]);
    }
}
