// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lower and upper bounds on sorted data.

/// First index in `[0, len)` where `pred` turns true, or `len` if it never
/// does. `pred` must be monotone (false...false true...true).
fn partition_point(len: usize, pred: impl Fn(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// 704. Binary Search
pub fn search(nums: Vec<i32>, target: i32) -> i32 {
    let i = partition_point(nums.len(), |i| nums[i] >= target);
    if nums.get(i) == Some(&target) {
        i as i32
    } else {
        -1
    }
}

/// 35. Search Insert Position
pub fn search_insert(nums: Vec<i32>, target: i32) -> i32 {
    partition_point(nums.len(), |i| nums[i] >= target) as i32
}

/// 74. Search a 2D Matrix
///
/// Rows are sorted and each row starts above the previous row's end, so the
/// matrix is one sorted array in row-major order.
pub fn search_matrix(matrix: Vec<Vec<i32>>, target: i32) -> bool {
    let cols = matrix.first().map_or(0, Vec::len);
    if cols == 0 {
        return false;
    }
    let cell = |i: usize| matrix[i / cols][i % cols];
    let i = partition_point(matrix.len() * cols, |i| cell(i) >= target);
    i < matrix.len() * cols && cell(i) == target
}

/// 34. Find First and Last Position of Element in Sorted Array
pub fn search_range(nums: Vec<i32>, target: i32) -> Vec<i32> {
    let first = partition_point(nums.len(), |i| nums[i] >= target);
    if nums.get(first) != Some(&target) {
        return vec![-1, -1];
    }
    let past = partition_point(nums.len(), |i| nums[i] > target);
    vec![first as i32, past as i32 - 1]
}

/// 69. Sqrt(x)
pub fn my_sqrt(x: i32) -> i32 {
    if x < 2 {
        return x.max(0);
    }
    let x = x as u64;
    // First r with r * r > x, minus one.
    let past = partition_point(x as usize + 2, |r| (r as u64) * (r as u64) > x);
    past as i32 - 1
}

/// 162. Find Peak Element
///
/// Any peak; `nums[-1]` and `nums[n]` count as negative infinity. The
/// descent predicate is not monotone here, but every false-to-true boundary
/// the search lands on is a peak.
pub fn find_peak_element(nums: Vec<i32>) -> i32 {
    let last = nums.len().saturating_sub(1);
    partition_point(last, |i| nums[i] > nums[i + 1]) as i32
}
