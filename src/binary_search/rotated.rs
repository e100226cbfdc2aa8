// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searches over a sorted array rotated at an unknown pivot (distinct values).

/// 153. Find Minimum in Rotated Sorted Array
pub fn find_min(nums: Vec<i32>) -> i32 {
    let (mut lo, mut hi) = (0, nums.len() - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] > nums[hi] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    nums[lo]
}

/// 33. Search in Rotated Sorted Array
///
/// One half of `[lo, hi]` is always sorted; check whether the target lies in it.
pub fn search_rotated(nums: Vec<i32>, target: i32) -> i32 {
    if nums.is_empty() {
        return -1;
    }
    let (mut lo, mut hi) = (0i64, nums.len() as i64 - 1);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let (l, m, h) = (nums[lo as usize], nums[mid as usize], nums[hi as usize]);
        if m == target {
            return mid as i32;
        }
        if l <= m {
            if l <= target && target < m {
                hi = mid - 1;
            } else {
                lo = mid + 1;
            }
        } else if m < target && target <= h {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }
    -1
}
