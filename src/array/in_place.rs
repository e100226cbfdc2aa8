// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rearrangements that must run in O(1) extra space.

/// 26. Remove Duplicates from Sorted Array
///
/// Compacts unique values to the front; returns how many there are.
pub fn remove_duplicates(nums: &mut Vec<i32>) -> i32 {
    if nums.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..nums.len() {
        if nums[read] != nums[write - 1] {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write as i32
}

/// 27. Remove Element
pub fn remove_element(nums: &mut Vec<i32>, val: i32) -> i32 {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != val {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write as i32
}

/// 283. Move Zeroes
pub fn move_zeroes(nums: &mut Vec<i32>) {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            nums.swap(write, read);
            write += 1;
        }
    }
}

/// 75. Sort Colors
///
/// Dutch national flag: `[0, low)` zeros, `[low, mid)` ones, `(high, n)` twos.
pub fn sort_colors(nums: &mut Vec<i32>) {
    let (mut low, mut mid) = (0usize, 0usize);
    let mut high = nums.len();
    while mid < high {
        match nums[mid] {
            0 => {
                nums.swap(low, mid);
                low += 1;
                mid += 1;
            }
            2 => {
                high -= 1;
                nums.swap(mid, high);
            }
            _ => mid += 1,
        }
    }
}

/// 189. Rotate Array
pub fn rotate(nums: &mut Vec<i32>, k: i32) {
    if nums.is_empty() {
        return;
    }
    let k = k as usize % nums.len();
    nums.reverse();
    nums[..k].reverse();
    nums[k..].reverse();
}

/// 41. First Missing Positive
///
/// Cycle-sort each value `v` in `1..=n` into slot `v - 1`.
pub fn first_missing_positive(mut nums: Vec<i32>) -> i32 {
    let n = nums.len();
    for i in 0..n {
        while nums[i] > 0 && (nums[i] as usize) <= n && nums[nums[i] as usize - 1] != nums[i] {
            let target = nums[i] as usize - 1;
            nums.swap(i, target);
        }
    }
    nums.iter()
        .enumerate()
        .find(|&(i, &v)| v != i as i32 + 1)
        .map_or(n as i32 + 1, |(i, _)| i as i32 + 1)
}

/// 31. Next Permutation
pub fn next_permutation(nums: &mut Vec<i32>) {
    let n = nums.len();
    if n < 2 {
        return;
    }
    let Some(pivot) = (0..n - 1).rev().find(|&i| nums[i] < nums[i + 1]) else {
        nums.reverse();
        return;
    };
    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| nums[j] > nums[pivot])
        .unwrap_or(pivot + 1);
    nums.swap(pivot, successor);
    nums[pivot + 1..].reverse();
}
