// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lookups that trade memory for a single pass.

use std::collections::{HashMap, HashSet};

/// 1. Two Sum
///
/// Indices of the two numbers adding up to `target`, smaller index first.
/// Empty when no pair exists.
pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());
    for (i, &num) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - num)) {
            return vec![j as i32, i as i32];
        }
        seen.insert(num, i);
    }
    Vec::new()
}

/// 217. Contains Duplicate
pub fn contains_duplicate(nums: Vec<i32>) -> bool {
    let mut seen = HashSet::with_capacity(nums.len());
    !nums.into_iter().all(|num| seen.insert(num))
}

/// 49. Group Anagrams
///
/// Groups come out in order of first appearance; words keep input order
/// within a group.
pub fn group_anagrams(strs: Vec<String>) -> Vec<Vec<String>> {
    let mut slot_of: HashMap<[u8; 26], usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for word in strs {
        let mut key = [0u8; 26];
        for b in word.bytes() {
            key[(b - b'a') as usize] += 1;
        }
        let slot = *slot_of.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word);
    }
    groups
}

/// 128. Longest Consecutive Sequence
///
/// O(n): only walk runs from their smallest element.
pub fn longest_consecutive(nums: Vec<i32>) -> i32 {
    let set: HashSet<i32> = nums.into_iter().collect();
    let mut best = 0;
    for &num in &set {
        if num != i32::MIN && set.contains(&(num - 1)) {
            continue;
        }
        let mut len = 1;
        let mut next = num;
        while next != i32::MAX && set.contains(&(next + 1)) {
            next += 1;
            len += 1;
        }
        best = best.max(len);
    }
    best
}

/// 238. Product of Array Except Self
pub fn product_except_self(nums: Vec<i32>) -> Vec<i32> {
    let n = nums.len();
    let mut answer = vec![1; n];
    for i in 1..n {
        answer[i] = answer[i - 1] * nums[i - 1];
    }
    let mut suffix = 1;
    for i in (0..n).rev() {
        answer[i] *= suffix;
        suffix *= nums[i];
    }
    answer
}

/// 560. Subarray Sum Equals K
pub fn subarray_sum(nums: Vec<i32>, k: i32) -> i32 {
    let mut prefix_counts: HashMap<i32, i32> = HashMap::from([(0, 1)]);
    let mut prefix = 0;
    let mut count = 0;
    for num in nums {
        prefix += num;
        count += prefix_counts.get(&(prefix - k)).copied().unwrap_or(0);
        *prefix_counts.entry(prefix).or_insert(0) += 1;
    }
    count
}

/// 169. Majority Element
///
/// Boyer-Moore voting; the majority element is guaranteed to exist.
pub fn majority_element(nums: Vec<i32>) -> i32 {
    let mut candidate = 0;
    let mut votes = 0;
    for num in nums {
        if votes == 0 {
            candidate = num;
        }
        votes += if num == candidate { 1 } else { -1 };
    }
    candidate
}
