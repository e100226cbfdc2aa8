// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cycle detection on implicit lists.

/// 287. Find the Duplicate Number
///
/// Treat `i -> nums[i]` as a linked list. With values in `1..=n` over `n + 1`
/// slots, the duplicate is the entry of the cycle (Floyd's tortoise and hare).
pub fn find_duplicate(nums: Vec<i32>) -> i32 {
    let next = |i: i32| nums[i as usize];
    let mut slow = next(0);
    let mut fast = next(next(0));
    while slow != fast {
        slow = next(slow);
        fast = next(next(fast));
    }
    let mut finder = 0;
    while finder != slow {
        finder = next(finder);
        slow = next(slow);
    }
    slow
}
