// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy choices that never need revisiting.

use std::collections::BTreeMap;

/// 55. Jump Game
pub fn can_jump(nums: Vec<i32>) -> bool {
    let mut reach = 0usize;
    for (i, &step) in nums.iter().enumerate() {
        if i > reach {
            return false;
        }
        reach = reach.max(i + step.max(0) as usize);
    }
    true
}

/// 45. Jump Game II
///
/// BFS by layers: each jump extends the frontier to the farthest index
/// reachable from the current one. -1 when the end is unreachable.
pub fn jump(nums: Vec<i32>) -> i32 {
    let last = nums.len().saturating_sub(1);
    let (mut jumps, mut frontier, mut farthest) = (0, 0usize, 0usize);
    for (i, &step) in nums.iter().enumerate().take(last) {
        if i > farthest {
            return -1;
        }
        farthest = farthest.max(i + step.max(0) as usize);
        if i == frontier {
            jumps += 1;
            frontier = farthest;
            if frontier >= last {
                break;
            }
        }
    }
    if frontier >= last {
        jumps
    } else {
        -1
    }
}

/// 134. Gas Station
///
/// If the total gas covers the total cost, the station after the last
/// point where the running tank went negative works. -1 otherwise.
pub fn can_complete_circuit(gas: Vec<i32>, cost: Vec<i32>) -> i32 {
    let (mut total, mut tank, mut start) = (0i64, 0i64, 0usize);
    for (i, (&g, &c)) in gas.iter().zip(&cost).enumerate() {
        let net = i64::from(g) - i64::from(c);
        total += net;
        tank += net;
        if tank < 0 {
            tank = 0;
            start = i + 1;
        }
    }
    if total >= 0 && start < gas.len() {
        start as i32
    } else {
        -1
    }
}

/// 846. Hand of Straights
pub fn is_n_straight_hand(hand: Vec<i32>, group_size: i32) -> bool {
    let Ok(size) = usize::try_from(group_size) else {
        return false;
    };
    if size == 0 || hand.len() % size != 0 {
        return false;
    }
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for card in hand {
        *counts.entry(card).or_default() += 1;
    }
    // The smallest remaining card must start a run.
    while let Some((&low, &needed)) = counts.first_key_value() {
        for card in (0..size as i32).map(|k| low + k) {
            match counts.get_mut(&card) {
                Some(count) if *count >= needed => {
                    *count -= needed;
                    if *count == 0 {
                        counts.remove(&card);
                    }
                }
                _ => return false,
            }
        }
    }
    true
}

/// 1899. Merge Triplets to Form Target Triplet
///
/// Only triplets that never exceed the target can be merged; the target is
/// reachable when those cover every coordinate.
pub fn merge_triplets(triplets: Vec<Vec<i32>>, target: Vec<i32>) -> bool {
    let mut matched = vec![false; target.len()];
    for triplet in triplets.iter().filter(|t| t.len() == target.len()) {
        if triplet.iter().zip(&target).all(|(v, t)| v <= t) {
            for (k, (v, t)) in triplet.iter().zip(&target).enumerate() {
                matched[k] |= v == t;
            }
        }
    }
    matched.into_iter().all(|m| m)
}

/// 763. Partition Labels
pub fn partition_labels(s: String) -> Vec<i32> {
    let bytes = s.as_bytes();
    let mut last = [0usize; 256];
    for (i, &b) in bytes.iter().enumerate() {
        last[b as usize] = i;
    }
    let mut sizes = Vec::new();
    let (mut start, mut end) = (0, 0);
    for (i, &b) in bytes.iter().enumerate() {
        end = end.max(last[b as usize]);
        if i == end {
            sizes.push((end - start + 1) as i32);
            start = i + 1;
        }
    }
    sizes
}

/// 678. Valid Parenthesis String
///
/// Tracks the range of possible open counts; `*` widens it both ways.
pub fn check_valid_string(s: String) -> bool {
    let (mut low, mut high) = (0i32, 0i32);
    for c in s.chars() {
        match c {
            '(' => {
                low += 1;
                high += 1;
            }
            ')' => {
                low -= 1;
                high -= 1;
            }
            '*' => {
                low -= 1;
                high += 1;
            }
            _ => {}
        }
        if high < 0 {
            return false;
        }
        low = low.max(0);
    }
    low == 0
}

/// 135. Candy
///
/// Two passes: satisfy left neighbours, then right neighbours.
pub fn candy(ratings: Vec<i32>) -> i32 {
    let n = ratings.len();
    let mut candies = vec![1; n];
    for i in 1..n {
        if ratings[i] > ratings[i - 1] {
            candies[i] = candies[i - 1] + 1;
        }
    }
    for i in (0..n.saturating_sub(1)).rev() {
        if ratings[i] > ratings[i + 1] {
            candies[i] = candies[i].max(candies[i + 1] + 1);
        }
    }
    candies.iter().sum()
}
