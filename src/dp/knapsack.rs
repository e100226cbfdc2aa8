// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knapsack-style tables indexed by a running total.

use std::collections::HashSet;

/// 322. Coin Change
///
/// Fewest coins summing to `amount`, or -1.
/// `best[t] = min over coins c of best[t - c] + 1`.
pub fn coin_change(coins: Vec<i32>, amount: i32) -> i32 {
    let amount = amount.max(0) as usize;
    let mut best = vec![u32::MAX; amount + 1];
    best[0] = 0;
    for total in 1..=amount {
        for &coin in &coins {
            let Ok(coin) = usize::try_from(coin) else { continue };
            if coin == 0 || coin > total || best[total - coin] == u32::MAX {
                continue;
            }
            best[total] = best[total].min(best[total - coin] + 1);
        }
    }
    match best[amount] {
        u32::MAX => -1,
        count => count as i32,
    }
}

/// 518. Coin Change II
///
/// Number of coin multisets summing to `amount`. Coins in the outer loop
/// count each multiset once.
pub fn change(amount: i32, coins: Vec<i32>) -> i32 {
    let amount = amount.max(0) as usize;
    let mut ways = vec![0u64; amount + 1];
    ways[0] = 1;
    for coin in coins {
        let Ok(coin) = usize::try_from(coin) else { continue };
        if coin == 0 {
            continue;
        }
        for total in coin..=amount {
            ways[total] = ways[total].wrapping_add(ways[total - coin]);
        }
    }
    ways[amount] as i32
}

/// 416. Partition Equal Subset Sum
///
/// Reachable subset sums as a bitset: bit `s` is set when some subset sums
/// to `s`.
pub fn can_partition(nums: Vec<i32>) -> bool {
    let total: i64 = nums.iter().map(|&n| i64::from(n)).sum();
    if total % 2 != 0 || nums.iter().any(|&n| n < 0) {
        return false;
    }
    let half = (total / 2) as usize;
    let mut reachable = vec![false; half + 1];
    reachable[0] = true;
    for num in nums {
        let num = num as usize;
        for sum in (num..=half).rev() {
            reachable[sum] = reachable[sum] || reachable[sum - num];
        }
    }
    reachable[half]
}

/// 494. Target Sum
///
/// Signing every number to reach `target` means choosing a subset summing
/// to `(total + target) / 2`.
pub fn find_target_sum_ways(nums: Vec<i32>, target: i32) -> i32 {
    let total: i64 = nums.iter().map(|&n| i64::from(n)).sum();
    let shifted = total + i64::from(target);
    if target.unsigned_abs() as i64 > total || shifted % 2 != 0 || nums.iter().any(|&n| n < 0) {
        return 0;
    }
    let goal = (shifted / 2) as usize;
    let mut ways = vec![0i32; goal + 1];
    ways[0] = 1;
    for num in nums {
        let num = num as usize;
        for sum in (num..=goal).rev() {
            ways[sum] += ways[sum - num];
        }
    }
    ways[goal]
}

/// 279. Perfect Squares
pub fn num_squares(n: i32) -> i32 {
    let n = n.max(0) as usize;
    let mut best = vec![u32::MAX; n + 1];
    best[0] = 0;
    for total in 1..=n {
        let mut root = 1;
        while root * root <= total {
            best[total] = best[total].min(best[total - root * root] + 1);
            root += 1;
        }
    }
    best[n] as i32
}

/// 139. Word Break
///
/// `fits[i]` is whether `s[..i]` splits into dictionary words.
pub fn word_break(s: String, word_dict: Vec<String>) -> bool {
    let words: HashSet<&str> = word_dict.iter().map(String::as_str).collect();
    let longest = words.iter().map(|w| w.len()).max().unwrap_or(0);
    let mut fits = vec![false; s.len() + 1];
    fits[0] = true;
    for end in 1..=s.len() {
        fits[end] = (end.saturating_sub(longest)..end)
            .any(|start| fits[start] && s.get(start..end).is_some_and(|piece| words.contains(piece)));
    }
    fits[s.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewest_coins() {
        assert_eq!(coin_change(vec![1, 2, 5], 11), 3);
        assert_eq!(coin_change(vec![2], 3), -1);
        assert_eq!(coin_change(vec![1], 0), 0);
        assert_eq!(coin_change(vec![186, 419, 83, 408], 6249), 20);
    }

    #[test]
    fn coin_combinations() {
        assert_eq!(change(5, vec![1, 2, 5]), 4);
        assert_eq!(change(3, vec![2]), 0);
        assert_eq!(change(10, vec![10]), 1);
        assert_eq!(change(0, vec![7]), 1);
    }

    #[test]
    fn partitions() {
        assert!(can_partition(vec![1, 5, 11, 5]));
        assert!(!can_partition(vec![1, 2, 3, 5]));
        assert!(!can_partition(vec![1]));
    }

    #[test]
    fn target_sums() {
        assert_eq!(find_target_sum_ways(vec![1, 1, 1, 1, 1], 3), 5);
        assert_eq!(find_target_sum_ways(vec![1], 1), 1);
        assert_eq!(find_target_sum_ways(vec![1], 2), 0);
        assert_eq!(find_target_sum_ways(vec![0, 0, 1], 1), 4);
        assert_eq!(find_target_sum_ways(vec![100], -200), 0);
    }

    #[test]
    fn squares() {
        assert_eq!(num_squares(12), 3);
        assert_eq!(num_squares(13), 2);
        assert_eq!(num_squares(1), 1);
    }

    #[test]
    fn word_breaks() {
        let dict = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        assert!(word_break("leetcode".into(), dict(&["leet", "code"])));
        assert!(word_break("applepenapple".into(), dict(&["apple", "pen"])));
        assert!(!word_break("catsandog".into(), dict(&["cats", "dog", "sand", "and", "cat"])));
        assert!(word_break(String::new(), dict(&[])));
    }
}
