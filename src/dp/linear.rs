// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recurrences over a single index.

/// 509. Fibonacci Number
pub fn fib(n: i32) -> i32 {
    let (mut a, mut b) = (0i32, 1i32);
    for _ in 0..n.max(0) {
        (a, b) = (b, a.wrapping_add(b));
    }
    a
}

/// 70. Climbing Stairs
///
/// `ways(i) = ways(i - 1) + ways(i - 2)`.
pub fn climb_stairs(n: i32) -> i32 {
    let (mut one_back, mut two_back) = (1i32, 1i32);
    for _ in 1..n.max(1) {
        (one_back, two_back) = (one_back.wrapping_add(two_back), one_back);
    }
    one_back
}

/// 746. Min Cost Climbing Stairs
pub fn min_cost_climbing_stairs(cost: Vec<i32>) -> i32 {
    let (mut prev, mut current) = (0, 0);
    for i in 2..=cost.len() {
        (prev, current) = (current, (current + cost[i - 1]).min(prev + cost[i - 2]));
    }
    current
}

/// Best loot from a row of houses where neighbours cannot both be robbed.
fn rob_line(houses: &[i32]) -> i32 {
    // (best skipping this house, best robbing it)
    let (skip, take) = houses
        .iter()
        .fold((0, 0), |(skip, take), &cash| (skip.max(take), skip + cash));
    skip.max(take)
}

/// 198. House Robber
pub fn rob(nums: Vec<i32>) -> i32 {
    rob_line(&nums)
}

/// 213. House Robber II
///
/// Houses form a circle: rob without the first or without the last.
pub fn rob_circular(nums: Vec<i32>) -> i32 {
    match nums.len() {
        0 => 0,
        1 => nums[0],
        n => rob_line(&nums[1..]).max(rob_line(&nums[..n - 1])),
    }
}

/// 152. Maximum Product Subarray
///
/// Tracks both the largest and smallest product ending here, since a
/// negative factor swaps them.
pub fn max_product(nums: Vec<i32>) -> i32 {
    let Some((&first, rest)) = nums.split_first() else {
        return 0;
    };
    let (mut high, mut low, mut best) = (first, first, first);
    for &x in rest {
        let candidates = [x, high.saturating_mul(x), low.saturating_mul(x)];
        high = candidates.into_iter().max().unwrap_or(x);
        low = candidates.into_iter().min().unwrap_or(x);
        best = best.max(high);
    }
    best
}

/// 309. Best Time to Buy and Sell Stock with Cooldown
///
/// Three states per day: holding, just sold (cooling down), or free.
pub fn max_profit_with_cooldown(prices: Vec<i32>) -> i32 {
    let (mut held, mut sold, mut free) = (i32::MIN / 2, 0, 0);
    for price in prices {
        (held, sold, free) = (held.max(free - price), held + price, free.max(sold));
    }
    sold.max(free)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_and_stairs() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(2), 1);
        assert_eq!(fib(4), 3);
        assert_eq!(fib(30), 832_040);
        assert_eq!(climb_stairs(1), 1);
        assert_eq!(climb_stairs(2), 2);
        assert_eq!(climb_stairs(3), 3);
        assert_eq!(climb_stairs(45), 1_836_311_903);
    }

    #[test]
    fn stair_costs() {
        assert_eq!(min_cost_climbing_stairs(vec![10, 15, 20]), 15);
        assert_eq!(min_cost_climbing_stairs(vec![1, 100, 1, 1, 1, 100, 1, 1, 100, 1]), 6);
    }

    #[test]
    fn robbery() {
        assert_eq!(rob(vec![1, 2, 3, 1]), 4);
        assert_eq!(rob(vec![2, 7, 9, 3, 1]), 12);
        assert_eq!(rob(vec![]), 0);
        assert_eq!(rob_circular(vec![2, 3, 2]), 3);
        assert_eq!(rob_circular(vec![1, 2, 3, 1]), 4);
        assert_eq!(rob_circular(vec![1, 2, 3]), 3);
        assert_eq!(rob_circular(vec![5]), 5);
    }

    #[test]
    fn products() {
        assert_eq!(max_product(vec![2, 3, -2, 4]), 6);
        assert_eq!(max_product(vec![-2, 0, -1]), 0);
        assert_eq!(max_product(vec![-2, 3, -4]), 24);
        assert_eq!(max_product(vec![-2]), -2);
    }

    #[test]
    fn cooldown() {
        assert_eq!(max_profit_with_cooldown(vec![1, 2, 3, 0, 2]), 3);
        assert_eq!(max_profit_with_cooldown(vec![1]), 0);
        assert_eq!(max_profit_with_cooldown(vec![]), 0);
    }
}
