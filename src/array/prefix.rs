// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Running sums and running extremes.

/// 53. Maximum Subarray
///
/// Kadane's algorithm. Non-empty input.
pub fn max_sub_array(nums: Vec<i32>) -> i32 {
    let mut best = nums[0];
    let mut ending_here = 0;
    for num in nums {
        ending_here = num.max(ending_here + num);
        best = best.max(ending_here);
    }
    best
}

/// 121. Best Time to Buy and Sell Stock
pub fn max_profit(prices: Vec<i32>) -> i32 {
    let mut lowest = i32::MAX;
    let mut best = 0;
    for price in prices {
        lowest = lowest.min(price);
        best = best.max(price - lowest);
    }
    best
}

/// 122. Best Time to Buy and Sell Stock II
pub fn max_profit_ii(prices: Vec<i32>) -> i32 {
    prices.windows(2).map(|w| (w[1] - w[0]).max(0)).sum()
}

/// 724. Find Pivot Index
///
/// Leftmost index whose left and right sums match, or -1.
pub fn pivot_index(nums: Vec<i32>) -> i32 {
    let total: i32 = nums.iter().sum();
    let mut left = 0;
    for (i, &num) in nums.iter().enumerate() {
        if left == total - left - num {
            return i as i32;
        }
        left += num;
    }
    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kadane() {
        assert_eq!(max_sub_array(vec![-2, 1, -3, 4, -1, 2, 1, -5, 4]), 6);
        assert_eq!(max_sub_array(vec![1]), 1);
        assert_eq!(max_sub_array(vec![5, 4, -1, 7, 8]), 23);
        assert_eq!(max_sub_array(vec![-3, -1, -2]), -1);
    }

    #[test]
    fn single_trade() {
        assert_eq!(max_profit(vec![7, 1, 5, 3, 6, 4]), 5);
        assert_eq!(max_profit(vec![7, 6, 4, 3, 1]), 0);
    }

    #[test]
    fn unlimited_trades() {
        assert_eq!(max_profit_ii(vec![7, 1, 5, 3, 6, 4]), 7);
        assert_eq!(max_profit_ii(vec![1, 2, 3, 4, 5]), 4);
        assert_eq!(max_profit_ii(vec![1]), 0);
    }

    #[test]
    fn pivots() {
        assert_eq!(pivot_index(vec![1, 7, 3, 6, 5, 6]), 3);
        assert_eq!(pivot_index(vec![1, 2, 3]), -1);
        assert_eq!(pivot_index(vec![2, 1, -1]), 0);
    }
}
