// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subsequences and interval splitting over number sequences.

/// 300. Longest Increasing Subsequence
///
/// Patience sorting: `tails[k]` is the smallest tail of any strictly
/// increasing subsequence of length `k + 1`, so `tails` stays sorted and
/// each number either extends it or lowers one entry.
pub fn length_of_lis(nums: Vec<i32>) -> i32 {
    let mut tails: Vec<i32> = Vec::with_capacity(nums.len());
    for num in nums {
        let at = tails.partition_point(|&t| t < num);
        if at == tails.len() {
            tails.push(num);
        } else {
            tails[at] = num;
        }
    }
    tails.len() as i32
}

/// 312. Burst Balloons
///
/// Pad with 1s; `best[l][r]` is the most coins from bursting everything
/// strictly between `l` and `r`, choosing `k` as the last balloon to go:
/// `best[l][r] = max over k of best[l][k] + vals[l]*vals[k]*vals[r] + best[k][r]`.
pub fn max_coins(nums: Vec<i32>) -> i32 {
    let mut vals = Vec::with_capacity(nums.len() + 2);
    vals.push(1);
    vals.extend(nums);
    vals.push(1);
    let n = vals.len();
    let mut best = vec![vec![0i32; n]; n];
    for width in 2..n {
        for l in 0..n - width {
            let r = l + width;
            best[l][r] = (l + 1..r)
                .map(|k| best[l][k] + vals[l] * vals[k] * vals[r] + best[k][r])
                .max()
                .unwrap_or(0);
        }
    }
    best[0][n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increasing_subsequences() {
        assert_eq!(length_of_lis(vec![10, 9, 2, 5, 3, 7, 101, 18]), 4);
        assert_eq!(length_of_lis(vec![0, 1, 0, 3, 2, 3]), 4);
        assert_eq!(length_of_lis(vec![7, 7, 7, 7]), 1);
        assert_eq!(length_of_lis(vec![]), 0);
    }

    #[test]
    fn balloons() {
        assert_eq!(max_coins(vec![3, 1, 5, 8]), 167);
        assert_eq!(max_coins(vec![1, 5]), 10);
        assert_eq!(max_coins(vec![]), 0);
    }
}
