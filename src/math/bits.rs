// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit tricks.

/// 136. Single Number
///
/// XOR cancels every value that appears twice.
pub fn single_number(nums: Vec<i32>) -> i32 {
    nums.into_iter().fold(0, |acc, n| acc ^ n)
}

/// 191. Number of 1 Bits
pub fn hamming_weight(n: u32) -> i32 {
    let (mut n, mut count) = (n, 0);
    while n != 0 {
        n &= n - 1;
        count += 1;
    }
    count
}

/// 338. Counting Bits
///
/// `bits(i) = bits(i >> 1) + (i & 1)`.
pub fn count_bits(n: i32) -> Vec<i32> {
    let n = n.max(0) as usize;
    let mut bits = vec![0; n + 1];
    for i in 1..=n {
        bits[i] = bits[i >> 1] + (i & 1) as i32;
    }
    bits
}

/// 190. Reverse Bits
pub fn reverse_bits(x: u32) -> u32 {
    let mut x = x;
    // Swap halves, then quarters, down to single bits.
    x = (x >> 16) | (x << 16);
    x = ((x & 0xff00_ff00) >> 8) | ((x & 0x00ff_00ff) << 8);
    x = ((x & 0xf0f0_f0f0) >> 4) | ((x & 0x0f0f_0f0f) << 4);
    x = ((x & 0xcccc_cccc) >> 2) | ((x & 0x3333_3333) << 2);
    ((x & 0xaaaa_aaaa) >> 1) | ((x & 0x5555_5555) << 1)
}

/// 268. Missing Number
pub fn missing_number(nums: Vec<i32>) -> i32 {
    nums.iter()
        .enumerate()
        .fold(nums.len() as i32, |acc, (i, &n)| acc ^ i as i32 ^ n)
}

/// 371. Sum of Two Integers
///
/// Addition without `+`: XOR adds without carries, AND finds them.
pub fn get_sum(a: i32, b: i32) -> i32 {
    let (mut sum, mut carry) = (a as u32, b as u32);
    while carry != 0 {
        (sum, carry) = (sum ^ carry, (sum & carry) << 1);
    }
    sum as i32
}
