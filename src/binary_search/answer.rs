// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search on the answer rather than on an index.

/// 875. Koko Eating Bananas
///
/// Smallest speed that finishes every pile within `h` hours.
pub fn min_eating_speed(piles: Vec<i32>, h: i32) -> i32 {
    let hours_at = |speed: i64| -> i64 {
        piles
            .iter()
            .map(|&pile| (pile as i64 + speed - 1) / speed)
            .sum()
    };
    let (mut lo, mut hi) = (1i64, piles.iter().copied().max().unwrap_or(1) as i64);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if hours_at(mid) <= h as i64 {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo as i32
}

/// 4. Median of Two Sorted Arrays
///
/// Partition the shorter array so the left halves of both hold exactly
/// `(m + n + 1) / 2` elements, all no greater than the right halves.
/// O(log min(m, n)).
pub fn find_median_sorted_arrays(nums1: Vec<i32>, nums2: Vec<i32>) -> f64 {
    let (a, b) = if nums1.len() <= nums2.len() {
        (nums1, nums2)
    } else {
        (nums2, nums1)
    };
    let (m, n) = (a.len(), b.len());
    let half = (m + n + 1) / 2;
    let (mut lo, mut hi) = (0, m);

    loop {
        let i = lo + (hi - lo) / 2;
        let j = half - i;
        let a_left = if i == 0 { i64::MIN } else { a[i - 1] as i64 };
        let a_right = if i == m { i64::MAX } else { a[i] as i64 };
        let b_left = if j == 0 { i64::MIN } else { b[j - 1] as i64 };
        let b_right = if j == n { i64::MAX } else { b[j] as i64 };

        if a_left > b_right {
            hi = i - 1;
        } else if b_left > a_right {
            lo = i + 1;
        } else {
            let left_max = a_left.max(b_left);
            if (m + n) % 2 == 1 {
                return left_max as f64;
            }
            let right_min = a_right.min(b_right);
            return (left_max + right_min) as f64 / 2.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eating_speed() {
        assert_eq!(min_eating_speed(vec![3, 6, 7, 11], 8), 4);
        assert_eq!(min_eating_speed(vec![30, 11, 23, 4, 20], 5), 30);
        assert_eq!(min_eating_speed(vec![30, 11, 23, 4, 20], 6), 23);
        assert_eq!(min_eating_speed(vec![1_000_000_000], 2), 500_000_000);
    }

    #[test]
    fn medians() {
        assert_eq!(find_median_sorted_arrays(vec![1, 3], vec![2]), 2.0);
        assert_eq!(find_median_sorted_arrays(vec![1, 2], vec![3, 4]), 2.5);
        assert_eq!(find_median_sorted_arrays(vec![], vec![1]), 1.0);
        assert_eq!(find_median_sorted_arrays(vec![2], vec![]), 2.0);
        assert_eq!(find_median_sorted_arrays(vec![1, 2, 3, 4, 5], vec![6, 7]), 4.0);
    }
}
