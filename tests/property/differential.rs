// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential testing: optimized exercises against brute-force oracles.

use leetkit::binary_search::search;
use leetkit::dp::{length_of_lis, min_distance};
use leetkit::intervals::merge;
use leetkit::segment_tree::count_smaller;
use leetkit::string::my_atoi;
use leetkit::testing::{lis_quadratic, max_subarray_brute, smaller_after_brute};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Patience sorting agrees with the quadratic table.
    #[test]
    fn diff_lis(nums in small_ints()) {
        prop_assert_eq!(length_of_lis(nums.clone()) as usize, lis_quadratic(&nums));
    }

    /// Kadane agrees with trying every slice.
    #[test]
    fn diff_max_subarray(nums in prop::collection::vec(-1000i32..1000, 1..40)) {
        let expected = max_subarray_brute(&nums).unwrap();
        prop_assert_eq!(i64::from(leetkit::array::max_sub_array(nums)), expected);
    }

    /// The Fenwick count agrees with counting by hand.
    #[test]
    fn diff_count_smaller(nums in small_ints()) {
        prop_assert_eq!(count_smaller(nums.clone()), smaller_after_brute(&nums));
    }

    /// Edit distance agrees with strsim's Levenshtein.
    #[test]
    fn diff_edit_distance(a in word(), b in word()) {
        let expected = strsim::levenshtein(&a, &b);
        prop_assert_eq!(min_distance(a, b) as usize, expected);
    }

    /// Binary search finds exactly what a linear scan finds.
    #[test]
    fn diff_binary_search(values in prop::collection::btree_set(-100i32..100, 0..30), target in -110i32..110) {
        let nums: Vec<i32> = values.into_iter().collect();
        let expected = nums.iter().position(|&x| x == target).map_or(-1, |i| i as i32);
        prop_assert_eq!(search(nums, target), expected);
    }

    /// atoi reads any in-range number back and clamps the rest.
    #[test]
    fn diff_atoi(n: i64, spaces in 0usize..4, tail in "[a-z ]{0,4}") {
        let text = format!("{}{}{}", " ".repeat(spaces), n, tail);
        let expected = n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        prop_assert_eq!(my_atoi(text), expected);
    }

    /// Merged intervals are sorted, separated and cover the same points.
    #[test]
    fn diff_merge_intervals(raw in prop::collection::vec((0i32..50, 0i32..8), 0..12)) {
        let intervals: Vec<Vec<i32>> = raw.iter().map(|&(s, len)| vec![s, s + len]).collect();
        let merged = merge(intervals.clone());

        for pair in merged.windows(2) {
            prop_assert!(pair[0][1] < pair[1][0], "{:?} overlaps {:?}", pair[0], pair[1]);
        }

        let points = |list: &[Vec<i32>]| -> BTreeSet<i32> {
            list.iter().flat_map(|iv| iv[0]..=iv[1]).collect()
        };
        prop_assert_eq!(points(&merged), points(&intervals));
    }
}
