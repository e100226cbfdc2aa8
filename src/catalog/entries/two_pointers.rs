// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::two_pointers::*;

const T: Topic = Topic::TwoPointers;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 167, "two-sum-ii-input-array-is-sorted", "Two Sum II - Input Array Is Sorted", Medium, Exact,
        |a| answer(two_sum_sorted(a.get(0)?, a.get(1)?)),
        "[[2,7,11,15],9]" => "[1,2]",
        "[[2,3,4],6]" => "[1,3]",
        "[[-1,0],-1]" => "[1,2]"),
    problem!(T; 15, "3sum", "3Sum", Medium, Nested,
        |a| answer(three_sum(a.get(0)?)),
        "[[-1,0,1,2,-1,-4]]" => "[[-1,-1,2],[-1,0,1]]",
        "[[0,1,1]]" => "[]",
        "[[0,0,0]]" => "[[0,0,0]]"),
    problem!(T; 11, "container-with-most-water", "Container With Most Water", Medium, Exact,
        |a| answer(max_area(a.get(0)?)),
        "[[1,8,6,2,5,4,8,3,7]]" => "49",
        "[[1,1]]" => "1"),
    problem!(T; 42, "trapping-rain-water", "Trapping Rain Water", Hard, Exact,
        |a| answer(trap(a.get(0)?)),
        "[[0,1,0,2,1,0,1,3,2,1,2,1]]" => "6",
        "[[4,2,0,3,2,5]]" => "9"),
    problem!(T; 88, "merge-sorted-array", "Merge Sorted Array", Easy, Exact,
        |a| {
            let mut nums1: Vec<i32> = a.get(0)?;
            let mut nums2: Vec<i32> = a.get(2)?;
            merge(&mut nums1, a.get(1)?, &mut nums2, a.get(3)?);
            answer(nums1)
        },
        "[[1,2,3,0,0,0],3,[2,5,6],3]" => "[1,2,2,3,5,6]",
        "[[1],1,[],0]" => "[1]",
        "[[0],0,[1],1]" => "[1]"),
    problem!(T; 977, "squares-of-a-sorted-array", "Squares of a Sorted Array", Easy, Exact,
        |a| answer(sorted_squares(a.get(0)?)),
        "[[-4,-1,0,3,10]]" => "[0,1,9,16,100]",
        "[[-7,-3,2,3,11]]" => "[4,9,9,49,121]"),
];
